use crate::ConfigError;
use std::path::Path;

/// Seed used when no seed list path is supplied
pub const DEFAULT_SEED: &str = "https://www.youtube.com";

/// Reads a newline-delimited list file.
///
/// Lines are trimmed and empty lines dropped; the remaining order is
/// preserved.
pub fn read_list(path: &Path) -> Result<Vec<String>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ListIo {
        path: path.display().to_string(),
        source,
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Reads the seed list.
///
/// An explicitly given path that does not exist is the one fatal input
/// error of the whole program. With no path at all, the built-in default
/// seed is used.
pub fn read_seeds(path: Option<&Path>) -> Result<Vec<String>, ConfigError> {
    match path {
        Some(path) if !path.exists() => {
            Err(ConfigError::SeedListNotFound(path.display().to_string()))
        }
        Some(path) => read_list(path),
        None => Ok(vec![DEFAULT_SEED.to_string()]),
    }
}

/// Reads the blacklist.
///
/// A missing or unreadable blacklist source is treated as an empty
/// blacklist, never an error.
pub fn read_blacklist(path: Option<&Path>) -> Vec<String> {
    let Some(path) = path else {
        return Vec::new();
    };

    match read_list(path) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("blacklist unavailable ({}), continuing without one", e);
            Vec::new()
        }
    }
}
