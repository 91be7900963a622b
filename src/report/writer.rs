use crate::report::CrawlReport;
use std::path::Path;

/// Result path used when none is supplied
pub const DEFAULT_RESULT_PATH: &str = "./results.txt";

/// Writes the flat newline-delimited union of every `result_set` entry.
pub fn write_flat(report: &CrawlReport, path: &Path) -> crate::Result<()> {
    let mut out = String::new();
    for url in report.all_urls() {
        out.push_str(&url);
        out.push('\n');
    }

    std::fs::write(path, out)?;
    tracing::info!("flat results written to {}", path.display());
    Ok(())
}

/// Writes the full nested report structure as pretty-printed JSON.
pub fn write_json(report: &CrawlReport, path: &Path) -> crate::Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(std::io::Error::from)?;
    std::fs::write(path, json)?;
    tracing::info!("report written to {}", path.display());
    Ok(())
}
