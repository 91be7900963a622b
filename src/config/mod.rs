//! Configuration for linkrake
//!
//! The crawl configuration is assembled from CLI flags rather than a config
//! file; this module holds the config types, their validation, and the
//! readers for the seed and blacklist list files.

mod sources;
mod types;
mod validation;

pub use sources::{read_blacklist, read_list, read_seeds, DEFAULT_SEED};
pub use types::Config;
pub use validation::validate;
