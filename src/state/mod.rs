//! State module for crawl bookkeeping
//!
//! This module provides the set machinery the controller leans on:
//!
//! - `collapse`: reduces any sequence of URLs to a duplicate-free set
//! - `SeenTargets`: the cumulative set of every target rendered this run,
//!   used to keep any target from being rendered twice

mod seen;

// Re-export main types
pub use seen::{collapse, SeenTargets};
