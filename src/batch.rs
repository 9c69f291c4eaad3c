//! Batch conversion module
//!
//! Discovers convertible files under a root directory and fans one
//! conversion job per file out across a worker pool.

mod driver;
mod scanner;

pub use driver::{BatchDriver, BatchOptions, BatchSummary, ConversionJob};
pub use scanner::discover_files;
