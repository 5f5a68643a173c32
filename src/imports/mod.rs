//! Import Extraction
//!
//! - `extract` - Regex scan of one file's text for import paths
//! - `scanner` - Directory walk, deduplication and sorting

mod extract;
mod scanner;

pub use extract::extract_imports;
pub use scanner::{find_imports, find_imports_with, ScanOptions, CUE_EXTENSION};
