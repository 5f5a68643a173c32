//! cueimports - CUE Import Lister
//!
//! Scans the CUE files in a directory and reports which packages they import.
//!
//! # Pipeline
//!
//! 1. **Import Extraction** (`imports` module)
//!    - Lists the directory (non-recursive) and reads every `*.cue` file
//!    - Matches single-line and factored `import` statements with a regex
//!    - Drops aliases, deduplicates and sorts the paths
//!
//! 2. **Template Rendering** (`template` module, optional)
//!    - Replaces `{{imports}}` in a text file with the comma-joined list
//!
//! # Example
//!
//! ```no_run
//! use cueimports::{find_imports, render_template};
//! use std::path::Path;
//!
//! let imports = find_imports(Path::new(".")).unwrap();
//! for import in &imports {
//!     println!("- {}", import);
//! }
//!
//! let text = render_template(&imports, Path::new("deps.tmpl")).unwrap();
//! print!("{}", text);
//! ```
//!
//! # Limitations
//!
//! Scanning is textual. Imports that appear inside comments or string
//! literals are reported too.

pub mod error;
pub mod imports;
pub mod template;

pub use error::{ScanError, ScanResult};
pub use imports::{extract_imports, find_imports, find_imports_with, ScanOptions, CUE_EXTENSION};
pub use template::{render, render_template, PLACEHOLDER, SEPARATOR};
