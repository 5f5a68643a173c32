//! Directory Scanner
//!
//! Walks a single directory (non-recursive), runs [`extract_imports`] over
//! every source file with the configured extension and folds the results
//! into a sorted, deduplicated list.
//!
//! Unreadable source files are logged and skipped. Only a failure to list
//! the directory itself is reported as an error.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tracing::{debug, trace, warn};

use super::extract::extract_imports;
use crate::error::{ScanError, ScanResult};

/// File extension of CUE source files.
pub const CUE_EXTENSION: &str = "cue";

/// Directory scan options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Extension (without the leading dot) of files to scan.
    /// Default: `"cue"`.
    pub extension: String,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::cue()
    }
}

impl ScanOptions {
    /// Options for scanning CUE sources.
    pub fn cue() -> Self {
        Self::with_extension(CUE_EXTENSION)
    }

    /// Options for scanning files with a custom extension.
    pub fn with_extension(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    fn matches(&self, file_name: &str) -> bool {
        file_name
            .strip_suffix(self.extension.as_str())
            .is_some_and(|stem| stem.ends_with('.'))
    }
}

/// Collect the imports of every CUE file directly inside `dir`.
///
/// Returns the import paths sorted byte-wise ascending, each exactly once.
pub fn find_imports(dir: &Path) -> ScanResult<Vec<String>> {
    find_imports_with(dir, &ScanOptions::default())
}

/// Like [`find_imports`], with explicit [`ScanOptions`].
pub fn find_imports_with(dir: &Path, options: &ScanOptions) -> ScanResult<Vec<String>> {
    let dir_error = |e: std::io::Error| ScanError::DirectoryRead(dir.to_path_buf(), e.to_string());

    // List everything up front so no file is opened while enumerating.
    let entries = fs::read_dir(dir)
        .map_err(dir_error)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(dir_error)?;

    let mut import_set = BTreeSet::new();

    for entry in entries {
        let path = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();

        if !options.matches(&name) {
            trace!(file = %path.display(), "skipping non-source entry");
            continue;
        }

        // Symlinks are followed; directories named like sources are not files.
        if !path.is_file() {
            trace!(file = %path.display(), "skipping non-file entry");
            continue;
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!(file = %path.display(), error = %e, "skipping unreadable source file");
                continue;
            }
        };

        let found = extract_imports(&content);
        debug!(file = %path.display(), imports = found.len(), "scanned source file");
        import_set.extend(found);
    }

    Ok(import_set.into_iter().collect())
}
