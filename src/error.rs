//! Error types shared by the scanner and the template renderer.

use std::path::PathBuf;

/// Result type for scan and render operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors that can occur while collecting or rendering imports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// The scan root could not be enumerated.
    DirectoryRead(PathBuf, String),
    /// A file could not be opened or decoded as UTF-8.
    FileAccess(PathBuf, String),
}

impl ScanError {
    /// Path the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ScanError::DirectoryRead(path, _) | ScanError::FileAccess(path, _) => path,
        }
    }
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanError::DirectoryRead(path, err) => {
                write!(f, "Failed to read directory '{}': {}", path.display(), err)
            }
            ScanError::FileAccess(path, err) => {
                write!(f, "Failed to read '{}': {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for ScanError {}
