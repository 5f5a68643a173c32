//! Template Rendering
//!
//! Substitutes the import list into a plain-text template. The only
//! recognised token is [`PLACEHOLDER`]; there is no escaping and no nesting.

use std::fs;
use std::path::Path;

use crate::error::{ScanError, ScanResult};

/// Token replaced by the rendered import list.
pub const PLACEHOLDER: &str = "{{imports}}";

/// Separator placed between imports in the rendered list.
pub const SEPARATOR: &str = ", ";

/// Read the template at `path` and substitute `imports` into it.
///
/// Fails with [`ScanError::FileAccess`] if the template cannot be read.
pub fn render_template(imports: &[String], path: &Path) -> ScanResult<String> {
    let template = fs::read_to_string(path)
        .map_err(|e| ScanError::FileAccess(path.to_path_buf(), e.to_string()))?;
    Ok(render(&template, imports))
}

/// Replace every [`PLACEHOLDER`] in `template` with `imports` joined by
/// [`SEPARATOR`].
pub fn render(template: &str, imports: &[String]) -> String {
    template.replace(PLACEHOLDER, &imports.join(SEPARATOR))
}
