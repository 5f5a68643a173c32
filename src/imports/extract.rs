//! Import Statement Extraction
//!
//! Pulls import paths out of CUE source text with a single regular
//! expression. Two forms are recognised:
//!
//! - Single-line: `import "strings"` or `import metav1 "k8s.io/api/meta/v1"`
//! - Factored block:
//!
//! ```cue
//! import (
//!     "list"
//!     foo "custom/pkg"
//! )
//! ```
//!
//! # Limitations
//!
//! This is a text scan, not a parser. Imports inside string literals or
//! comments are picked up as if they were real, and a trailing comment on a
//! line inside a factored block is read as that line's path.
//!
//! A single-line path with no closing quote runs on, across newlines, up to
//! the next `"` in the file: `import "a\nname: "b"` yields `a\nname: `.

use std::sync::OnceLock;

use regex::Regex;

/// Group 1: interior of a factored `import ( ... )` block.
/// Group 2: quoted path of a single-line import, alias skipped.
const IMPORT_PATTERN: &str =
    r#"\bimport\s*\(([^)]*)\)|\bimport\s+(?:[#_$\p{L}][\w$#]*\s+)?"([^"]+)""#;

static IMPORT_REGEX: OnceLock<Regex> = OnceLock::new();

fn import_regex() -> &'static Regex {
    IMPORT_REGEX.get_or_init(|| Regex::new(IMPORT_PATTERN).expect("import pattern is valid"))
}

/// Extract every import path referenced in `source`.
///
/// Paths are returned in match order and may repeat; deduplication is the
/// caller's job. Empty paths are dropped.
pub fn extract_imports(source: &str) -> Vec<String> {
    let mut imports = Vec::new();

    for caps in import_regex().captures_iter(source) {
        if let Some(block) = caps.get(1) {
            imports.extend(block_imports(block.as_str()));
        } else if let Some(path) = caps.get(2) {
            if let Some(path) = clean_path(path.as_str()) {
                imports.push(path);
            }
        }
    }

    imports
}

/// Paths inside a factored block, one per non-blank line.
///
/// The last whitespace-separated token on each line is the path, which
/// drops an optional alias in front of it.
fn block_imports(block: &str) -> impl Iterator<Item = String> + '_ {
    block
        .lines()
        .filter_map(|line| line.split_whitespace().last())
        .filter_map(clean_path)
}

fn clean_path(raw: &str) -> Option<String> {
    let path = raw.trim_matches('"');
    if path.is_empty() {
        None
    } else {
        Some(path.to_string())
    }
}
