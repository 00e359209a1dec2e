// src/template.rs
//! Template identifiers and the recognized file extensions.

#![deny(missing_docs)]

use std::fmt;

/// Recognized template file extensions, in resolution priority order.
pub const TEMPLATE_EXTENSIONS: [&str; 3] = [".mdc", ".md", ".json"];

/// Strip the first matching recognized extension from a file name.
///
/// Returns `None` for non-template names, including a bare extension
/// with no stem (a file literally named `.md`).
pub fn strip_template_extension(file_name: &str) -> Option<&str> {
    TEMPLATE_EXTENSIONS
        .iter()
        .find_map(|ext| file_name.strip_suffix(ext))
        .filter(|stem| !stem.is_empty())
}

/// A hierarchical template identifier: path segments joined by `/`,
/// independent of the backing file's extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateId(String);

impl TemplateId {
    /// Wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a plain string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Every segment before the last, or `None` for a root-level id.
    pub fn category(&self) -> Option<&str> {
        self.0.rsplit_once('/').map(|(category, _)| category)
    }

    /// Destination file name: `/` becomes `-`, the resolved extension
    /// is appended. No other characters change.
    pub fn flat_file_name(&self, extension: &str) -> String {
        format!("{}{}", self.0.replace('/', "-"), extension)
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
