// src/resolver.rs
//! Template resolution for rulepack.

#![deny(missing_docs)]

use crate::config::ImportType;
use crate::error::RuleError;
use crate::template::{TEMPLATE_EXTENSIONS, TemplateId};
use anyhow::bail;
use std::path::PathBuf;

/// A template id pinned to the concrete file it will be copied from.
#[derive(Debug)]
pub struct ResolvedTemplate {
    /// Source file on disk.
    pub path: PathBuf,
    /// The extension that won resolution; reused for the destination name.
    pub extension: &'static str,
}

impl ResolvedTemplate {
    /// Find the file backing `id` under `ty`'s templates root, trying
    /// each recognized extension in priority order.
    pub fn find(ty: &ImportType, id: &TemplateId) -> RuleError<Self> {
        for extension in TEMPLATE_EXTENSIONS {
            let path = ty.templates.join(format!("{id}{extension}"));
            if path.is_file() {
                return Ok(Self { path, extension });
            }
        }
        bail!("template '{id}' not found for {}", ty.kind)
    }
}
