// src/install.rs
//! Template installation for rulepack.

#![deny(missing_docs)]

use crate::config::ImportType;
use crate::error::RuleError;
use crate::resolver::ResolvedTemplate;
use crate::template::TemplateId;
use anyhow::Context;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

/// Copies resolved templates into an import type's destination directory.
pub struct Installer();

impl Installer {
    /// Install `id` for `ty`: resolve the source file, ensure the
    /// destination directory, copy the bytes verbatim (overwriting any
    /// previous install), and return the destination path. Resolution
    /// precedes directory creation: a bad id leaves the filesystem
    /// untouched.
    pub fn install(ty: &ImportType, id: &TemplateId) -> RuleError<PathBuf> {
        let resolved = ResolvedTemplate::find(ty, id)?;
        Self::ensure_dest_dir(ty)?;
        let dest = ty.dir.join(id.flat_file_name(resolved.extension));
        fs::copy(&resolved.path, &dest).with_context(|| {
            format!("copying {} to {}", resolved.path.display(), dest.display())
        })?;
        Ok(dest)
    }

    /// Create `ty.dir` recursively when missing, with a one-line notice
    /// on first creation.
    fn ensure_dest_dir(ty: &ImportType) -> RuleError<()> {
        if ty.dir.exists() {
            return Ok(());
        }
        fs::create_dir_all(&ty.dir).with_context(|| format!("creating {}", ty.dir.display()))?;
        println!("{} {} directory", "created".cyan().bold(), ty.dir.display());
        Ok(())
    }
}
