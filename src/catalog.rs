// src/catalog.rs
//! Template discovery for rulepack.

#![deny(missing_docs)]

use crate::config::ImportType;
use crate::error::RuleError;
use crate::template::{TemplateId, strip_template_extension};
use anyhow::{Context, bail};
use ignore::WalkBuilder;
use std::collections::{BTreeMap, HashSet};
use std::fs;

/// Category key for ids with no `/` segment.
pub const ROOT_CATEGORY: &str = "Root";

/// The templates discoverable under one import type's root.
#[derive(Debug)]
pub struct Catalog {
    ids: Vec<TemplateId>,
}

impl Catalog {
    /// Scan `ty`'s templates root, depth first with siblings sorted by
    /// file name. Files count as templates when their name ends with a
    /// recognized extension; the id is the root-relative path with the
    /// extension stripped. Ids are unique even when extensions collide.
    pub fn scan(ty: &ImportType) -> RuleError<Self> {
        let root = ty.templates.as_path();
        let meta = fs::metadata(root).with_context(|| {
            format!("no templates directory for {}: {}", ty.kind, root.display())
        })?;
        if !meta.is_dir() {
            bail!("templates root for {} is not a directory: {}", ty.kind, root.display());
        }

        let mut builder = WalkBuilder::new(root);

        // Bundled asset tree: keep hidden files, no gitignore semantics.
        builder
            .hidden(false)
            .parents(false)
            .ignore(false)
            .git_ignore(false)
            .git_exclude(false)
            .git_global(false)
            .follow_links(false)
            .max_depth(None)
            .sort_by_file_name(|a, b| a.cmp(b));

        let mut ids = Vec::new();
        let mut seen = HashSet::new();

        for res in builder.build() {
            let dent = match res {
                Ok(d) => d,
                Err(_) => continue,
            };

            if !dent.file_type().map(|t| t.is_file()).unwrap_or(false) {
                continue;
            }

            let Ok(rel) = dent.path().strip_prefix(root) else {
                continue;
            };
            let name = dent.file_name().to_string_lossy();
            let Some(stem) = strip_template_extension(&name) else {
                continue;
            };

            let mut segments = Vec::new();
            if let Some(prefix) = rel.parent() {
                for part in prefix.components() {
                    segments.push(part.as_os_str().to_string_lossy().into_owned());
                }
            }
            segments.push(stem.to_owned());

            let id = segments.join("/");
            if seen.insert(id.clone()) {
                ids.push(TemplateId::new(id));
            }
        }

        Ok(Self { ids })
    }

    /// All ids, in scan order.
    pub fn ids(&self) -> &[TemplateId] {
        &self.ids
    }

    /// Number of templates found.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when the scan found nothing.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Group ids by category for display. The map's key order is the
    /// alphabetical category order; root-level ids land under
    /// [`ROOT_CATEGORY`].
    pub fn by_category(&self) -> BTreeMap<&str, Vec<&TemplateId>> {
        let mut grouped: BTreeMap<&str, Vec<&TemplateId>> = BTreeMap::new();
        for id in &self.ids {
            grouped
                .entry(id.category().unwrap_or(ROOT_CATEGORY))
                .or_default()
                .push(id);
        }
        grouped
    }
}
