// src/config.rs
//! Import type table for rulepack.

#![deny(missing_docs)]

use crate::error::RuleError;
use anyhow::Context;
use clap::ValueEnum;
use std::fmt;
use std::{env, path::Path, path::PathBuf};

/// Which assistant an import targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ImportKind {
    /// Cursor AI rules.
    Cursor,
    /// Claude Code configuration.
    ClaudeCode,
}

impl ImportKind {
    /// The CLI name of this kind, as accepted by `--type`.
    pub fn name(self) -> &'static str {
        match self {
            ImportKind::Cursor => "cursor",
            ImportKind::ClaudeCode => "claude-code",
        }
    }
}

impl fmt::Display for ImportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One import destination: where its templates live and where they land.
#[derive(Debug, Clone)]
pub struct ImportType {
    /// Which assistant this entry serves.
    pub kind: ImportKind,
    /// Destination directory, relative to the project being set up.
    pub dir: PathBuf,
    /// Root of this entry's template tree.
    pub templates: PathBuf,
    /// Human-readable description used in listings and summaries.
    pub description: &'static str,
}

/// Immutable table of the configured import types, built once at startup.
#[derive(Debug)]
pub struct Registry {
    types: [ImportType; 2],
}

impl Registry {
    /// Build the table against the bundled templates root.
    pub fn builtin() -> RuleError<Self> {
        Ok(Self::with_templates_root(&bundled_templates_root()?))
    }

    /// Build the table against an explicit templates root.
    pub fn with_templates_root(root: &Path) -> Self {
        Self {
            types: [
                ImportType {
                    kind: ImportKind::Cursor,
                    dir: PathBuf::from(".cursor/rules"),
                    templates: root.join("cursor-rules"),
                    description: "Cursor AI rules (.mdc files)",
                },
                ImportType {
                    kind: ImportKind::ClaudeCode,
                    dir: PathBuf::from(".claude"),
                    templates: root.join("claude-code"),
                    description: "Claude Code configuration files",
                },
            ],
        }
    }

    /// The entry for `kind`.
    pub fn get(&self, kind: ImportKind) -> &ImportType {
        match kind {
            ImportKind::Cursor => &self.types[0],
            ImportKind::ClaudeCode => &self.types[1],
        }
    }

    /// The entry for an explicit `--type`, or the first-defined type.
    pub fn get_or_default(&self, kind: Option<ImportKind>) -> &ImportType {
        match kind {
            Some(kind) => self.get(kind),
            None => &self.types[0],
        }
    }

    /// All entries, in table order.
    pub fn iter(&self) -> impl Iterator<Item = &ImportType> {
        self.types.iter()
    }
}

/// Locate the bundled `templates/` tree relative to the executable:
/// `../templates` for an installed layout with the binary under `bin/`,
/// `../../templates` for a cargo target directory (the checkout root).
/// Falls back to the first candidate when neither exists.
fn bundled_templates_root() -> RuleError<PathBuf> {
    let exe = env::current_exe().context("locating the rulepack executable")?;
    let exe_dir = exe.parent().unwrap_or(Path::new("."));
    let candidates = [
        exe_dir.join("..").join("templates"),
        exe_dir.join("..").join("..").join("templates"),
    ];
    let root = candidates
        .iter()
        .find(|dir| dir.is_dir())
        .unwrap_or(&candidates[0]);
    Ok(root.clone())
}
