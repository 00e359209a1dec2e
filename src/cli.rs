// src/cli.rs
//! CLI argument parser for rulepack.

#![deny(missing_docs)]

use crate::config::ImportKind;
use clap::Parser;

const AFTER_HELP: &str = "\
Import types:
  cursor       Cursor AI rules (.mdc files) - default
  claude-code  Claude Code configuration files

Examples:
  rulepack --list
  rulepack --list --type claude-code
  rulepack rust
  rulepack --type cursor writing/technical-voice
  rulepack --type claude-code rust/config
  rulepack --all --type cursor
  rulepack --all";

/// Install AI assistant rule templates into the current project.
#[derive(Parser, Debug)]
#[command(
    name = "rulepack",
    version,
    about = "Install AI assistant rule templates into the current project",
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// List all available templates for the selected type.
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Install every available template (every type when --type is absent).
    #[arg(long)]
    pub all: bool,

    /// Import type to operate on. Defaults to cursor.
    #[arg(long = "type", value_name = "NAME")]
    pub import_type: Option<ImportKind>,

    /// Templates to install, by identifier (e.g. rust or writing/technical-voice).
    #[arg(value_name = "TEMPLATE")]
    pub templates: Vec<String>,
}
