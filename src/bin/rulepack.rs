// src/bin/rulepack.rs
//! rulepack CLI binary.

#![deny(missing_docs)]

use clap::{CommandFactory, Parser};
use colored::Colorize;

use rulepack::cli::Cli;
use rulepack::commands;
use rulepack::config::Registry;
use rulepack::error::RuleError;

fn main() -> RuleError<()> {
    let args = Cli::parse();

    // Bare invocation is a help request, not an error.
    if std::env::args_os().len() <= 1 {
        Cli::command().print_help()?;
        return Ok(());
    }

    let registry = Registry::builtin()?;

    // Mode precedence: list, install-all, install-named.
    if args.list {
        commands::list(registry.get_or_default(args.import_type))?;
        return Ok(());
    }

    if args.all {
        match args.import_type {
            Some(kind) => commands::install_all(registry.get(kind))?,
            None => commands::install_all_types(&registry)?,
        }
        return Ok(());
    }

    if !args.templates.is_empty() {
        commands::install_named(registry.get_or_default(args.import_type), &args.templates)?;
        return Ok(());
    }

    eprintln!("{} no templates specified", "error:".red().bold());
    Cli::command().print_help()?;
    std::process::exit(1);
}
