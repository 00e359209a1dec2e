// src/commands.rs
//! The operations behind each CLI mode.

#![deny(missing_docs)]

use crate::catalog::{Catalog, ROOT_CATEGORY};
use crate::config::{ImportType, Registry};
use crate::error::RuleError;
use crate::install::Installer;
use crate::template::TemplateId;
use colored::Colorize;

/// List every template available for `ty`, grouped by category.
///
/// A missing templates root is fatal here; an empty catalog is not.
pub fn list(ty: &ImportType) -> RuleError<()> {
    let catalog = Catalog::scan(ty)?;
    if catalog.is_empty() {
        println!("no templates found for {}", ty.kind);
        return Ok(());
    }

    println!("{} {}:", "available".bold(), ty.description);
    for (category, ids) in catalog.by_category() {
        if category == ROOT_CATEGORY {
            println!("\n  {}", "core templates:".bold());
        } else {
            println!("\n  {}", format!("{category}:").bold());
        }
        for id in ids {
            println!("    - {id}");
        }
    }
    println!();
    println!("{} rulepack --type {} <template-name>", "usage:".dimmed(), ty.kind);
    if let Some(first) = catalog.ids().first() {
        println!("{} rulepack --type {} {first}", "example:".dimmed(), ty.kind);
    }
    Ok(())
}

/// Install each named template for `ty`. Failures are reported per
/// item and never stop the remaining names.
pub fn install_named(ty: &ImportType, names: &[String]) -> RuleError<()> {
    for name in names {
        let id = TemplateId::new(name.as_str());
        report_install(ty, &id);
    }
    Ok(())
}

/// Install everything for one explicitly selected type.
pub fn install_all(ty: &ImportType) -> RuleError<()> {
    let (installed, total) = install_catalog(ty)?;
    println!("installed {installed}/{total} {}", ty.description.to_lowercase());
    Ok(())
}

/// Install everything for every configured type. A type whose scan
/// fails is reported and skipped; the remaining types still run.
pub fn install_all_types(registry: &Registry) -> RuleError<()> {
    println!("{}", "installing all templates for every import type".bold());

    let mut grand_installed = 0;
    let mut grand_total = 0;
    for ty in registry.iter() {
        println!("\n{} {}", "installing".bold(), ty.description);
        match install_catalog(ty) {
            Ok((installed, total)) => {
                grand_installed += installed;
                grand_total += total;
                println!("{}: {installed}/{total} templates installed", ty.kind);
            }
            Err(err) => {
                eprintln!("{} {err:#}", "skipping".yellow().bold());
            }
        }
    }

    println!("\n{} {grand_installed}/{grand_total} templates installed", "total:".green().bold());
    Ok(())
}

/// Install every template in `ty`'s catalog, in scan order.
/// Returns (installed, attempted).
fn install_catalog(ty: &ImportType) -> RuleError<(usize, usize)> {
    let catalog = Catalog::scan(ty)?;
    let mut installed = 0;
    for id in catalog.ids() {
        if report_install(ty, id) {
            installed += 1;
        }
    }
    Ok((installed, catalog.len()))
}

/// One per-item line: the destination on success, the error chain on
/// failure. Returns whether the install landed.
fn report_install(ty: &ImportType, id: &TemplateId) -> bool {
    match Installer::install(ty, id) {
        Ok(dest) => {
            println!("{} {id} -> {}", "added".green().bold(), dest.display());
            true
        }
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            false
        }
    }
}
