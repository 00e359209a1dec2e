// src/error.rs
//! Error handling for rulepack.

#![deny(missing_docs)]

/// RuleError is alias for anyhow
pub type RuleError<T> = anyhow::Result<T>;
