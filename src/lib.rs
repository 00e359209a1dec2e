// src/lib.rs
//! rulepack library.

#![deny(missing_docs)]

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod install;
pub mod resolver;
pub mod template;
