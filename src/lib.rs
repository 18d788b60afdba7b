//! rxlint - RegExp argument checker for JavaScript and TypeScript
//!
//! rxlint is a CLI tool and library that flags `RegExp(...)` and
//! `new RegExp(...)` calls whose literal pattern does not compile or whose
//! literal flags are not valid JavaScript regex flags.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and validation
//! - `core`: Parsing, traversal engine, file discovery
//! - `diagnostics`: Rule diagnostics and the message catalog
//! - `directives`: `rxlint-disable` comment handling
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Rule registry and the rules themselves

pub mod cli;
pub mod config;
pub mod core;
pub mod diagnostics;
pub mod directives;
pub mod issues;
pub mod rules;
