//! Core linting engine.
//!
//! - `parsers`: swc-based source parsing and regex literal parsing
//! - `syntax`: call-site view handed to rules
//! - `regex_engine`: pattern compilation backends
//! - `linter`: single-pass traversal and report sink
//! - `file_scanner` / `context`: discovery and parallel linting of a tree

pub mod context;
pub mod data;
pub mod file_scanner;
pub mod linter;
pub mod parsers;
pub mod regex_engine;
pub mod syntax;

pub use context::{ConfigOverrides, LintContext, LintRun};
pub use data::{SourceContext, SourceLocation};
pub use linter::Linter;
