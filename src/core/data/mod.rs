//! Core data types shared by the parser, linter and reporters.

pub mod source;

pub use source::{SourceContext, SourceLocation};
