//! Regex engines used to decide whether a RegExp pattern compiles.
//!
//! The linter never reimplements regex syntax. It hands the pattern to a real
//! engine and passes the engine's error text through untouched.

use crate::config::PatternDialect;

/// Something that can try to compile a regex pattern.
pub trait PatternEngine: Send + Sync {
    /// Compile `pattern`, returning the engine's own error text on failure.
    fn compile(&self, pattern: &str) -> Result<(), String>;
}

/// ECMAScript regex syntax (`regress`), compiled without flags the way
/// `new RegExp(pattern)` does.
#[derive(Debug, Clone, Copy, Default)]
pub struct EcmaEngine;

impl PatternEngine for EcmaEngine {
    fn compile(&self, pattern: &str) -> Result<(), String> {
        regress::Regex::new(pattern)
            .map(drop)
            .map_err(|e| e.to_string())
    }
}

/// Linear-time engine (`regex`): rejects look-around and back-references.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictEngine;

impl PatternEngine for StrictEngine {
    fn compile(&self, pattern: &str) -> Result<(), String> {
        regex::Regex::new(pattern)
            .map(drop)
            .map_err(|e| e.to_string())
    }
}

pub fn engine_for(dialect: PatternDialect) -> Box<dyn PatternEngine> {
    match dialect {
        PatternDialect::Ecma => Box::new(EcmaEngine),
        PatternDialect::Strict => Box::new(StrictEngine),
    }
}
