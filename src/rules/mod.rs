//! Lint rules.
//!
//! Each rule registers the call-site kinds it wants to see and turns a
//! [`CallSite`] into zero or more [`Diagnostic`]s. Rules are pure: they hold
//! no per-file state and never report errors to the caller.
//!
//! ## Module Structure
//!
//! - `no_invalid_regexp`: invalid pattern or flags passed to `RegExp`

pub mod no_invalid_regexp;

use std::{fmt, str::FromStr};

use enum_dispatch::enum_dispatch;
use thiserror::Error;

use crate::{
    config::Config,
    core::{
        parsers::js::ParserOptions,
        regex_engine::engine_for,
        syntax::{CallKind, CallSite},
    },
    diagnostics::Diagnostic,
};

pub use no_invalid_regexp::NoInvalidRegexp;

/// Identifier of a built-in rule, as written in config and directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleName {
    NoInvalidRegexp,
}

impl RuleName {
    pub fn all() -> Vec<RuleName> {
        vec![RuleName::NoInvalidRegexp]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RuleName::NoInvalidRegexp => "no-invalid-regexp",
        }
    }

    /// Number of options the rule accepts after its level.
    pub fn option_count(self) -> usize {
        match self {
            RuleName::NoInvalidRegexp => 0,
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown rule \"{0}\"")]
pub struct UnknownRule(pub String);

impl FromStr for RuleName {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleName::all()
            .into_iter()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| UnknownRule(s.to_string()))
    }
}

#[enum_dispatch]
pub trait Rule {
    fn name(&self) -> RuleName;

    /// Node kinds this rule wants delivered.
    fn node_kinds(&self) -> &'static [CallKind];

    fn check(&self, site: &CallSite<'_>) -> Vec<Diagnostic>;
}

#[enum_dispatch(Rule)]
pub enum LintRule {
    NoInvalidRegexp(NoInvalidRegexp),
}

/// Every built-in rule, configured from `config`.
pub fn all_rules(config: &Config) -> Vec<LintRule> {
    let options = ParserOptions::new(config.ecma_version);
    RuleName::all()
        .into_iter()
        .map(|name| match name {
            RuleName::NoInvalidRegexp => {
                NoInvalidRegexp::new(engine_for(config.pattern_dialect), options).into()
            }
        })
        .collect()
}
