//! Invalid `RegExp` constructor argument detection.
//!
//! Flags `RegExp("[")` and `new RegExp("a", "q")`: a string pattern the regex
//! engine refuses, or string flags the JavaScript grammar refuses. Only
//! literal strings are inspected; anything computed at runtime is skipped.

use swc_common::Span;
use thiserror::Error;

use super::{Rule, RuleName};
use crate::{
    core::{
        parsers::js::{ParserOptions, RegexLiteral, parse_regex_literal},
        regex_engine::PatternEngine,
        syntax::{CallKind, CallSite},
    },
    diagnostics::{Diagnostic, Message, MessageKey},
};

const REGEXP_CONSTRUCTOR: &str = "RegExp";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegexArgumentError {
    /// The pattern did not compile; carries the engine's message.
    #[error("{0}")]
    InvalidPattern(String),
    #[error("{}", flags_message(flags).render())]
    InvalidFlags { flags: String },
}

fn flags_message(flags: &str) -> Message {
    Message::keyed(MessageKey::InvalidRegexp, [("arg", flags)])
}

impl RegexArgumentError {
    fn into_diagnostic(self, span: Span) -> Diagnostic {
        let message = match self {
            RegexArgumentError::InvalidPattern(text) => Message::Text(text),
            RegexArgumentError::InvalidFlags { flags } => flags_message(&flags),
        };
        Diagnostic::new(span, message)
    }
}

pub struct NoInvalidRegexp {
    engine: Box<dyn PatternEngine>,
    parser_options: ParserOptions,
}

impl NoInvalidRegexp {
    pub fn new(engine: Box<dyn PatternEngine>, parser_options: ParserOptions) -> Self {
        Self {
            engine,
            parser_options,
        }
    }

    fn check_pattern(&self, pattern: &str) -> Result<(), RegexArgumentError> {
        self.engine
            .compile(pattern)
            .map_err(RegexArgumentError::InvalidPattern)
    }

    /// Flags are valid iff `/./<flags>` parses to a regex literal with a value.
    fn check_flags(&self, flags: &str) -> Result<(), RegexArgumentError> {
        let literal = format!("/./{}", flags);
        match parse_regex_literal(&literal, &self.parser_options) {
            Ok(RegexLiteral::Regex { value: Some(_), .. }) | Ok(RegexLiteral::Empty) => Ok(()),
            Ok(RegexLiteral::Regex { value: None, .. }) | Ok(RegexLiteral::Other) | Err(_) => {
                Err(RegexArgumentError::InvalidFlags {
                    flags: flags.to_string(),
                })
            }
        }
    }
}

impl Rule for NoInvalidRegexp {
    fn name(&self) -> RuleName {
        RuleName::NoInvalidRegexp
    }

    fn node_kinds(&self) -> &'static [CallKind] {
        &[CallKind::Call, CallKind::New]
    }

    fn check(&self, site: &CallSite<'_>) -> Vec<Diagnostic> {
        if site.callee_name != Some(REGEXP_CONSTRUCTOR) {
            return Vec::new();
        }
        let Some(pattern) = site.string_argument(0) else {
            return Vec::new();
        };
        let flags = site.string_argument(1).unwrap_or_default();

        let mut diagnostics = Vec::new();
        if let Err(err) = self.check_pattern(pattern) {
            diagnostics.push(err.into_diagnostic(site.span));
        }
        if !flags.is_empty()
            && let Err(err) = self.check_flags(flags)
        {
            diagnostics.push(err.into_diagnostic(site.span));
        }
        diagnostics
    }
}
