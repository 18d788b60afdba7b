//! Issue types for lint results.
//!
//! Issues are the reporter-facing form of a diagnostic: the span has been
//! resolved to a file/line/column, the message has been rendered, and the
//! configured severity has been applied.

use std::cmp::Ordering;

use enum_dispatch::enum_dispatch;

use crate::core::SourceContext;
use crate::diagnostics::{MessageArgs, MessageKey};
use crate::rules::RuleName;

// ============================================================
// Severity
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A rule diagnostic located in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintIssue {
    pub context: SourceContext,
    pub rule: RuleName,
    pub severity: Severity,
    /// Rendered display text.
    pub message: String,
    /// Catalog key, when the message came from the catalog.
    pub message_key: Option<MessageKey>,
    pub message_args: MessageArgs,
}

/// File that failed to be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

// ============================================================
// Issue Enum
// ============================================================

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Lint(LintIssue),
    ParseError(ParseErrorIssue),
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location (has source_line for context display).
    Source(&'a SourceContext),
    /// File-level only (for ParseError - no line context).
    File { path: &'a str },
}

impl ReportLocation<'_> {
    /// (path, line, col, source line); file-level locations use 0/0.
    pub fn parts(&self) -> (&str, usize, usize, Option<&str>) {
        match self {
            ReportLocation::Source(ctx) => (
                ctx.file_path(),
                ctx.line(),
                ctx.col(),
                Some(ctx.source_line.as_str()),
            ),
            ReportLocation::File { path } => (*path, 0, 0, None),
        }
    }
}

/// Trait for types that can be reported to CLI.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    /// Rule identifier shown next to the message.
    fn report_rule(&self) -> &'static str;

    fn message_key(&self) -> Option<MessageKey> {
        None
    }

    fn message_args(&self) -> Option<&MessageArgs> {
        None
    }
}

impl Report for LintIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.message.clone()
    }

    fn report_severity(&self) -> Severity {
        self.severity
    }

    fn report_rule(&self) -> &'static str {
        self.rule.as_str()
    }

    fn message_key(&self) -> Option<MessageKey> {
        self.message_key
    }

    fn message_args(&self) -> Option<&MessageArgs> {
        Some(&self.message_args)
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        format!("Failed to parse: {}", self.error)
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> &'static str {
        "parse-error"
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> Ordering {
        // Sort by: file_path, line, col, message
        let a = self.location();
        let b = other.location();
        let (a_path, a_line, a_col, _) = a.parts();
        let (b_path, b_line, b_col, _) = b.parts();

        a_path
            .cmp(b_path)
            .then_with(|| a_line.cmp(&b_line))
            .then_with(|| a_col.cmp(&b_col))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SourceLocation;
    use pretty_assertions::assert_eq;

    fn lint_issue(file: &str, line: usize, col: usize, message: &str) -> Issue {
        Issue::Lint(LintIssue {
            context: SourceContext::new(SourceLocation::new(file, line, col), "RegExp('[')"),
            rule: RuleName::NoInvalidRegexp,
            severity: Severity::Error,
            message: message.to_string(),
            message_key: None,
            message_args: MessageArgs::new(),
        })
    }

    #[test]
    fn test_report_lint_issue() {
        let issue = lint_issue("a.js", 3, 7, "Unclosed character class");
        assert_eq!(issue.report_rule(), "no-invalid-regexp");
        assert_eq!(issue.report_severity(), Severity::Error);
        assert_eq!(issue.location().parts(), ("a.js", 3, 7, Some("RegExp('[')")));
    }

    #[test]
    fn test_report_parse_error() {
        let issue = Issue::ParseError(ParseErrorIssue {
            file_path: "broken.js".to_string(),
            error: "Expected ident".to_string(),
        });
        assert_eq!(issue.message(), "Failed to parse: Expected ident");
        assert_eq!(issue.report_rule(), "parse-error");
        assert_eq!(issue.location().parts(), ("broken.js", 0, 0, None));
    }

    #[test]
    fn test_issue_ordering() {
        let mut issues = vec![
            lint_issue("b.js", 1, 1, "x"),
            lint_issue("a.js", 10, 1, "x"),
            lint_issue("a.js", 2, 5, "y"),
            lint_issue("a.js", 2, 5, "a"),
        ];
        issues.sort();
        let order: Vec<_> = issues
            .iter()
            .map(|i| {
                let loc = i.location();
                let (path, line, _, _) = loc.parts();
                format!("{}:{}:{}", path, line, i.message())
            })
            .collect();
        assert_eq!(order, vec!["a.js:2:a", "a.js:2:y", "a.js:10:x", "b.js:1:x"]);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }
}
