//! Report formatting and printing utilities.
//!
//! Pretty output is cargo-style; JSON output is an array of issue objects.
//! Kept apart from the engine so rxlint can be used as a library.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::{
    args::OutputFormat,
    commands::{CommandResult, CommandSummary, InitSummary},
};
use crate::config::CONFIG_FILE_NAME;
use crate::diagnostics::MessageArgs;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, format: OutputFormat, verbose: bool) -> Result<()> {
    match (&result.summary, format) {
        (CommandSummary::Init(summary), _) => print_init(summary),
        (CommandSummary::Check, OutputFormat::Json) => {
            report_json_to(&result.issues, &mut io::stdout().lock())?;
        }
        (CommandSummary::Check, OutputFormat::Pretty) => {
            report_to(&result.issues, &mut io::stdout().lock());
            if result.issues.is_empty() {
                print_success_to(result.files_checked, &mut io::stdout().lock());
            }
            print_parse_warning_to(result.parse_error_count, verbose, &mut io::stderr().lock());
        }
    }
    Ok(())
}

/// Print issues to a custom writer in cargo-style format.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(source_files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} source {} - no issues found",
            source_files,
            if source_files == 1 { "file" } else { "files" }
        )
        .green()
    );
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

/// One issue as it appears in `--format json` output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonIssue<'a> {
    file: &'a str,
    line: usize,
    col: usize,
    severity: String,
    rule: &'static str,
    message: String,
    message_key: Option<&'static str>,
    message_args: MessageArgs,
}

impl<'a> JsonIssue<'a> {
    fn from_issue(issue: &'a Issue) -> Self {
        let (file, line, col) = match issue.location() {
            ReportLocation::Source(ctx) => (ctx.file_path(), ctx.line(), ctx.col()),
            ReportLocation::File { path } => (path, 0, 0),
        };
        Self {
            file,
            line,
            col,
            severity: issue.report_severity().to_string(),
            rule: issue.report_rule(),
            message: issue.message(),
            message_key: issue.message_key().map(|key| key.code()),
            message_args: issue.message_args().cloned().unwrap_or_default(),
        }
    }
}

/// Write issues as a pretty-printed JSON array.
pub fn report_json_to<W: Write>(issues: &[Issue], writer: &mut W) -> Result<()> {
    let mut sorted = issues.to_vec();
    sorted.sort();
    let entries: Vec<JsonIssue<'_>> = sorted.iter().map(JsonIssue::from_issue).collect();
    serde_json::to_writer_pretty(&mut *writer, &entries)?;
    writeln!(writer)?;
    Ok(())
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let (file_path, line, col, source_line) = loc.parts();

    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message(),
        issue.report_rule().dimmed().cyan()
    );

    // Clickable location: --> path:line:col
    if line > 0 {
        let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), file_path, line, col);
    } else {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), file_path);
    }

    if let Some(source_line) = source_line {
        let caret_char = match severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };

        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // col is 1-based
        let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret_char,
            width = max_line_width,
            padding = caret_padding
        );
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "\n{} {} {} ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            if total_problems == 1 { "problem" } else { "problems" },
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Source(ctx) => Some(ctx.line()),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    use super::*;
    use crate::{
        core::{SourceContext, SourceLocation},
        diagnostics::{Message, MessageKey},
        issues::{LintIssue, ParseErrorIssue},
        rules::RuleName,
    };

    fn strip_ansi(s: &str) -> String {
        let mut result = String::new();
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                // Skip until 'm'
                while let Some(&next) = chars.peek() {
                    chars.next();
                    if next == 'm' {
                        break;
                    }
                }
            } else {
                result.push(c);
            }
        }
        result
    }

    fn flags_issue(line: usize, col: usize, source: &str) -> Issue {
        let message = Message::keyed(MessageKey::InvalidRegexp, [("arg", "q")]);
        Issue::Lint(LintIssue {
            context: SourceContext::new(SourceLocation::new("./src/app.js", line, col), source),
            rule: RuleName::NoInvalidRegexp,
            severity: Severity::Error,
            message: message.render(),
            message_key: message.key(),
            message_args: message.args().cloned().unwrap_or_default(),
        })
    }

    fn parse_error() -> Issue {
        Issue::ParseError(ParseErrorIssue {
            file_path: "./src/broken.js".to_string(),
            error: "Unexpected eof".to_string(),
        })
    }

    fn render(issues: &[Issue]) -> String {
        let mut output = Vec::new();
        report_to(issues, &mut output);
        strip_ansi(&String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_report_empty() {
        let mut output = Vec::new();
        report_to(&[], &mut output);
        assert!(output.is_empty());
    }

    #[test]
    fn test_report_lint_issue() {
        let stripped = render(&[flags_issue(12, 8, "const r = RegExp('a', 'q');")]);

        assert!(stripped.contains("error: Invalid flags supplied to RegExp constructor 'q'"));
        assert!(stripped.contains("no-invalid-regexp"));
        assert!(stripped.contains("--> ./src/app.js:12:8"));
        assert!(stripped.contains("12 | const r = RegExp('a', 'q');"));
        assert!(stripped.contains("1 problem (1 error, 0 warnings)"));
    }

    #[test]
    fn test_caret_points_at_column() {
        let stripped = render(&[flags_issue(1, 5, "let RegExp")]);
        let caret_line = stripped
            .lines()
            .find(|line| line.trim_end().ends_with('^'))
            .unwrap();
        assert_eq!(caret_line, "  |     ^");
    }

    #[test]
    fn test_report_parse_error_has_no_line() {
        let stripped = render(&[parse_error()]);
        assert!(stripped.contains("error: Failed to parse: Unexpected eof  parse-error"));
        assert!(stripped.contains("--> ./src/broken.js\n"));
    }

    #[test]
    fn test_print_success() {
        let mut output = Vec::new();
        print_success_to(1, &mut output);
        assert!(strip_ansi(&String::from_utf8(output).unwrap())
            .contains("Checked 1 source file - no issues found"));

        let mut output = Vec::new();
        print_success_to(3, &mut output);
        assert!(strip_ansi(&String::from_utf8(output).unwrap())
            .contains("Checked 3 source files - no issues found"));
    }

    #[test]
    fn test_parse_warning_hidden_when_verbose() {
        let mut output = Vec::new();
        print_parse_warning_to(2, true, &mut output);
        assert!(output.is_empty());

        print_parse_warning_to(2, false, &mut output);
        assert!(strip_ansi(&String::from_utf8(output).unwrap())
            .contains("2 file(s) could not be parsed"));
    }

    #[test]
    fn test_report_json() {
        let mut output = Vec::new();
        report_json_to(&[parse_error(), flags_issue(3, 1, "RegExp('a', 'q')")], &mut output)
            .unwrap();
        let value: Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(
            value,
            json!([
                {
                    "file": "./src/app.js",
                    "line": 3,
                    "col": 1,
                    "severity": "error",
                    "rule": "no-invalid-regexp",
                    "message": "Invalid flags supplied to RegExp constructor 'q'",
                    "messageKey": "invalid regexp",
                    "messageArgs": { "arg": "q" }
                },
                {
                    "file": "./src/broken.js",
                    "line": 0,
                    "col": 0,
                    "severity": "error",
                    "rule": "parse-error",
                    "message": "Failed to parse: Unexpected eof",
                    "messageKey": null,
                    "messageArgs": {}
                }
            ])
        );
    }
}
