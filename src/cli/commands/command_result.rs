use crate::issues::{Issue, Report, Severity};

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Init(InitSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running rxlint commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// All issues found during the check.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
    /// Number of files that failed to be read or parsed.
    pub parse_error_count: usize,
    pub files_checked: usize,
}

impl CommandResult {
    pub fn from_issues(issues: Vec<Issue>, files_checked: usize, parse_error_count: usize) -> Self {
        let count = |severity| {
            issues
                .iter()
                .filter(|issue| issue.report_severity() == severity)
                .count()
        };
        Self {
            summary: CommandSummary::Check,
            error_count: count(Severity::Error),
            warning_count: count(Severity::Warning),
            issues,
            parse_error_count,
            files_checked,
        }
    }

    pub fn init(created: bool) -> Self {
        Self {
            summary: CommandSummary::Init(InitSummary { created }),
            error_count: usize::from(!created),
            warning_count: 0,
            issues: Vec::new(),
            parse_error_count: 0,
            files_checked: 0,
        }
    }
}
