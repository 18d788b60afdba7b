use anyhow::Result;

use super::super::args::CheckCommand;
use super::CommandResult;
use crate::core::{LintContext, Linter};

pub fn check(cmd: &CheckCommand) -> Result<CommandResult> {
    let ctx = LintContext::new(&cmd.path, cmd.overrides())?;
    let linter = Linter::from_config(&ctx.config)?;
    tracing::debug!(
        rules = ?linter.enabled_rules().collect::<Vec<_>>(),
        dialect = ?ctx.config.pattern_dialect,
        "starting check"
    );

    let run = ctx.run(&linter);
    tracing::info!(
        files = run.files_checked,
        issues = run.issues.len(),
        "check finished"
    );

    Ok(CommandResult::from_issues(
        run.issues,
        run.files_checked,
        run.parse_error_count,
    ))
}
