use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};
use rayon::prelude::*;

use crate::{
    config::{Config, EcmaVersion, PatternDialect, load_config},
    core::{file_scanner::scan_files, linter::Linter},
    issues::{Issue, ParseErrorIssue},
};

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigOverrides {
    pub ecma_version: Option<EcmaVersion>,
    pub pattern_dialect: Option<PatternDialect>,
}

impl ConfigOverrides {
    fn apply(self, config: &mut Config) {
        if let Some(version) = self.ecma_version {
            config.ecma_version = version;
        }
        if let Some(dialect) = self.pattern_dialect {
            config.pattern_dialect = dialect;
        }
    }
}

/// Outcome of linting every discovered file.
#[derive(Debug, Default)]
pub struct LintRun {
    /// Sorted by path, line, column, message.
    pub issues: Vec<Issue>,
    pub files_checked: usize,
    pub parse_error_count: usize,
}

/// Everything needed to lint one project tree.
///
/// Configuration priority (highest to lowest):
/// 1. CLI arguments (`--ecma-version`, `--pattern-dialect`)
/// 2. `.rxlintrc.json`
/// 3. Built-in defaults
pub struct LintContext {
    pub config: Config,
    pub root_dir: PathBuf,
    pub files: BTreeSet<String>,
    /// Paths the scanner could not access.
    pub skipped_count: usize,
}

impl LintContext {
    pub fn new(root_dir: &Path, overrides: ConfigOverrides) -> Result<Self> {
        if !root_dir.is_dir() {
            bail!("Path is not a directory: {}", root_dir.display());
        }

        let loaded = load_config(root_dir)?;
        if loaded.from_file {
            tracing::debug!("loaded {}", crate::config::CONFIG_FILE_NAME);
        }
        let mut config = loaded.config;
        overrides.apply(&mut config);
        config.validate()?;

        let scan = scan_files(root_dir, &config.includes, &config.ignores);
        tracing::info!(
            files = scan.files.len(),
            skipped = scan.skipped_count,
            "scanned {}",
            root_dir.display()
        );

        Ok(Self {
            config,
            root_dir: root_dir.to_path_buf(),
            files: scan.files,
            skipped_count: scan.skipped_count,
        })
    }

    /// Read and lint all files in parallel.
    pub fn run(&self, linter: &Linter) -> LintRun {
        let per_file: Vec<Vec<Issue>> = self
            .files
            .par_iter()
            .map(|file_path| lint_file(linter, file_path))
            .collect();

        let mut issues: Vec<Issue> = per_file.into_iter().flatten().collect();
        issues.sort();

        let parse_error_count = issues
            .iter()
            .filter(|issue| matches!(issue, Issue::ParseError(_)))
            .count();

        LintRun {
            issues,
            files_checked: self.files.len(),
            parse_error_count,
        }
    }
}

fn lint_file(linter: &Linter, file_path: &str) -> Vec<Issue> {
    tracing::debug!(file = file_path, "linting");

    let result = fs::read_to_string(file_path)
        .map_err(anyhow::Error::from)
        .and_then(|code| linter.lint_source(code, file_path));

    match result {
        Ok(issues) => issues.into_iter().map(Issue::Lint).collect(),
        Err(err) => {
            tracing::warn!(file = file_path, "{:#}", err);
            vec![Issue::ParseError(ParseErrorIssue {
                file_path: file_path.to_string(),
                error: format!("{:#}", err),
            })]
        }
    }
}
