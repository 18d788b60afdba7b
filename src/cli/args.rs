//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Lint a project tree
//! - `init`: Write a default `.rxlintrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::config::{EcmaVersion, PatternDialect};
use crate::core::ConfigOverrides;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Number of `-v` flags given to the command.
    pub fn verbosity(&self) -> u8 {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.verbose,
            Some(Command::Init) | None => 0,
        }
    }

    pub fn format(&self) -> OutputFormat {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.format,
            Some(Command::Init) | None => OutputFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Cargo-style diagnostics
    #[default]
    Pretty,
    /// Machine-readable array of issues
    Json,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Project root to lint
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Grammar level for parsing (overrides config file)
    #[arg(long, value_enum, env = "RXLINT_ECMA_VERSION")]
    pub ecma_version: Option<EcmaVersion>,

    /// Regex engine used to validate patterns (overrides config file)
    #[arg(long, value_enum)]
    pub pattern_dialect: Option<PatternDialect>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CheckCommand {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            ecma_version: self.ecma_version,
            pattern_dialect: self.pattern_dialect,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check sources for invalid RegExp constructor arguments
    Check(CheckCommand),
    /// Initialize a new .rxlintrc.json configuration file
    Init,
}
