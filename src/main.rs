use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use rxlint::cli::{Arguments, ExitStatus, OutputFormat};
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_tracing(args.verbosity(), args.format() == OutputFormat::Json);

    match rxlint::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}

/// Log to stderr; `-v` raises the level and `RUST_LOG` refines it.
fn init_tracing(verbosity: u8, json_output: bool) {
    // Keep stdout and stderr clean for machine consumers.
    if json_output {
        return;
    }

    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}
