//! validate-agent-setup CLI entry point.

use std::process::ExitCode;

use agent_vet::cli::{run, Cli};
use agent_vet::AgentVetError;
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit code for invocation errors, distinct from the 0/1/2 codes that
/// communicate aggregate installation state.
const EXIT_USAGE: u8 = 64;

/// Exit code for unexpected internal failures.
const EXIT_SOFTWARE: u8 = 70;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("agent_vet=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("agent_vet=info"))
    };

    // Logs go to stderr so `--format json` stdout stays parseable
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let requested_display =
                matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion);
            let _ = e.print();
            if requested_display {
                return ExitCode::SUCCESS;
            }
            return ExitCode::from(EXIT_USAGE);
        }
    };

    init_tracing(cli.debug);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    tracing::debug!("starting validation with args: {:?}", cli);

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e @ AgentVetError::UnknownAgent { .. }) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_USAGE)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_SOFTWARE)
        }
    }
}
