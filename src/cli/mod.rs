//! Command-line interface and the validation driver.
//!
//! [`run`] is the whole program: resolve which agents to check, collect the
//! environment report, check each agent in registry order, render the
//! report in the selected format, and hand back the aggregate exit code.

pub mod args;

pub use args::{Cli, OutputFormat};

use std::io::{self, Write};

use crate::check::{check_agent, check_environment, SetupReport};
use crate::error::{AgentVetError, Result};
use crate::output::{HumanFormatter, JsonFormatter, ReportFormatter};
use crate::registry::{AgentRegistry, AgentSpec};
use crate::ui::{StatusKind, Theme};

/// Run the validation and render the report.
///
/// Returns the process exit code: 0 when every requested agent is
/// installed, 2 when none are, 1 otherwise. The only error cases are an
/// unknown agent name and a failed write to stdout.
pub fn run(cli: &Cli) -> Result<u8> {
    let registry = AgentRegistry::new();

    // Fail fast on an unknown name, before any process is spawned
    let selected: Vec<&AgentSpec> = match &cli.agent {
        Some(name) => {
            let spec = registry
                .get(name)
                .ok_or_else(|| AgentVetError::UnknownAgent {
                    name: name.clone(),
                    known: registry.known_names().iter().map(|s| s.to_string()).collect(),
                })?;
            vec![spec]
        }
        None => registry.iter().collect(),
    };

    let environment = check_environment();

    // Live progress only in the human layout; the JSON document must be the
    // only thing on stdout in json mode.
    let show_progress = !cli.quiet && cli.format == OutputFormat::Table;
    let theme = Theme::for_stdout();

    let mut agents = Vec::with_capacity(selected.len());
    for spec in selected {
        if show_progress {
            print!("Checking {}... ", spec.name);
            io::stdout().flush()?;
        }
        let report = check_agent(spec);
        if show_progress {
            println!(
                "{} {}",
                StatusKind::from_pass(report.installed).styled(&theme),
                if report.installed { "found" } else { "not found" }
            );
        }
        agents.push(report);
    }

    let report = SetupReport {
        environment,
        agents,
    };
    let summary = report.summary();

    let mut stdout = io::stdout().lock();
    if cli.quiet {
        writeln!(stdout, "{}", summary.quiet_line())?;
    } else {
        match cli.format {
            OutputFormat::Table => HumanFormatter::new(theme).format(&report, &mut stdout)?,
            OutputFormat::Json => JsonFormatter::new().format(&report, &mut stdout)?,
        }
    }

    Ok(summary.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(agent: Option<&str>) -> Cli {
        Cli {
            agent: agent.map(|s| s.to_string()),
            format: OutputFormat::Table,
            quiet: true,
            no_color: true,
            debug: false,
        }
    }

    #[test]
    fn unknown_agent_fails_fast() {
        let err = run(&cli(Some("not-a-real-agent"))).unwrap_err();

        match err {
            AgentVetError::UnknownAgent { name, known } => {
                assert_eq!(name, "not-a-real-agent");
                assert!(known.contains(&"claude".to_string()));
            }
            other => panic!("expected UnknownAgent, got {other:?}"),
        }
    }

    #[test]
    fn single_agent_run_yields_zero_or_two() {
        // One agent checked: either it's installed (0) or it isn't (2);
        // the partial code 1 is impossible.
        let code = run(&cli(Some("claude"))).unwrap();
        assert!(code == 0 || code == 2, "unexpected exit code {code}");
    }
}
