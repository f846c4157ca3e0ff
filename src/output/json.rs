//! JSON report formatter.
//!
//! Serializes the whole report as a single machine-readable document. When
//! this formatter is selected nothing else may be written to stdout, so
//! consumers can pipe the output straight into a parser.

use super::ReportFormatter;
use crate::check::SetupReport;
use std::io::Write;

/// Formats the report as pretty-printed JSON.
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &SetupReport, writer: &mut W) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, report).map_err(std::io::Error::other)?;
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{check_environment_with, AgentReport, AuthStatus, CREDENTIAL_ENV_VARS};

    fn sample_report() -> SetupReport {
        let mut claude = AgentReport::new("claude", "Anthropic Claude Code CLI");
        claude.installed = true;
        claude.version = Some("/usr/local/bin/claude".to_string());
        claude.auth_status = AuthStatus::Authenticated;
        claude.basic_test = true;

        let mut codex = AgentReport::new("codex", "OpenAI Codex CLI");
        codex.errors.push("Command 'codex' not found in PATH".to_string());

        SetupReport {
            environment: check_environment_with(|_| Err(std::env::VarError::NotPresent), "true"),
            agents: vec![claude, codex],
        }
    }

    #[test]
    fn produces_valid_json() {
        let mut output = Vec::new();
        JsonFormatter::new()
            .format(&sample_report(), &mut output)
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert!(parsed["environment"].is_object());
        assert!(parsed["agents"].is_array());
    }

    #[test]
    fn round_trip_preserves_agent_count_and_env_keys() {
        let report = sample_report();
        let mut output = Vec::new();
        JsonFormatter::new().format(&report, &mut output).unwrap();

        let parsed: SetupReport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.agents.len(), report.agents.len());

        let keys: Vec<&str> = parsed
            .environment
            .environment_variables
            .keys()
            .map(|k| k.as_str())
            .collect();
        assert_eq!(keys, CREDENTIAL_ENV_VARS);
    }

    #[test]
    fn uses_contract_field_names() {
        let mut output = Vec::new();
        JsonFormatter::new()
            .format(&sample_report(), &mut output)
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
        let agent = &parsed["agents"][0];
        for key in [
            "agent",
            "description",
            "installed",
            "version",
            "auth_status",
            "basic_test",
            "errors",
            "recommendations",
        ] {
            assert!(agent.get(key).is_some(), "missing agent key {key}");
        }
        for key in [
            "python_version",
            "working_directory",
            "environment_variables",
            "recommendations",
        ] {
            assert!(
                parsed["environment"].get(key).is_some(),
                "missing environment key {key}"
            );
        }
    }

    #[test]
    fn auth_status_uses_wire_values() {
        let mut output = Vec::new();
        JsonFormatter::new()
            .format(&sample_report(), &mut output)
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed["agents"][0]["auth_status"], "authenticated");
        assert_eq!(parsed["agents"][1]["auth_status"], "unknown");
    }

    #[test]
    fn missing_version_serializes_as_null() {
        let mut output = Vec::new();
        JsonFormatter::new()
            .format(&sample_report(), &mut output)
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert!(parsed["agents"][1]["version"].is_null());
    }

    #[test]
    fn env_var_statuses_are_literal_strings() {
        let mut output = Vec::new();
        JsonFormatter::new()
            .format(&sample_report(), &mut output)
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
        let vars = parsed["environment"]["environment_variables"]
            .as_object()
            .unwrap();
        for (_, status) in vars {
            assert!(status == "SET" || status == "NOT_SET");
        }
    }
}
