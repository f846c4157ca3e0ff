//! Human-readable report formatter.
//!
//! Renders the full validation report for terminal display: banner,
//! environment section, one section per agent in registry order, then the
//! installed/authenticated summary.

use super::ReportFormatter;
use crate::check::{AgentReport, EnvironmentReport, SetupReport};
use crate::ui::{StatusKind, Theme};
use std::io::Write;

const BANNER_WIDTH: usize = 80;

/// Formats the report for human consumption.
pub struct HumanFormatter {
    theme: Theme,
}

impl HumanFormatter {
    /// Create a formatter with the given theme.
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Create an uncolored formatter.
    pub fn plain() -> Self {
        Self::new(Theme::plain())
    }

    fn banner<W: Write>(&self, title: &str, writer: &mut W) -> std::io::Result<()> {
        let rule = "=".repeat(BANNER_WIDTH);
        writeln!(writer, "{}", self.theme.dim.apply_to(&rule))?;
        writeln!(writer, "{}", self.theme.header.apply_to(title))?;
        writeln!(writer, "{}", self.theme.dim.apply_to(&rule))?;
        Ok(())
    }

    fn environment_section<W: Write>(
        &self,
        env: &EnvironmentReport,
        writer: &mut W,
    ) -> std::io::Result<()> {
        writeln!(
            writer,
            "{} {}",
            self.theme.key.apply_to("Working directory:"),
            self.theme.value.apply_to(&env.working_directory)
        )?;
        writeln!(
            writer,
            "{} {}",
            self.theme.key.apply_to("Runtime:"),
            self.theme.value.apply_to(&env.runtime_version)
        )?;

        writeln!(writer)?;
        writeln!(writer, "{}", self.theme.key.apply_to("Environment variables:"))?;
        for (var, status) in &env.environment_variables {
            writeln!(
                writer,
                "  {} {}: {}",
                StatusKind::from(*status).styled(&self.theme),
                var,
                status
            )?;
        }
        Ok(())
    }

    fn agent_section<W: Write>(&self, report: &AgentReport, writer: &mut W) -> std::io::Result<()> {
        writeln!(
            writer,
            "\n{} {}: {}",
            StatusKind::from_pass(report.installed).styled(&self.theme),
            self.theme.highlight.apply_to(report.agent.to_uppercase()),
            self.theme.dim.apply_to(&report.description)
        )?;
        writeln!(
            writer,
            "   Installed: {}",
            if report.installed { "Yes" } else { "No" }
        )?;
        writeln!(
            writer,
            "   Auth status: {} {}",
            StatusKind::from(report.auth_status).styled(&self.theme),
            report.auth_status
        )?;
        writeln!(
            writer,
            "   Basic test: {} {}",
            StatusKind::from_pass(report.basic_test).styled(&self.theme),
            if report.basic_test { "Pass" } else { "Fail" }
        )?;

        if let Some(version) = &report.version {
            writeln!(writer, "   Version: {}", self.theme.dim.apply_to(version))?;
        }

        if !report.errors.is_empty() {
            writeln!(writer, "   {}", self.theme.error.apply_to("Errors:"))?;
            for error in &report.errors {
                writeln!(writer, "     • {}", error)?;
            }
        }

        if !report.recommendations.is_empty() {
            writeln!(
                writer,
                "   {}",
                self.theme.warning.apply_to("Recommendations:")
            )?;
            for rec in &report.recommendations {
                writeln!(writer, "     • {}", rec)?;
            }
        }
        Ok(())
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &SetupReport, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer)?;
        self.banner("AGENT SETUP VALIDATION", writer)?;
        writeln!(writer)?;
        self.environment_section(&report.environment, writer)?;

        writeln!(writer)?;
        self.banner("AGENT STATUS", writer)?;
        for agent in &report.agents {
            self.agent_section(agent, writer)?;
        }

        writeln!(writer)?;
        self.banner("SUMMARY", writer)?;
        let summary = report.summary();
        writeln!(
            writer,
            "Agents installed: {}/{}",
            summary.installed, summary.total
        )?;
        writeln!(
            writer,
            "Agents authenticated: {}/{}",
            summary.authenticated, summary.total
        )?;

        if !report.environment.recommendations.is_empty() {
            writeln!(writer)?;
            writeln!(
                writer,
                "{}",
                self.theme.warning.apply_to("General recommendations:")
            )?;
            for rec in &report.environment.recommendations {
                writeln!(writer, "  • {}", rec)?;
            }
        }

        Ok(())
    }
}
