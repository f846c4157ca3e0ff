//! Report formatters.
//!
//! This module provides formatters for rendering a finished [`SetupReport`]
//! in different layouts (human-readable table, machine-readable JSON).

pub mod human;
pub mod json;

use crate::check::SetupReport;
use std::io::Write;

pub use human::HumanFormatter;
pub use json::JsonFormatter;

/// Trait for report formatters.
pub trait ReportFormatter {
    /// Render the report to the given writer.
    ///
    /// Rendering has no side effect other than writing; formatters never
    /// mutate the report.
    fn format<W: Write>(&self, report: &SetupReport, writer: &mut W) -> std::io::Result<()>;
}
