//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, ValueEnum};

/// Validate that AI coding CLI agents are installed, authenticated, and responsive.
#[derive(Debug, Parser)]
#[command(name = "validate-agent-setup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Specific agent to check (default: check all known agents)
    pub agent: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Only show the summary line
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable layout
    #[default]
    Table,
    /// Machine-readable JSON document
    Json,
}
