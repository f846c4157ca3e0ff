//! Error types for agent-vet operations.
//!
//! This module defines [`AgentVetError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! Check failures (missing tools, failed auth probes, timeouts) are NOT
//! errors — they are folded into the per-agent reports. `AgentVetError` only
//! covers invocation mistakes and reporter write failures.

use thiserror::Error;

/// Core error type for agent-vet operations.
#[derive(Debug, Error)]
pub enum AgentVetError {
    /// The requested agent name is not in the registry.
    #[error("Unknown agent '{name}'. Known agents: {}", .known.join(", "))]
    UnknownAgent { name: String, known: Vec<String> },

    /// IO error wrapper (reporter write path).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed while rendering the report.
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for agent-vet operations.
pub type Result<T> = std::result::Result<T, AgentVetError>;
