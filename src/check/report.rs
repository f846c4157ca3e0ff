//! Report types produced by the check pipeline.
//!
//! Serde field names on these types are the wire contract for `--format
//! json`; renames are deliberate and must not change without versioning the
//! output.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Authentication state of an installed agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthStatus {
    /// The auth probe exited 0.
    Authenticated,
    /// The auth probe exited non-zero (or timed out).
    NotAuthenticated,
    /// No auth probe is configured, or the agent isn't installed.
    #[default]
    Unknown,
}

impl fmt::Display for AuthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Authenticated => "authenticated",
            Self::NotAuthenticated => "not_authenticated",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Validation result for a single agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentReport {
    /// Agent key, matching the registry.
    pub agent: String,
    /// Human-readable description from the registry.
    pub description: String,
    /// Whether the agent binary was found on the search path.
    pub installed: bool,
    /// Resolved binary location from the existence check, when installed.
    pub version: Option<String>,
    /// Authentication state.
    pub auth_status: AuthStatus,
    /// Whether the help invocation smoke test passed.
    pub basic_test: bool,
    /// Errors encountered while checking, in order.
    pub errors: Vec<String>,
    /// Actionable follow-ups for the user, in order.
    pub recommendations: Vec<String>,
}

impl AgentReport {
    /// Create an empty report for an agent that hasn't been checked yet.
    pub fn new(agent: &str, description: &str) -> Self {
        Self {
            agent: agent.to_string(),
            description: description.to_string(),
            installed: false,
            version: None,
            auth_status: AuthStatus::Unknown,
            basic_test: false,
            errors: Vec::new(),
            recommendations: Vec::new(),
        }
    }
}

/// Presence of a credential environment variable. Values are never
/// recorded, only whether one is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VarStatus {
    Set,
    NotSet,
}

impl VarStatus {
    /// Whether the variable is present.
    pub fn is_set(self) -> bool {
        matches!(self, Self::Set)
    }
}

impl fmt::Display for VarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Set => "SET",
            Self::NotSet => "NOT_SET",
        })
    }
}

/// General environment facts, independent of any one agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentReport {
    /// Version of the validator runtime. The wire name is fixed; existing
    /// consumers of the JSON report key on `python_version`.
    #[serde(rename = "python_version")]
    pub runtime_version: String,
    /// Directory the validation ran from.
    pub working_directory: String,
    /// Presence of each credential variable, in the fixed list order.
    pub environment_variables: IndexMap<String, VarStatus>,
    /// Environment-level follow-ups (e.g., install git).
    pub recommendations: Vec<String>,
}

/// The aggregate document rendered by the reporters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupReport {
    pub environment: EnvironmentReport,
    pub agents: Vec<AgentReport>,
}

impl SetupReport {
    /// Summarize installation and authentication counts.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            installed: self.agents.iter().filter(|r| r.installed).count(),
            authenticated: self
                .agents
                .iter()
                .filter(|r| r.auth_status == AuthStatus::Authenticated)
                .count(),
            total: self.agents.len(),
        }
    }
}

/// Installed/authenticated counts over the checked agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub installed: usize,
    pub authenticated: usize,
    pub total: usize,
}

impl RunSummary {
    /// Process exit code: 0 when every checked agent is installed, 2 when
    /// none are, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.installed == 0 {
            2
        } else if self.installed < self.total {
            1
        } else {
            0
        }
    }

    /// The one-line quiet summary.
    pub fn quiet_line(&self) -> String {
        format!(
            "Installed: {}/{} | Authenticated: {}/{}",
            self.installed, self.total, self.authenticated, self.total
        )
    }
}
