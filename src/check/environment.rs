//! General environment checks, independent of the agent registry.
//!
//! Records the validator's runtime version, the working directory, which
//! provider credential variables are present, and whether version control
//! is available. Only presence of a credential is recorded, never its
//! value. This check cannot fail; sub-checks degrade to recommendations.

use indexmap::IndexMap;

use crate::runner::{run_command, DEFAULT_TIMEOUT};

use super::report::{EnvironmentReport, VarStatus};

/// Provider credential variables checked for presence, in report order.
pub const CREDENTIAL_ENV_VARS: &[&str] = &[
    "ANTHROPIC_API_KEY",
    "OPENAI_API_KEY",
    "GOOGLE_API_KEY",
    "OPENAI_BASE_URL",
    "CLAUDE_API_KEY",
];

/// Version-control availability probe.
const VCS_PROBE: &str = "git --version";

/// Collect the environment report from the real process environment.
pub fn check_environment() -> EnvironmentReport {
    check_environment_with(|key: &str| std::env::var(key), VCS_PROBE)
}

/// Collect the environment report with a custom env lookup and
/// version-control probe.
///
/// This allows testing without modifying actual environment variables or
/// depending on git being installed.
pub fn check_environment_with<F>(env_fn: F, vcs_probe: &str) -> EnvironmentReport
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let mut environment_variables = IndexMap::new();
    for var in CREDENTIAL_ENV_VARS {
        // An empty value is as unusable as an unset one
        let present = env_fn(var).map(|v| !v.is_empty()).unwrap_or(false);
        let status = if present {
            VarStatus::Set
        } else {
            VarStatus::NotSet
        };
        environment_variables.insert(var.to_string(), status);
    }

    let mut recommendations = Vec::new();
    if !run_command(vcs_probe, DEFAULT_TIMEOUT).success() {
        recommendations.push("Install git for better agent integration".to_string());
    }

    EnvironmentReport {
        runtime_version: format!("agent-vet {}", env!("CARGO_PKG_VERSION")),
        working_directory: std::env::current_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_default(),
        environment_variables,
        recommendations,
    }
}
