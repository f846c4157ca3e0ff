//! Per-agent validation.
//!
//! For one registry entry: look the binary up on the search path, probe
//! authentication, and run a help-invocation smoke test. Each step degrades
//! into the report rather than failing the run; a missing install
//! short-circuits everything downstream of it.

use std::time::Duration;

use crate::registry::AgentSpec;
use crate::runner::{run_command, DEFAULT_TIMEOUT};

use super::report::{AgentReport, AuthStatus};

/// Timeout for the help-invocation smoke test. Deliberately shorter than
/// [`DEFAULT_TIMEOUT`] so one unresponsive binary can't stall the pipeline.
pub const SMOKE_TEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Path lookup command for the current platform.
fn path_lookup_command() -> &'static str {
    if cfg!(target_os = "windows") {
        "where"
    } else {
        "which"
    }
}

/// Validate one agent, producing exactly one report.
pub fn check_agent(spec: &AgentSpec) -> AgentReport {
    let mut report = AgentReport::new(&spec.name, &spec.description);
    let binary = &spec.commands[0];

    tracing::debug!(agent = %spec.name, "checking agent");

    // Existence: is the binary on the search path at all?
    let lookup = run_command(
        &format!("{} {}", path_lookup_command(), binary),
        DEFAULT_TIMEOUT,
    );
    if !lookup.success() {
        report
            .errors
            .push(format!("Command '{}' not found in PATH", binary));
        report
            .recommendations
            .push(format!("Install from: {}", spec.install_url));
        return report;
    }

    report.installed = true;
    let location = lookup.stdout.trim();
    report.version = Some(if location.is_empty() {
        "Unknown version".to_string()
    } else {
        location.to_string()
    });

    // Authentication probe, only when one is configured. Absence is a
    // valid state and stays `unknown` without an error.
    if let Some(auth_check) = &spec.auth_check {
        let auth = run_command(auth_check, DEFAULT_TIMEOUT);
        if auth.success() {
            report.auth_status = AuthStatus::Authenticated;
        } else {
            report.auth_status = AuthStatus::NotAuthenticated;
            report
                .errors
                .push(format!("Authentication check failed: {}", auth.stderr));
            report
                .recommendations
                .push("Run authentication command for this agent".to_string());
        }
    }

    // Smoke test: does the binary respond to --help at all? Failure here is
    // informational only, not an error.
    let smoke = run_command(&format!("{} --help", binary), SMOKE_TEST_TIMEOUT);
    report.basic_test = smoke.success();

    tracing::debug!(
        agent = %spec.name,
        installed = report.installed,
        auth = %report.auth_status,
        basic_test = report.basic_test,
        "agent check complete"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A spec whose "binary" is a real system command, so the checks run
    /// against something that actually exists.
    fn fake_spec(binary: &str, auth_check: Option<&str>) -> AgentSpec {
        AgentSpec {
            name: binary.to_string(),
            description: "Test agent".to_string(),
            commands: vec![binary.to_string()],
            auth_check: auth_check.map(|s| s.to_string()),
            install_url: "https://example.com/install".to_string(),
        }
    }

    #[test]
    fn missing_agent_reports_not_installed() {
        let spec = fake_spec("this-command-does-not-exist-12345", Some("true"));

        let report = check_agent(&spec);

        assert!(!report.installed);
        assert!(report.version.is_none());
        assert!(!report.basic_test);
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("not found in PATH")));
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.contains("https://example.com/install")));
    }

    #[test]
    fn missing_agent_never_runs_auth_check() {
        // auth_check would succeed if it ran; status must stay unknown
        let spec = fake_spec("this-command-does-not-exist-12345", Some("true"));

        let report = check_agent(&spec);

        assert_eq!(report.auth_status, AuthStatus::Unknown);
        assert!(!report.errors.iter().any(|e| e.contains("Authentication")));
    }

    #[test]
    fn installed_agent_records_binary_location_as_version() {
        let spec = fake_spec("echo", None);

        let report = check_agent(&spec);

        assert!(report.installed);
        let version = report.version.expect("installed agent has a version");
        assert!(version.contains("echo"));
    }

    #[test]
    fn passing_auth_check_marks_authenticated() {
        let spec = fake_spec("echo", Some("true"));

        let report = check_agent(&spec);

        assert!(report.installed);
        assert_eq!(report.auth_status, AuthStatus::Authenticated);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn failing_auth_check_marks_not_authenticated() {
        let spec = fake_spec("echo", Some("false"));

        let report = check_agent(&spec);

        assert!(report.installed);
        assert_eq!(report.auth_status, AuthStatus::NotAuthenticated);
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("Authentication check failed")));
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.contains("authentication command")));
    }

    #[test]
    fn no_auth_check_stays_unknown_without_error() {
        let spec = fake_spec("echo", None);

        let report = check_agent(&spec);

        assert!(report.installed);
        assert_eq!(report.auth_status, AuthStatus::Unknown);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn smoke_test_passes_for_responsive_binary() {
        // `echo --help` exits 0 (it just prints the flag)
        let spec = fake_spec("echo", None);

        let report = check_agent(&spec);

        assert!(report.basic_test);
    }

    #[test]
    fn smoke_test_failure_is_not_an_error() {
        // `false --help` exits non-zero; the report stays clean
        let spec = fake_spec("false", None);

        let report = check_agent(&spec);

        assert!(report.installed);
        assert!(!report.basic_test);
        assert!(report.errors.is_empty());
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn authenticated_implies_installed() {
        let spec = fake_spec("echo", Some("true"));

        let report = check_agent(&spec);

        if report.auth_status == AuthStatus::Authenticated {
            assert!(report.installed);
        }
    }
}
