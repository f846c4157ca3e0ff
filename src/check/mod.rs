//! The check pipeline: per-agent validation and environment inspection.
//!
//! This module provides:
//! - [`agent`] - existence, authentication, and smoke-test checks per agent
//! - [`environment`] - credential variable presence and version-control probe
//! - [`report`] - the report types the checks produce

pub mod agent;
pub mod environment;
pub mod report;

pub use agent::{check_agent, SMOKE_TEST_TIMEOUT};
pub use environment::{check_environment, check_environment_with, CREDENTIAL_ENV_VARS};
pub use report::{
    AgentReport, AuthStatus, EnvironmentReport, RunSummary, SetupReport, VarStatus,
};
