//! Unified status vocabulary for consistent CLI output.
//!
//! `StatusKind` provides a single canonical set of status icons and colors
//! used everywhere the human report indicates pass/fail state.

use super::theme::Theme;

use crate::check::{AuthStatus, VarStatus};

/// Canonical status kinds used across the human-readable report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed.
    Success,
    /// Check failed.
    Failed,
    /// State could not be determined.
    Unknown,
}

impl StatusKind {
    /// Unicode icon for terminal output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Unknown => "⚠",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &Theme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Unknown => theme.warning.apply_to(icon).to_string(),
        }
    }

    /// Map a boolean check outcome.
    pub fn from_pass(pass: bool) -> Self {
        if pass {
            Self::Success
        } else {
            Self::Failed
        }
    }
}

impl From<AuthStatus> for StatusKind {
    fn from(status: AuthStatus) -> Self {
        match status {
            AuthStatus::Authenticated => Self::Success,
            AuthStatus::NotAuthenticated => Self::Failed,
            AuthStatus::Unknown => Self::Unknown,
        }
    }
}

impl From<VarStatus> for StatusKind {
    fn from(status: VarStatus) -> Self {
        if status.is_set() {
            Self::Success
        } else {
            Self::Failed
        }
    }
}
