//! Terminal output styling.
//!
//! This module provides:
//! - [`Theme`] - console styles for the human-readable report
//! - [`StatusKind`] - the canonical status icon vocabulary

pub mod icons;
pub mod theme;

pub use icons::StatusKind;
pub use theme::{should_use_colors, Theme};
