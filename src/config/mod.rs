//! Configuration module for ledgerlens
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Budget-rule targets, status thresholds and the display palette

pub mod paths;
pub mod settings;

pub use paths::LensPaths;
pub use settings::{BudgetTargets, Palette, Settings, StatusThresholds};
