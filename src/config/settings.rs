//! User settings for ledgerlens
//!
//! Holds the budget-rule targets, the status thresholds used to classify
//! utilization, the display palette for breakdown bars and the fallback
//! currency.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paths::LensPaths;
use crate::error::LensError;

/// Target share of the percentage basis for each budget-rule group
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetTargets {
    pub needs: f64,
    pub wants: f64,
    pub savings: f64,
}

impl Default for BudgetTargets {
    /// The 50/30/20 rule
    fn default() -> Self {
        Self {
            needs: 50.0,
            wants: 30.0,
            savings: 20.0,
        }
    }
}

/// Utilization thresholds, in percent of the target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusThresholds {
    /// Spending groups above this (and not over target) are near their limit
    pub near_limit: f64,
    /// Savings at or above this (and below target) are in progress
    pub in_progress: f64,
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            near_limit: 85.0,
            in_progress: 50.0,
        }
    }
}

/// Fixed, cyclic list of display colour identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<String>);

impl Palette {
    /// Create a palette, rejecting an empty colour list
    pub fn new(colors: Vec<String>) -> Result<Self, LensError> {
        if colors.is_empty() {
            return Err(LensError::Validation("palette must not be empty".into()));
        }
        Ok(Self(colors))
    }

    /// Colour for the item at `index`, wrapping around the palette
    pub fn color_for(&self, index: usize) -> Option<&str> {
        if self.0.is_empty() {
            return None;
        }
        self.0.get(index % self.0.len()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(
            [
                "bg-blue-500",
                "bg-green-500",
                "bg-yellow-500",
                "bg-purple-500",
                "bg-pink-500",
                "bg-indigo-500",
                "bg-gray-500",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
        )
    }
}

/// User settings for ledgerlens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency used when neither the balance nor the user names one
    #[serde(default = "default_currency_code")]
    pub default_currency_code: String,

    #[serde(default)]
    pub budget_targets: BudgetTargets,

    #[serde(default)]
    pub thresholds: StatusThresholds,

    #[serde(default)]
    pub palette: Palette,

    /// Goals closer than this many days (and incomplete) are urgent
    #[serde(default = "default_urgent_goal_days")]
    pub urgent_goal_days: i64,

    /// Default `tracing` filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency_code() -> String {
    "COP".to_string()
}

fn default_urgent_goal_days() -> i64 {
    30
}

fn default_log_filter() -> String {
    "ledgerlens=info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_currency_code: default_currency_code(),
            budget_targets: BudgetTargets::default(),
            thresholds: StatusThresholds::default(),
            palette: Palette::default(),
            urgent_goal_days: default_urgent_goal_days(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &LensPaths) -> Result<Self, LensError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            debug!(path = %settings_path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LensError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| LensError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LensPaths) -> Result<(), LensError> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LensError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LensError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Check targets, thresholds and palette for values the reports can't use
    pub fn validate(&self) -> Result<(), LensError> {
        if self.palette.is_empty() {
            return Err(LensError::Validation("palette must not be empty".into()));
        }

        let targets = &self.budget_targets;
        for (name, value) in [
            ("needs", targets.needs),
            ("wants", targets.wants),
            ("savings", targets.savings),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(LensError::Validation(format!(
                    "budget target '{}' must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        for (name, value) in [
            ("near_limit", self.thresholds.near_limit),
            ("in_progress", self.thresholds.in_progress),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(LensError::Validation(format!(
                    "threshold '{}' must be between 0 and 100, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}
