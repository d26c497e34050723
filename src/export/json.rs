//! JSON Export functionality
//!
//! Serializes reports, or a full dashboard snapshot, to pretty JSON.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{LensError, LensResult};
use crate::reports::{BudgetRuleReport, CategoryBreakdown, DashboardOverview, GoalProgress};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Everything the dashboard shows, captured at one point in time
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Library version that created the export
    pub app_version: String,

    pub overview: DashboardOverview,

    pub breakdown: CategoryBreakdown,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_rule: Option<BudgetRuleReport>,

    pub goals: Vec<GoalProgress>,
}

impl DashboardSnapshot {
    pub fn new(
        overview: DashboardOverview,
        breakdown: CategoryBreakdown,
        budget_rule: Option<BudgetRuleReport>,
        goals: Vec<GoalProgress>,
    ) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            overview,
            breakdown,
            budget_rule,
            goals,
        }
    }
}

/// Export any serializable report as pretty JSON
pub fn export_json<W: Write, T: Serialize + ?Sized>(value: &T, writer: &mut W) -> LensResult<()> {
    serde_json::to_writer_pretty(&mut *writer, value)
        .map_err(|e| LensError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| LensError::Export(e.to_string()))?;
    Ok(())
}

/// Export a dashboard snapshot as pretty JSON
pub fn export_snapshot_json<W: Write>(
    snapshot: &DashboardSnapshot,
    writer: &mut W,
) -> LensResult<()> {
    export_json(snapshot, writer)
}
