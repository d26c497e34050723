//! YAML Export functionality
//!
//! Writes a dashboard snapshot as commented, human-readable YAML.

use serde::Serialize;
use std::io::Write;

use crate::error::{LensError, LensResult};
use crate::export::json::DashboardSnapshot;

/// Export a dashboard snapshot to YAML format
pub fn export_snapshot_yaml<W: Write>(
    snapshot: &DashboardSnapshot,
    writer: &mut W,
) -> LensResult<()> {
    let header = format!(
        "# ledgerlens dashboard snapshot\n# Generated: {}\n# Version: {}\n\n",
        snapshot.exported_at, snapshot.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| LensError::Export(e.to_string()))?;

    export_yaml(snapshot, writer)
}

/// Export any serializable report as YAML
pub fn export_yaml<W: Write, T: Serialize + ?Sized>(value: &T, writer: &mut W) -> LensResult<()> {
    serde_yaml::to_writer(writer, value).map_err(|e| LensError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::json::tests::sample_snapshot;

    #[test]
    fn test_snapshot_yaml() {
        let snapshot = sample_snapshot();
        let mut out = Vec::new();
        export_snapshot_yaml(&snapshot, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("# ledgerlens dashboard snapshot"));

        let value: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
        assert_eq!(value["schema_version"].as_str(), Some("1.0.0"));
        assert_eq!(value["overview"]["expenses"].as_i64(), Some(50000));
    }

    #[test]
    fn test_export_budget_rule_yaml() {
        let snapshot = sample_snapshot();
        let mut out = Vec::new();
        export_yaml(&snapshot.budget_rule, &mut out).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_slice(&out).unwrap();
        assert_eq!(value["basis"].as_str(), Some("TotalExpenses"));
        assert_eq!(value["lines"][0]["group"].as_str(), Some("Needs"));
    }
}
