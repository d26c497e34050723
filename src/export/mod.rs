//! Export module for ledgerlens
//!
//! Writes computed reports out for use elsewhere:
//! - CSV: transaction listings (report tables export themselves)
//! - JSON: machine-readable dashboard snapshot
//! - YAML: human-readable dashboard snapshot

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use self::json::{export_json, export_snapshot_json, DashboardSnapshot, EXPORT_SCHEMA_VERSION};
pub use self::yaml::{export_snapshot_yaml, export_yaml};
