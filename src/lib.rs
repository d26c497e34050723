//! ledgerlens - budgeting analytics for a personal-finance dashboard
//!
//! This library turns the records served by a personal-finance API (users,
//! accounts, transactions, categories and goals) into the numbers a
//! dashboard shows: an expense breakdown by category, a 50/30/20
//! budget-rule evaluation, headline balances and goal progress.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings and path management
//! - `error`: Custom error types
//! - `currency`: Parsing amounts to cents and formatting them back
//! - `models`: Core data models (accounts, transactions, categories, etc.)
//! - `api`: Decoding of API response bodies into the models
//! - `reports`: Breakdown, budget rule, overview and goal progress
//! - `export`: CSV, JSON and YAML output
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use ledgerlens::config::{LensPaths, Settings};
//! use ledgerlens::reports::{BudgetRuleReport, PercentageBasis};
//!
//! let paths = LensPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ledgerlens::init(&settings);
//!
//! let summaries = ledgerlens::api::decode(&body)?;
//! let report = BudgetRuleReport::evaluate(
//!     &summaries,
//!     PercentageBasis::TotalExpenses,
//!     &settings.budget_targets,
//!     &settings.thresholds,
//! );
//! ```

pub mod api;
pub mod config;
pub mod currency;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;

pub use error::{LensError, LensResult};

use std::sync::Once;

use config::Settings;

static INIT: Once = Once::new();

/// Initialize tracing from the settings' log filter
pub fn init(settings: &Settings) {
    INIT.call_once(|| {
        logging::init_tracing(&settings.log_filter);
        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            "ledgerlens initialized"
        );
    });
}
