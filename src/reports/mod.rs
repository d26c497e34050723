//! Reports module for ledgerlens
//!
//! Pure aggregations over already-fetched records: the expense breakdown,
//! the 50/30/20 budget-rule evaluation, the dashboard overview and goal
//! progress.

pub mod breakdown;
pub mod budget_rule;
pub mod goals;
pub mod overview;

pub use breakdown::{BreakdownRow, CategoryBreakdown};
pub use budget_rule::{BudgetRuleLine, BudgetRuleReport, BudgetStatus, PercentageBasis, Severity};
pub use goals::GoalProgress;
pub use overview::DashboardOverview;
