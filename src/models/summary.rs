//! Server-side aggregates
//!
//! The API can return per-group totals for a query window instead of raw
//! transactions; balances are likewise computed by the backend.

use serde::{Deserialize, Serialize};

use super::category::BudgetGroup;
use super::money::Money;
use crate::currency::CurrencyCode;

/// Total for one category group over a query window (e.g. a month)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryGroupSummary {
    pub category_group_name: String,
    pub total_amount: Money,
    #[serde(default)]
    pub transaction_count: u32,
}

impl CategoryGroupSummary {
    pub fn new(name: impl Into<String>, total_amount: Money, transaction_count: u32) -> Self {
        Self {
            category_group_name: name.into(),
            total_amount,
            transaction_count,
        }
    }

    pub fn budget_group(&self) -> Option<BudgetGroup> {
        BudgetGroup::parse(&self.category_group_name)
    }
}

/// Net worth and liquid balance for a user, in cents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserBalance {
    pub net_worth: Money,
    pub liquid_balance: Money,
    #[serde(default)]
    pub currency_code: Option<CurrencyCode>,
}
