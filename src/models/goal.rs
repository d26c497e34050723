//! Financial goal model
//!
//! A savings goal with a target amount and date. Progress is computed in
//! `reports::goals`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, GoalId, UserId};
use super::money::Money;
use crate::currency::CurrencyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalStatus {
    #[default]
    Active,
    Completed,
    Archived,
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Completed => write!(f, "Completed"),
            Self::Archived => write!(f, "Archived"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialGoal {
    pub id: GoalId,
    pub user_id: UserId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub target_amount: Money,
    #[serde(default)]
    pub current_amount: Money,
    pub target_date: NaiveDate,
    pub currency_code: CurrencyCode,
    #[serde(default)]
    pub status: GoalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
}

impl FinancialGoal {
    pub fn new(
        user_id: UserId,
        name: impl Into<String>,
        target_amount: Money,
        target_date: NaiveDate,
        currency_code: CurrencyCode,
    ) -> Self {
        Self {
            id: GoalId::new(),
            user_id,
            name: name.into(),
            description: None,
            target_amount,
            current_amount: Money::zero(),
            target_date,
            currency_code,
            status: GoalStatus::Active,
            category_id: None,
        }
    }

    /// Amount still needed to reach the target, never negative
    pub fn remaining(&self) -> Money {
        let remaining = self.target_amount - self.current_amount;
        if remaining.is_negative() {
            Money::zero()
        } else {
            remaining
        }
    }
}
