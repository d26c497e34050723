//! User and session models
//!
//! The authenticated user is carried in an explicit [`Session`] value and
//! passed to the functions that need it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;
use crate::currency::CurrencyCode;

/// Financial profile chosen at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserProfile {
    #[serde(rename = "Low-Income")]
    LowIncome,
    #[serde(rename = "High-Income/High-Expense")]
    HighIncomeHighExpense,
    #[serde(rename = "Wealth-Builder")]
    WealthBuilder,
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LowIncome => write!(f, "Low-Income"),
            Self::HighIncomeHighExpense => write!(f, "High-Income/High-Expense"),
            Self::WealthBuilder => write!(f, "Wealth-Builder"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub profile: UserProfile,
    pub default_currency: CurrencyCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    /// Initials for avatars, e.g. "AG" for Ana Gomez
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .next()
            .into_iter()
            .chain(self.last_name.chars().next())
            .collect::<String>()
            .to_uppercase()
    }
}

/// The authenticated context a computation runs under
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
}

impl Session {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn user_id(&self) -> UserId {
        self.user.id
    }

    pub fn default_currency(&self) -> &CurrencyCode {
        &self.user.default_currency
    }
}
