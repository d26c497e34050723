//! Account model
//!
//! Represents financial accounts and the fee or tax rules configured on
//! them (e.g. a 0.4% tax on expenses). The rules are records only; no fee
//! is computed from them here.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, UserId};
use super::money::Money;
use crate::currency::CurrencyCode;

/// Type of financial account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AccountType {
    #[default]
    Checking,
    Savings,
    #[serde(rename = "Credit Card")]
    CreditCard,
    Cash,
    Investment,
    Other,
}

impl AccountType {
    /// Returns true if this account type carries debt as its normal balance
    pub fn is_liability(&self) -> bool {
        matches!(self, Self::CreditCard)
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checking => write!(f, "Checking"),
            Self::Savings => write!(f, "Savings"),
            Self::CreditCard => write!(f, "Credit Card"),
            Self::Cash => write!(f, "Cash"),
            Self::Investment => write!(f, "Investment"),
            Self::Other => write!(f, "Other"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigurationType {
    /// `value` is a percentage of the amount
    Percentage,
    /// `value` is an amount in cents
    Fixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigurationFrequency {
    PerTransaction,
    Monthly,
    Annual,
    OneTime,
}

/// Which movements a fee rule applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppliesTo {
    #[default]
    All,
    Income,
    Expense,
    Balance,
}

/// A fee or tax rule attached to an account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfiguration {
    pub name: String,
    #[serde(rename = "type")]
    pub config_type: ConfigurationType,
    pub value: f64,
    pub frequency: ConfigurationFrequency,
    /// Absent in older records, which meant "all movements"
    #[serde(default)]
    pub applies_to: AppliesTo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<CurrencyCode>,
}

/// A financial account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub user_id: UserId,
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub currency_code: CurrencyCode,
    pub current_balance: Money,
    #[serde(default)]
    pub configurations: Vec<AccountConfiguration>,
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.account_type)
    }
}
