//! Transaction model
//!
//! Transactions are owned by the remote API; this crate only reads them.
//! Amounts are in cents. Expenses usually arrive negative, but the
//! aggregation code classifies by `type`, never by sign.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, CategoryId, TransactionId};
use super::money::Money;
use crate::currency::CurrencyCode;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Parse transaction type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A financial transaction as served by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<AccountId>,

    /// Amount in cents
    pub amount: Money,

    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    #[serde(default)]
    pub category_id: Option<CategoryId>,

    pub currency_code: CurrencyCode,

    pub date: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    /// Create a new transaction (mainly for tests and fixtures)
    pub fn new(
        transaction_type: TransactionType,
        amount: Money,
        category_id: Option<CategoryId>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            account_id: None,
            amount,
            transaction_type,
            category_id,
            currency_code: CurrencyCode::new("COP"),
            date,
            merchant_name: None,
            description: None,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    /// Label for lists: merchant, then description, then a generic fallback
    pub fn display_name(&self) -> &str {
        self.merchant_name
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.description.as_deref().filter(|s| !s.trim().is_empty()))
            .unwrap_or("Transaction")
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.display_name(),
            self.amount,
            self.currency_code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn expense(cents: i64) -> Transaction {
        Transaction::new(TransactionType::Expense, Money::from_cents(cents), None, test_date())
    }

    #[test]
    fn test_type_predicates() {
        let txn = expense(-500);
        assert!(txn.is_expense());
        assert!(!txn.is_income());
    }

    #[test]
    fn test_type_parse() {
        assert_eq!(TransactionType::parse("Income"), Some(TransactionType::Income));
        assert_eq!(TransactionType::parse(" expense "), Some(TransactionType::Expense));
        assert_eq!(TransactionType::parse("transfer"), None);
    }

    #[test]
    fn test_display_name_fallbacks() {
        let mut txn = expense(-500);
        assert_eq!(txn.display_name(), "Transaction");

        txn.description = Some("Weekly groceries".into());
        assert_eq!(txn.display_name(), "Weekly groceries");

        txn.merchant_name = Some("Exito".into());
        assert_eq!(txn.display_name(), "Exito");
    }

    #[test]
    fn test_deserialize_api_record() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "amount": -1050,
            "type": "Expense",
            "category_id": null,
            "currency_code": "cop",
            "date": "2025-01-15",
            "merchant_name": "Exito"
        }"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.amount.cents(), -1050);
        assert!(txn.is_expense());
        assert!(txn.category_id.is_none());
        assert_eq!(txn.date, test_date());
    }
}
