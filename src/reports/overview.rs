//! Dashboard overview
//!
//! Headline numbers for the dashboard cards: net worth, liquid balance,
//! and the period's spending as a share of income.

use serde::Serialize;

use crate::config::Settings;
use crate::currency::{format_amount, CurrencyCode};
use crate::models::{Money, Session, Transaction, TransactionType, UserBalance};

#[derive(Debug, Clone, Serialize)]
pub struct DashboardOverview {
    pub net_worth: Money,
    pub liquid_balance: Money,
    /// Absolute income over the transactions given
    pub income: Money,
    /// Absolute expenses over the transactions given
    pub expenses: Money,
    /// Expenses as a whole percentage of income, 0 without income
    pub expense_share_of_income: u32,
    pub currency_code: CurrencyCode,
}

impl DashboardOverview {
    /// Compute the overview for the signed-in user
    ///
    /// The display currency is the balance's currency, then the user's
    /// default currency, then the configured fallback.
    pub fn compute(
        session: &Session,
        transactions: &[Transaction],
        balance: Option<&UserBalance>,
        settings: &Settings,
    ) -> Self {
        let (income, expenses) = transactions.iter().fold(
            (Money::zero(), Money::zero()),
            |(income, expenses), txn| match txn.transaction_type {
                TransactionType::Income => (income + txn.amount.abs(), expenses),
                TransactionType::Expense => (income, expenses + txn.amount.abs()),
            },
        );

        let currency_code = balance
            .and_then(|b| b.currency_code.clone())
            .filter(|c| !c.as_str().is_empty())
            .or_else(|| {
                let user_currency = session.default_currency();
                (!user_currency.as_str().is_empty()).then(|| user_currency.clone())
            })
            .unwrap_or_else(|| CurrencyCode::new(settings.default_currency_code.as_str()));

        Self {
            net_worth: balance.map(|b| b.net_worth).unwrap_or_default(),
            liquid_balance: balance.map(|b| b.liquid_balance).unwrap_or_default(),
            income,
            expenses,
            expense_share_of_income: expenses.percentage_of(income).round() as u32,
            currency_code,
        }
    }

    /// Format an amount in the overview's currency
    pub fn format(&self, amount: Money) -> String {
        format_amount(amount, &self.currency_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{User, UserId, UserProfile};
    use chrono::NaiveDate;

    fn session(currency: &str) -> Session {
        Session::new(User {
            id: UserId::new(),
            email: "ana@example.com".into(),
            first_name: "Ana".into(),
            last_name: "Gomez".into(),
            profile: UserProfile::LowIncome,
            default_currency: CurrencyCode::new(currency),
            created_at: None,
            updated_at: None,
        })
    }

    fn txn(kind: TransactionType, cents: i64) -> Transaction {
        Transaction::new(
            kind,
            Money::from_cents(cents),
            None,
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
        )
    }

    #[test]
    fn test_totals_and_share() {
        let transactions = vec![
            txn(TransactionType::Income, 400000),
            txn(TransactionType::Expense, -100000),
            txn(TransactionType::Expense, -50000),
        ];
        let overview =
            DashboardOverview::compute(&session("USD"), &transactions, None, &Settings::default());

        assert_eq!(overview.income.cents(), 400000);
        assert_eq!(overview.expenses.cents(), 150000);
        assert_eq!(overview.expense_share_of_income, 38);
        assert!(overview.net_worth.is_zero());
        assert_eq!(overview.currency_code.as_str(), "USD");
        assert_eq!(overview.format(overview.expenses), "$1,500.00");
    }

    #[test]
    fn test_no_income_means_zero_share() {
        let transactions = vec![txn(TransactionType::Expense, -5000)];
        let overview =
            DashboardOverview::compute(&session("USD"), &transactions, None, &Settings::default());
        assert_eq!(overview.expense_share_of_income, 0);
    }

    #[test]
    fn test_currency_resolution_order() {
        let balance = UserBalance {
            net_worth: Money::from_cents(1_000_000),
            liquid_balance: Money::from_cents(250_000),
            currency_code: Some(CurrencyCode::new("EUR")),
        };
        let overview =
            DashboardOverview::compute(&session("USD"), &[], Some(&balance), &Settings::default());
        assert_eq!(overview.currency_code.as_str(), "EUR");
        assert_eq!(overview.liquid_balance.cents(), 250_000);

        let overview = DashboardOverview::compute(&session(""), &[], None, &Settings::default());
        assert_eq!(overview.currency_code.as_str(), "COP");
    }
}
