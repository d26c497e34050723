//! Core data models for ledgerlens
//!
//! Typed versions of the JSON records served by the finance API: users,
//! accounts, transactions, categories, group summaries, balances and goals.

pub mod account;
pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod summary;
pub mod transaction;
pub mod user;

pub use account::{
    Account, AccountConfiguration, AccountType, AppliesTo, ConfigurationFrequency,
    ConfigurationType,
};
pub use category::{
    BudgetGroup, Category, CategoryCatalog, CategoryGroup, GroupedCategories,
    FALLBACK_CATEGORY_NAME,
};
pub use goal::{FinancialGoal, GoalStatus};
pub use ids::{AccountId, CategoryGroupId, CategoryId, GoalId, TransactionId, UserId};
pub use money::Money;
pub use summary::{CategoryGroupSummary, UserBalance};
pub use transaction::{Transaction, TransactionType};
pub use user::{Session, User, UserProfile};
