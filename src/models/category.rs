//! Category and CategoryGroup models
//!
//! Categories roll up into coarse budgeting groups (Income, Needs, Wants,
//! Savings). The catalog resolves category ids to display names and lays
//! categories out under their groups.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::ids::{CategoryGroupId, CategoryId};

/// Label used for transactions whose category is unknown
pub const FALLBACK_CATEGORY_NAME: &str = "Other";

/// A group of related categories as served by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub id: CategoryGroupId,
    pub name: String,
}

impl CategoryGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryGroupId::new(),
            name: name.into(),
        }
    }

    /// The budget-rule bucket this group maps to, if any
    pub fn budget_group(&self) -> Option<BudgetGroup> {
        BudgetGroup::parse(&self.name)
    }
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A category as served by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub category_group_id: Option<CategoryGroupId>,
}

impl Category {
    pub fn new(name: impl Into<String>, group_id: Option<CategoryGroupId>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            category_group_id: group_id,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The coarse budgeting buckets used by the 50/30/20 rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetGroup {
    Income,
    Needs,
    Wants,
    Savings,
}

impl BudgetGroup {
    /// The spending/saving groups compared against targets, in display order
    pub const RULE_ORDER: [BudgetGroup; 3] = [Self::Needs, Self::Wants, Self::Savings];

    /// Parse a group name, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "needs" => Some(Self::Needs),
            "wants" => Some(Self::Wants),
            "savings" => Some(Self::Savings),
            _ => None,
        }
    }

    /// Whether staying under the target is the goal (spending groups)
    pub fn lower_is_better(&self) -> bool {
        matches!(self, Self::Needs | Self::Wants)
    }
}

impl fmt::Display for BudgetGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Needs => write!(f, "Needs"),
            Self::Wants => write!(f, "Wants"),
            Self::Savings => write!(f, "Savings"),
        }
    }
}

/// Categories of a single group, in catalog order
#[derive(Debug, Clone)]
pub struct GroupedCategories<'a> {
    /// `None` for the bucket of categories without a known group
    pub group: Option<&'a CategoryGroup>,
    pub categories: Vec<&'a Category>,
}

impl GroupedCategories<'_> {
    /// Heading to show for this bucket
    pub fn label(&self) -> &str {
        self.group.map(|g| g.name.as_str()).unwrap_or(FALLBACK_CATEGORY_NAME)
    }
}

/// Lookup over the user's categories
#[derive(Debug, Clone, Default)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
    index: HashMap<CategoryId, usize>,
}

impl CategoryCatalog {
    pub fn new(categories: Vec<Category>) -> Self {
        let index = categories
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id, i))
            .collect();
        Self { categories, index }
    }

    pub fn get(&self, id: &CategoryId) -> Option<&Category> {
        self.index.get(id).map(|&i| &self.categories[i])
    }

    /// Display name for a category id, `"Other"` when missing or unknown
    pub fn name_of(&self, id: Option<&CategoryId>) -> &str {
        id.and_then(|id| self.get(id))
            .map(|c| c.name.as_str())
            .unwrap_or(FALLBACK_CATEGORY_NAME)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Lay categories out under `groups`, in the order the groups are given
    ///
    /// Groups without categories are skipped. Categories with no group, or
    /// with a group not in `groups`, land in a trailing ungrouped bucket.
    pub fn grouped<'a>(&'a self, groups: &'a [CategoryGroup]) -> Vec<GroupedCategories<'a>> {
        let mut result: Vec<GroupedCategories<'a>> = groups
            .iter()
            .map(|group| GroupedCategories {
                group: Some(group),
                categories: self
                    .categories
                    .iter()
                    .filter(|c| c.category_group_id == Some(group.id))
                    .collect(),
            })
            .filter(|g| !g.categories.is_empty())
            .collect();

        let ungrouped: Vec<&Category> = self
            .categories
            .iter()
            .filter(|c| match c.category_group_id {
                Some(group_id) => !groups.iter().any(|g| g.id == group_id),
                None => true,
            })
            .collect();

        if !ungrouped.is_empty() {
            result.push(GroupedCategories {
                group: None,
                categories: ungrouped,
            });
        }

        result
    }
}
