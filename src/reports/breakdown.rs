//! Spending breakdown
//!
//! Share of total expenses per category, for the dashboard's breakdown bars.
//! Percentages are taken over total expenses, never over income.

use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;

use crate::config::Palette;
use crate::error::{LensError, LensResult};
use crate::models::{BudgetGroup, CategoryCatalog, CategoryGroupSummary, Money, Transaction};

/// One bar of the breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownRow {
    /// Category (or group) name
    pub label: String,
    /// Accumulated absolute spending
    pub amount: Money,
    /// Share of total expenses, rounded to a whole percent
    pub percentage: u32,
    /// Number of transactions folded into this row
    pub transaction_count: usize,
    /// Colour assigned by first appearance in the input
    pub color: Option<String>,
}

/// Expense breakdown, sorted by amount descending
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryBreakdown {
    pub rows: Vec<BreakdownRow>,
    /// Sum of all included amounts (absolute)
    pub total_expenses: Money,
}

struct Bucket {
    label: String,
    amount: Money,
    count: usize,
}

impl CategoryBreakdown {
    /// Break expense transactions down by category name
    ///
    /// Income is skipped. Transactions whose category is unknown are folded
    /// into `"Other"`. Categories that share a name share a row.
    pub fn from_transactions(
        transactions: &[Transaction],
        catalog: &CategoryCatalog,
        palette: &Palette,
    ) -> Self {
        let mut buckets: Vec<Bucket> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for txn in transactions.iter().filter(|t| t.is_expense()) {
            let label = catalog.name_of(txn.category_id.as_ref());
            let slot = *index.entry(label.to_string()).or_insert_with(|| {
                buckets.push(Bucket {
                    label: label.to_string(),
                    amount: Money::zero(),
                    count: 0,
                });
                buckets.len() - 1
            });
            buckets[slot].amount += txn.amount.abs();
            buckets[slot].count += 1;
        }

        Self::from_buckets(buckets, palette)
    }

    /// Break a server-side group summary down the same way
    ///
    /// The Income group is skipped; every other group counts as spending.
    pub fn from_group_summary(summaries: &[CategoryGroupSummary], palette: &Palette) -> Self {
        let mut buckets: Vec<Bucket> = Vec::new();

        for summary in summaries {
            if summary.budget_group() == Some(BudgetGroup::Income) {
                continue;
            }
            match buckets
                .iter_mut()
                .find(|b| b.label == summary.category_group_name)
            {
                Some(bucket) => {
                    bucket.amount += summary.total_amount.abs();
                    bucket.count += summary.transaction_count as usize;
                }
                None => buckets.push(Bucket {
                    label: summary.category_group_name.clone(),
                    amount: summary.total_amount.abs(),
                    count: summary.transaction_count as usize,
                }),
            }
        }

        Self::from_buckets(buckets, palette)
    }

    fn from_buckets(buckets: Vec<Bucket>, palette: &Palette) -> Self {
        let total_expenses: Money = buckets.iter().map(|b| b.amount).sum();

        let mut rows: Vec<BreakdownRow> = buckets
            .into_iter()
            .enumerate()
            .map(|(i, bucket)| BreakdownRow {
                percentage: bucket.amount.percentage_of(total_expenses).round() as u32,
                color: palette.color_for(i).map(str::to_string),
                label: bucket.label,
                amount: bucket.amount,
                transaction_count: bucket.count,
            })
            .collect();

        // Stable: equal amounts keep first-encountered order.
        rows.sort_by(|a, b| b.amount.cmp(&a.amount));

        Self {
            rows,
            total_expenses,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The `limit` largest rows
    pub fn top(&self, limit: usize) -> &[BreakdownRow] {
        &self.rows[..limit.min(self.rows.len())]
    }

    /// Export the breakdown to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> LensResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Category", "Amount", "Transaction Count", "Percentage", "Color"])?;

        for row in &self.rows {
            csv.write_record([
                row.label.clone(),
                format!("{:.2}", row.amount.to_major()),
                row.transaction_count.to_string(),
                row.percentage.to_string(),
                row.color.clone().unwrap_or_default(),
            ])?;
        }

        csv.flush().map_err(|e| LensError::Export(e.to_string()))?;
        Ok(())
    }
}
