//! Budget-rule utilization
//!
//! Compares the Needs/Wants/Savings group totals of a period against target
//! shares (50/30/20 by default) and classifies each group.
//!
//! The share is taken over a basis the caller must name: total expenses
//! (Needs + Wants + Savings) or total income. The two give different numbers
//! for the same data and are never inferred.

use serde::Serialize;
use std::fmt;
use std::io::Write;
use tracing::debug;

use crate::config::{BudgetTargets, StatusThresholds};
use crate::error::{LensError, LensResult};
use crate::models::{BudgetGroup, CategoryGroupSummary, Money};

/// What a group's actual percentage is a percentage of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PercentageBasis {
    /// Needs + Wants + Savings
    TotalExpenses,
    /// The Income group's total
    TotalIncome,
}

impl fmt::Display for PercentageBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TotalExpenses => write!(f, "total expenses"),
            Self::TotalIncome => write!(f, "total income"),
        }
    }
}

/// Three-tier status of a group against its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BudgetStatus {
    /// Spending within target, or savings at or above target
    OnTrack,
    /// Spending close to the target
    NearLimit,
    /// Spending over the target
    Over,
    /// Savings at least halfway to the target
    InProgress,
    /// Savings below halfway; informational rather than a failure
    Behind,
}

/// How a status should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Good,
    Warning,
    Critical,
    Neutral,
}

impl BudgetStatus {
    pub fn severity(&self) -> Severity {
        match self {
            Self::OnTrack => Severity::Good,
            Self::NearLimit | Self::InProgress => Severity::Warning,
            Self::Over => Severity::Critical,
            Self::Behind => Severity::Neutral,
        }
    }

    /// Classify a utilization (percent of target) for `group`
    ///
    /// Spending groups: above 100 is over, above `near_limit` and below 100
    /// is near the limit, anything else (including exactly 100) is on track.
    /// Savings: 100 and above is on track, `in_progress` up to 100 is in
    /// progress, below that is behind.
    pub fn classify(group: BudgetGroup, utilization: f64, thresholds: &StatusThresholds) -> Self {
        if group.lower_is_better() {
            if utilization > 100.0 {
                Self::Over
            } else if utilization > thresholds.near_limit && utilization < 100.0 {
                Self::NearLimit
            } else {
                Self::OnTrack
            }
        } else if utilization >= 100.0 {
            Self::OnTrack
        } else if utilization >= thresholds.in_progress {
            Self::InProgress
        } else {
            Self::Behind
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnTrack => write!(f, "On track"),
            Self::NearLimit => write!(f, "Near limit"),
            Self::Over => write!(f, "Over"),
            Self::InProgress => write!(f, "In progress"),
            Self::Behind => write!(f, "Behind"),
        }
    }
}

/// One budget-rule group compared against its target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetRuleLine {
    pub group: BudgetGroup,
    /// Absolute group total
    pub amount: Money,
    pub target_percentage: f64,
    pub actual_percentage: f64,
    /// Actual as a percentage of target
    pub utilization: f64,
    pub status: BudgetStatus,
    /// Bar fill, capped at 100
    pub bar_width: f64,
}

/// Needs/Wants/Savings against targets, in that order
#[derive(Debug, Clone, Serialize)]
pub struct BudgetRuleReport {
    pub basis: PercentageBasis,
    pub denominator: Money,
    pub total_income: Money,
    pub total_expenses: Money,
    pub lines: Vec<BudgetRuleLine>,
}

#[derive(Debug, Default, Clone, Copy)]
struct GroupTotals {
    income: Money,
    needs: Money,
    wants: Money,
    savings: Money,
}

impl GroupTotals {
    fn from_summaries(summaries: &[CategoryGroupSummary]) -> Self {
        let mut totals = Self::default();
        for summary in summaries {
            let amount = summary.total_amount.abs();
            match summary.budget_group() {
                Some(BudgetGroup::Income) => totals.income += amount,
                Some(BudgetGroup::Needs) => totals.needs += amount,
                Some(BudgetGroup::Wants) => totals.wants += amount,
                Some(BudgetGroup::Savings) => totals.savings += amount,
                None => debug!(
                    group = %summary.category_group_name,
                    "ignoring group outside the budget rule"
                ),
            }
        }
        totals
    }

    fn get(&self, group: BudgetGroup) -> Money {
        match group {
            BudgetGroup::Income => self.income,
            BudgetGroup::Needs => self.needs,
            BudgetGroup::Wants => self.wants,
            BudgetGroup::Savings => self.savings,
        }
    }

    fn expenses(&self) -> Money {
        self.needs + self.wants + self.savings
    }
}

fn target_for(group: BudgetGroup, targets: &BudgetTargets) -> f64 {
    match group {
        BudgetGroup::Needs => targets.needs,
        BudgetGroup::Wants => targets.wants,
        BudgetGroup::Savings => targets.savings,
        BudgetGroup::Income => 0.0,
    }
}

impl BudgetRuleReport {
    /// Evaluate group summaries against targets
    ///
    /// Missing groups count as zero. A zero denominator yields 0% for every
    /// group rather than an error.
    pub fn evaluate(
        summaries: &[CategoryGroupSummary],
        basis: PercentageBasis,
        targets: &BudgetTargets,
        thresholds: &StatusThresholds,
    ) -> Self {
        let totals = GroupTotals::from_summaries(summaries);
        let total_expenses = totals.expenses();
        let denominator = match basis {
            PercentageBasis::TotalExpenses => total_expenses,
            PercentageBasis::TotalIncome => totals.income,
        };

        if denominator.is_zero() {
            debug!(%basis, "zero denominator, every group reports 0%");
        }

        let lines = BudgetGroup::RULE_ORDER
            .iter()
            .map(|&group| {
                let amount = totals.get(group);
                let target_percentage = target_for(group, targets);
                let actual_percentage = amount.percentage_of(denominator);
                let utilization = if target_percentage > 0.0 {
                    actual_percentage * 100.0 / target_percentage
                } else {
                    0.0
                };

                BudgetRuleLine {
                    group,
                    amount,
                    target_percentage,
                    actual_percentage,
                    utilization,
                    status: BudgetStatus::classify(group, utilization, thresholds),
                    bar_width: utilization.min(100.0),
                }
            })
            .collect();

        Self {
            basis,
            denominator,
            total_income: totals.income,
            total_expenses,
            lines,
        }
    }

    /// Evaluate with the default 50/30/20 targets and thresholds
    pub fn evaluate_default(summaries: &[CategoryGroupSummary], basis: PercentageBasis) -> Self {
        Self::evaluate(
            summaries,
            basis,
            &BudgetTargets::default(),
            &StatusThresholds::default(),
        )
    }

    pub fn line(&self, group: BudgetGroup) -> Option<&BudgetRuleLine> {
        self.lines.iter().find(|l| l.group == group)
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> LensResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record([
            "Group",
            "Amount",
            "Basis",
            "Target %",
            "Actual %",
            "Utilization %",
            "Status",
        ])?;

        for line in &self.lines {
            csv.write_record([
                line.group.to_string(),
                format!("{:.2}", line.amount.to_major()),
                self.basis.to_string(),
                format!("{:.1}", line.target_percentage),
                format!("{:.1}", line.actual_percentage),
                format!("{:.1}", line.utilization),
                line.status.to_string(),
            ])?;
        }

        csv.flush().map_err(|e| LensError::Export(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summaries(needs: i64, wants: i64, savings: i64, income: i64) -> Vec<CategoryGroupSummary> {
        vec![
            CategoryGroupSummary::new("Needs", Money::from_cents(-needs), 1),
            CategoryGroupSummary::new("Wants", Money::from_cents(-wants), 1),
            CategoryGroupSummary::new("Savings", Money::from_cents(-savings), 1),
            CategoryGroupSummary::new("Income", Money::from_cents(income), 1),
        ]
    }

    #[test]
    fn test_needs_exactly_on_target_is_on_track() {
        let report = BudgetRuleReport::evaluate_default(
            &summaries(500, 300, 200, 1000),
            PercentageBasis::TotalIncome,
        );

        let needs = report.line(BudgetGroup::Needs).unwrap();
        assert_eq!(needs.actual_percentage, 50.0);
        assert_eq!(needs.utilization, 100.0);
        assert_eq!(needs.status, BudgetStatus::OnTrack);
        assert_eq!(needs.bar_width, 100.0);
    }

    #[test]
    fn test_needs_over_target() {
        let report = BudgetRuleReport::evaluate_default(
            &summaries(550, 300, 200, 1000),
            PercentageBasis::TotalIncome,
        );

        let needs = report.line(BudgetGroup::Needs).unwrap();
        assert!((needs.actual_percentage - 55.0).abs() < 1e-9);
        assert!((needs.utilization - 110.0).abs() < 1e-9);
        assert_eq!(needs.status, BudgetStatus::Over);
        assert_eq!(needs.bar_width, 100.0);
        assert_eq!(needs.status.severity(), Severity::Critical);
    }

    #[test]
    fn test_zero_income_yields_zero_percentages() {
        let report = BudgetRuleReport::evaluate_default(
            &summaries(500, 300, 200, 0),
            PercentageBasis::TotalIncome,
        );

        assert!(report.denominator.is_zero());
        for line in &report.lines {
            assert_eq!(line.actual_percentage, 0.0);
            assert_eq!(line.utilization, 0.0);
            assert!(!line.actual_percentage.is_nan());
        }
        assert_eq!(report.line(BudgetGroup::Savings).unwrap().status, BudgetStatus::Behind);
    }

    #[test]
    fn test_bases_differ_for_same_data() {
        let data = summaries(600, 300, 100, 2000);
        let by_income = BudgetRuleReport::evaluate_default(&data, PercentageBasis::TotalIncome);
        let by_expenses = BudgetRuleReport::evaluate_default(&data, PercentageBasis::TotalExpenses);

        assert_eq!(by_income.denominator.cents(), 2000);
        assert_eq!(by_expenses.denominator.cents(), 1000);
        assert_eq!(by_income.line(BudgetGroup::Needs).unwrap().actual_percentage, 30.0);
        assert_eq!(by_expenses.line(BudgetGroup::Needs).unwrap().actual_percentage, 60.0);
        assert_eq!(by_expenses.line(BudgetGroup::Needs).unwrap().status, BudgetStatus::Over);
    }

    #[test]
    fn test_missing_groups_are_zero() {
        let data = vec![
            CategoryGroupSummary::new("Needs", Money::from_cents(-450), 2),
            CategoryGroupSummary::new("Income", Money::from_cents(1000), 1),
            CategoryGroupSummary::new("Transfers", Money::from_cents(-9999), 1),
        ];
        let report = BudgetRuleReport::evaluate_default(&data, PercentageBasis::TotalIncome);

        assert_eq!(report.lines.len(), 3);
        assert_eq!(report.lines[0].group, BudgetGroup::Needs);
        assert_eq!(report.lines[1].group, BudgetGroup::Wants);
        assert_eq!(report.lines[2].group, BudgetGroup::Savings);
        assert!(report.line(BudgetGroup::Wants).unwrap().amount.is_zero());
        assert_eq!(report.total_expenses.cents(), 450);

        // 45% of income against a 50% target: 90% utilization
        let needs = report.line(BudgetGroup::Needs).unwrap();
        assert_eq!(needs.status, BudgetStatus::NearLimit);
    }

    #[test]
    fn test_empty_summaries() {
        let report = BudgetRuleReport::evaluate_default(&[], PercentageBasis::TotalExpenses);
        assert_eq!(report.lines.len(), 3);
        assert!(report.lines.iter().all(|l| l.actual_percentage == 0.0));
    }

    #[test]
    fn test_spending_tiers() {
        let t = StatusThresholds::default();
        assert_eq!(BudgetStatus::classify(BudgetGroup::Wants, 85.0, &t), BudgetStatus::OnTrack);
        assert_eq!(BudgetStatus::classify(BudgetGroup::Wants, 85.5, &t), BudgetStatus::NearLimit);
        assert_eq!(BudgetStatus::classify(BudgetGroup::Wants, 99.9, &t), BudgetStatus::NearLimit);
        assert_eq!(BudgetStatus::classify(BudgetGroup::Wants, 100.0, &t), BudgetStatus::OnTrack);
        assert_eq!(BudgetStatus::classify(BudgetGroup::Wants, 100.1, &t), BudgetStatus::Over);
    }

    #[test]
    fn test_savings_tiers() {
        let t = StatusThresholds::default();
        assert_eq!(BudgetStatus::classify(BudgetGroup::Savings, 120.0, &t), BudgetStatus::OnTrack);
        assert_eq!(BudgetStatus::classify(BudgetGroup::Savings, 100.0, &t), BudgetStatus::OnTrack);
        assert_eq!(
            BudgetStatus::classify(BudgetGroup::Savings, 99.0, &t),
            BudgetStatus::InProgress
        );
        assert_eq!(
            BudgetStatus::classify(BudgetGroup::Savings, 50.0, &t),
            BudgetStatus::InProgress
        );
        assert_eq!(BudgetStatus::classify(BudgetGroup::Savings, 49.9, &t), BudgetStatus::Behind);
        assert_eq!(BudgetStatus::Behind.severity(), Severity::Neutral);
    }

    #[test]
    fn test_savings_above_target_caps_bar() {
        let report = BudgetRuleReport::evaluate_default(
            &summaries(400, 200, 400, 1000),
            PercentageBasis::TotalIncome,
        );
        let savings = report.line(BudgetGroup::Savings).unwrap();
        assert_eq!(savings.utilization, 200.0);
        assert_eq!(savings.bar_width, 100.0);
        assert_eq!(savings.status, BudgetStatus::OnTrack);
    }

    #[test]
    fn test_zero_target_never_divides() {
        let targets = BudgetTargets {
            needs: 0.0,
            wants: 30.0,
            savings: 20.0,
        };
        let report = BudgetRuleReport::evaluate(
            &summaries(500, 300, 200, 1000),
            PercentageBasis::TotalIncome,
            &targets,
            &StatusThresholds::default(),
        );
        assert_eq!(report.line(BudgetGroup::Needs).unwrap().utilization, 0.0);
    }

    #[test]
    fn test_export_csv() {
        let report = BudgetRuleReport::evaluate_default(
            &summaries(500, 300, 200, 1000),
            PercentageBasis::TotalIncome,
        );
        let mut out = Vec::new();
        report.export_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Needs,5.00,total income,50.0,50.0,100.0,On track"));
    }
}
