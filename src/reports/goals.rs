//! Goal progress
//!
//! How far each savings goal is toward its target and whether its deadline
//! is close. `today` is passed in so results are reproducible.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{FinancialGoal, GoalId, GoalStatus, Money};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub goal_id: GoalId,
    /// Progress toward the target, clamped to 0..=100
    pub percentage: f64,
    pub completed: bool,
    /// Days from `today` to the target date; negative once it has passed
    pub days_left: i64,
    /// Incomplete with fewer than the configured days left
    pub urgent: bool,
    pub remaining: Money,
}

impl GoalProgress {
    pub fn evaluate(goal: &FinancialGoal, today: NaiveDate, urgent_days: i64) -> Self {
        let percentage = if goal.target_amount.is_positive() {
            goal.current_amount
                .percentage_of(goal.target_amount)
                .clamp(0.0, 100.0)
        } else {
            0.0
        };
        let completed = percentage >= 100.0;
        let days_left = (goal.target_date - today).num_days();

        Self {
            goal_id: goal.id,
            percentage,
            completed,
            days_left,
            urgent: days_left < urgent_days && !completed,
            remaining: goal.remaining(),
        }
    }

    /// Evaluate every goal that is not archived, closest deadline first
    pub fn evaluate_all(goals: &[FinancialGoal], today: NaiveDate, urgent_days: i64) -> Vec<Self> {
        let mut progress: Vec<(NaiveDate, Self)> = goals
            .iter()
            .filter(|g| g.status != GoalStatus::Archived)
            .map(|g| (g.target_date, Self::evaluate(g, today, urgent_days)))
            .collect();
        progress.sort_by_key(|(date, _)| *date);
        progress.into_iter().map(|(_, p)| p).collect()
    }
}
