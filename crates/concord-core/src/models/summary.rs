use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answer::{Rating, Respondent};
use super::comparison::ComparisonRow;

/// Clinical severity of an answered item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    /// 0 or 1.
    NoProblem,
    /// 2 or 3.
    SomeProblem,
    /// 4.
    BigProblem,
}

impl Severity {
    pub fn of(rating: Rating) -> Self {
        match rating.value() {
            0 | 1 => Severity::NoProblem,
            2 | 3 => Severity::SomeProblem,
            _ => Severity::BigProblem,
        }
    }
}

/// Severity overview of one respondent's answers in one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoundSummary {
    pub round_id: Uuid,
    pub respondent: Respondent,
    /// All items in the round, answered or not.
    pub total_items: usize,
    pub answered_count: usize,
    pub no_problem_count: usize,
    pub some_problem_count: usize,
    pub big_problem_count: usize,
    /// Unanswered items across the whole round, including never-reached ones.
    pub skipped_count: usize,
    /// Highest-valued answered items (value 2 or more), ties in item order.
    pub top_problems: Vec<ComparisonRow>,
}

impl RoundSummary {
    pub fn count_for(&self, severity: Severity) -> usize {
        match severity {
            Severity::NoProblem => self.no_problem_count,
            Severity::SomeProblem => self.some_problem_count,
            Severity::BigProblem => self.big_problem_count,
        }
    }
}
