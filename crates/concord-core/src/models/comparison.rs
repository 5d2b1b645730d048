use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answer::AnswerRecord;

/// Agreement between the patient's and the caregiver's answer to one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Classification {
    /// The patient has no answer (whatever the caregiver did).
    Skipped,
    /// The patient answered, the caregiver has not.
    StaffSkipped,
    Match,
    /// Answers differ by exactly one step.
    MildDiff,
    /// Answers differ by two steps or more.
    StrongDiff,
}

impl Classification {
    /// Whether both respondents answered, i.e. the row counts toward the
    /// match rate.
    pub fn is_compared(&self) -> bool {
        matches!(
            self,
            Classification::Match | Classification::MildDiff | Classification::StrongDiff
        )
    }
}

/// One row of the patient-vs-caregiver table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComparisonRow {
    pub item_id: Uuid,
    pub question_id: Uuid,
    pub question_text: String,
    pub category: String,
    pub patient_answer: Option<u8>,
    pub patient_comment: Option<String>,
    pub staff_answer: Option<u8>,
    pub staff_comment: Option<String>,
    pub classification: Classification,
    pub skipped_by_patient: bool,
    pub flagged: bool,
}

impl ComparisonRow {
    pub fn new(record: &AnswerRecord, classification: Classification) -> Self {
        Self {
            item_id: record.item_id,
            question_id: record.question_id,
            question_text: record.question_text.clone(),
            category: record.category.clone(),
            patient_answer: record.patient_answer,
            patient_comment: record.patient_comment.clone(),
            staff_answer: record.staff_answer,
            staff_comment: record.staff_comment.clone(),
            classification,
            skipped_by_patient: record.is_explicitly_skipped(),
            flagged: record.flagged,
        }
    }
}

/// Per-classification row counts for one round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClassificationCounts {
    pub matched: usize,
    pub mild_diff: usize,
    pub strong_diff: usize,
    pub skipped: usize,
    pub staff_skipped: usize,
}

impl ClassificationCounts {
    pub fn record(&mut self, classification: Classification) {
        let slot = match classification {
            Classification::Match => &mut self.matched,
            Classification::MildDiff => &mut self.mild_diff,
            Classification::StrongDiff => &mut self.strong_diff,
            Classification::Skipped => &mut self.skipped,
            Classification::StaffSkipped => &mut self.staff_skipped,
        };
        *slot += 1;
    }

    /// Rows where both respondents answered.
    pub fn compared(&self) -> usize {
        self.matched + self.mild_diff + self.strong_diff
    }
}

/// Agreement rate over the rows where both respondents answered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MatchStatistics {
    pub compared_count: usize,
    pub match_count: usize,
    /// Rounded to one decimal.
    pub match_percent: f64,
    /// `100 - match_percent`, rounded to one decimal; the two always sum
    /// to exactly 100.0.
    pub mismatch_percent: f64,
}

/// Whether a match rate could be computed for a round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum MatchOutcome {
    Compared { statistics: MatchStatistics },
    /// No row has answers from both respondents. Not a fault: the caller
    /// picks its own empty-state messaging.
    NoComparableAnswers,
}

/// Patient-vs-caregiver comparison of a single round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoundComparisonResult {
    pub round_id: Uuid,
    pub owner_id: Uuid,
    pub created_at: jiff::Timestamp,
    /// Canonical item order.
    pub rows: Vec<ComparisonRow>,
    pub counts: ClassificationCounts,
    pub outcome: MatchOutcome,
}

impl RoundComparisonResult {
    pub fn statistics(&self) -> Option<&MatchStatistics> {
        match &self.outcome {
            MatchOutcome::Compared { statistics } => Some(statistics),
            MatchOutcome::NoComparableAnswers => None,
        }
    }

    pub fn compared_count(&self) -> usize {
        self.statistics().map_or(0, |s| s.compared_count)
    }

    pub fn has_comparable_answers(&self) -> bool {
        matches!(self.outcome, MatchOutcome::Compared { .. })
    }
}
