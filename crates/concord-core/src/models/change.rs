use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answer::Respondent;

/// How one question's answer moved between two rounds.
///
/// `change` is `previous_value - current_value`, so a positive change means
/// the score went down (fewer problems). Entries in the skipped bucket have
/// `None` on the missing side and no `change`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChangeEntry {
    /// Item id in the current round.
    pub item_id: Uuid,
    pub question_id: Uuid,
    pub question_text: String,
    pub category: String,
    pub previous_value: Option<u8>,
    pub current_value: Option<u8>,
    pub change: Option<i8>,
    pub skipped_previous: bool,
    pub skipped_current: bool,
    /// Caregiver's discussion marker in the current round.
    pub flagged: bool,
}

impl ChangeEntry {
    /// Absolute size of the change; zero for unchanged and skipped entries.
    pub fn magnitude(&self) -> u8 {
        self.change.map_or(0, i8::unsigned_abs)
    }

    pub fn is_skipped(&self) -> bool {
        self.skipped_previous || self.skipped_current
    }
}

/// Round-over-round change for one respondent.
///
/// `improvements` and `deteriorations` are sorted by descending magnitude
/// (stable on item order), so views can take the head without re-sorting.
/// `flagged` cuts across the other buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChangeReport {
    pub respondent: Respondent,
    pub previous_round_id: Uuid,
    pub current_round_id: Uuid,
    pub previous_created_at: jiff::Timestamp,
    pub current_created_at: jiff::Timestamp,
    pub improvements: Vec<ChangeEntry>,
    pub deteriorations: Vec<ChangeEntry>,
    pub unchanged: Vec<ChangeEntry>,
    pub skipped: Vec<ChangeEntry>,
    pub flagged: Vec<ChangeEntry>,
}

impl ChangeReport {
    pub fn top_improvements(&self, n: usize) -> &[ChangeEntry] {
        &self.improvements[..n.min(self.improvements.len())]
    }

    pub fn top_deteriorations(&self, n: usize) -> &[ChangeEntry] {
        &self.deteriorations[..n.min(self.deteriorations.len())]
    }

    /// Number of questions present in both rounds.
    pub fn matched_count(&self) -> usize {
        self.improvements.len()
            + self.deteriorations.len()
            + self.unchanged.len()
            + self.skipped.len()
    }
}

/// Change overview shown to the caregiver: the patient's movement with the
/// caregiver's flags, plus the caregiver's own movement when they answered
/// in both rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CaregiverChangeReport {
    pub owner_id: Uuid,
    pub patient: ChangeReport,
    pub staff: Option<ChangeReport>,
    pub previous_staff_complete: bool,
    pub current_staff_complete: bool,
}
