use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answer::{AnswerRecord, Respondent};

/// Snapshot of one administered questionnaire, as handed over by the
/// snapshot provider. `items` are in the round's canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRound {
    pub round_id: Uuid,
    /// The patient this round belongs to.
    pub owner_id: Uuid,
    pub created_at: jiff::Timestamp,
    #[serde(default)]
    pub patient_complete: bool,
    #[serde(default)]
    pub staff_complete: bool,
    pub items: Vec<AnswerRecord>,
}

impl AssessmentRound {
    pub fn new(round_id: Uuid, owner_id: Uuid, created_at: jiff::Timestamp) -> Self {
        Self {
            round_id,
            owner_id,
            created_at,
            patient_complete: false,
            staff_complete: false,
            items: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = AnswerRecord>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn completed(mut self, patient: bool, staff: bool) -> Self {
        self.patient_complete = patient;
        self.staff_complete = staff;
        self
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn answered_count(&self, respondent: Respondent) -> usize {
        self.items
            .iter()
            .filter(|item| item.is_answered(respondent))
            .count()
    }

    pub fn has_answers(&self, respondent: Respondent) -> bool {
        self.items.iter().any(|item| item.is_answered(respondent))
    }
}
