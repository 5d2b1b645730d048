use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// Lowest value on the answer scale ("no problem at all").
pub const MIN_ANSWER: u8 = 0;

/// Highest value on the answer scale ("big problem").
pub const MAX_ANSWER: u8 = 4;

/// Whose answers an operation reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Respondent {
    /// The patient's self-assessment.
    Patient,
    /// The caregiver's parallel assessment.
    Staff,
}

impl Respondent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Respondent::Patient => "patient",
            Respondent::Staff => "staff",
        }
    }
}

impl fmt::Display for Respondent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An answer known to lie on the 0–4 scale.
///
/// Records carry raw `Option<u8>` values as supplied by the snapshot
/// provider; anything that compares or buckets answers goes through
/// `Rating` first so an out-of-range value surfaces as an error instead of
/// a silently wrong classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: u8) -> Result<Self, CoreError> {
        if (MIN_ANSWER..=MAX_ANSWER).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CoreError::InvalidAnswerRange {
                value,
                min: MIN_ANSWER,
                max: MAX_ANSWER,
            })
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Absolute distance between two ratings.
    pub fn distance(self, other: Rating) -> u8 {
        self.0.abs_diff(other.0)
    }
}

impl TryFrom<u8> for Rating {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// One questionnaire item within one assessment round.
///
/// `item_id` is round-scoped; `question_id` is the stable key that links the
/// same question across rounds. Question text and category are denormalized
/// copies and are not authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerRecord {
    pub item_id: Uuid,
    pub question_id: Uuid,
    pub question_text: String,
    #[serde(default)]
    pub category: String,
    pub patient_answer: Option<u8>,
    pub patient_comment: Option<String>,
    pub staff_answer: Option<u8>,
    pub staff_comment: Option<String>,
    /// Set by the caregiver when the item needs discussion.
    #[serde(default)]
    pub flagged: bool,
    /// Explicit skip by the patient. Only meaningful while `patient_answer`
    /// is absent; a present answer always wins.
    #[serde(default)]
    pub skipped_by_patient: bool,
}

impl AnswerRecord {
    pub fn new(item_id: Uuid, question_id: Uuid, question_text: impl Into<String>) -> Self {
        Self {
            item_id,
            question_id,
            question_text: question_text.into(),
            category: String::new(),
            patient_answer: None,
            patient_comment: None,
            staff_answer: None,
            staff_comment: None,
            flagged: false,
            skipped_by_patient: false,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_patient_answer(mut self, answer: u8) -> Self {
        self.patient_answer = Some(answer);
        self.skipped_by_patient = false;
        self
    }

    pub fn with_patient_comment(mut self, comment: impl Into<String>) -> Self {
        self.patient_comment = Some(comment.into());
        self
    }

    pub fn with_staff_answer(mut self, answer: u8) -> Self {
        self.staff_answer = Some(answer);
        self
    }

    pub fn with_staff_comment(mut self, comment: impl Into<String>) -> Self {
        self.staff_comment = Some(comment.into());
        self
    }

    pub fn skipped(mut self) -> Self {
        self.patient_answer = None;
        self.skipped_by_patient = true;
        self
    }

    pub fn flagged(mut self) -> Self {
        self.flagged = true;
        self
    }

    /// The raw answer given by `respondent`, if any.
    pub fn answer(&self, respondent: Respondent) -> Option<u8> {
        match respondent {
            Respondent::Patient => self.patient_answer,
            Respondent::Staff => self.staff_answer,
        }
    }

    /// The validated answer given by `respondent`, if any.
    pub fn rating(&self, respondent: Respondent) -> Result<Option<Rating>, CoreError> {
        self.answer(respondent).map(Rating::new).transpose()
    }

    pub fn is_answered(&self, respondent: Respondent) -> bool {
        self.answer(respondent).is_some()
    }

    /// True when the patient deliberately skipped the item rather than not
    /// having reached it yet.
    pub fn is_explicitly_skipped(&self) -> bool {
        self.patient_answer.is_none() && self.skipped_by_patient
    }
}
