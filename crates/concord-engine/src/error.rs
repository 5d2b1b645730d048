use concord_core::error::CoreError;
use concord_core::models::Respondent;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A record carries an answer outside 0–4. The provider is expected to
    /// validate at write time, so this is a programming error.
    #[error("answer {value} is outside the 0–4 scale")]
    InvalidAnswerRange { value: u8 },

    #[error(
        "previous round {previous} ({previous_at}) must be older than current round {current} ({current_at})"
    )]
    RoundsOutOfOrder {
        previous: Uuid,
        previous_at: jiff::Timestamp,
        current: Uuid,
        current_at: jiff::Timestamp,
    },

    #[error("round {round_id} contains question {question_id} more than once")]
    DuplicateQuestion { round_id: Uuid, question_id: Uuid },

    #[error("round {round_id} has no {respondent} answers to compare")]
    InsufficientData {
        round_id: Uuid,
        respondent: Respondent,
    },

    #[error("round {round_id} has no answered items for {respondent}")]
    NoAnsweredItems {
        round_id: Uuid,
        respondent: Respondent,
    },

    #[error("need two completed rounds, found {available}")]
    InsufficientRounds { available: usize },
}

impl EngineError {
    /// True for "not enough data to show anything" outcomes, which callers
    /// turn into empty-state messaging. False for contract violations.
    pub fn is_business_condition(&self) -> bool {
        matches!(
            self,
            EngineError::InsufficientData { .. }
                | EngineError::NoAnsweredItems { .. }
                | EngineError::InsufficientRounds { .. }
        )
    }
}

impl From<CoreError> for EngineError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidAnswerRange { value, .. } => {
                EngineError::InvalidAnswerRange { value }
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config_version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("config is not a JSON object")]
    NotAnObject,

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
