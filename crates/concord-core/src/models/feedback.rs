use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::change::ChangeEntry;
use super::comparison::ComparisonRow;

/// Encouraging feedback shown to the patient after a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ProgressFeedback {
    /// First round: the areas rated as working without major difficulty.
    Strengths {
        round_id: Uuid,
        items: Vec<ComparisonRow>,
    },
    /// Later rounds: questions whose score went down since the previous
    /// round, split by how large the drop was.
    Improvements {
        previous_round_id: Uuid,
        current_round_id: Uuid,
        clear: Vec<ChangeEntry>,
        minor: Vec<ChangeEntry>,
    },
}

impl ProgressFeedback {
    pub fn has_improvements(&self) -> bool {
        match self {
            ProgressFeedback::Strengths { .. } => false,
            ProgressFeedback::Improvements { clear, minor, .. } => {
                !clear.is_empty() || !minor.is_empty()
            }
        }
    }
}
