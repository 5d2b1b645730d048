//! The boundary to whatever stores rounds.

use std::cmp::Reverse;

use concord_core::models::AssessmentRound;
use thiserror::Error;
use uuid::Uuid;

use crate::error::EngineError;

/// Supplies round snapshots for an owner.
///
/// Implementations return the owner's most recently *completed* rounds,
/// newest first, each with all items in canonical order. Deciding what
/// "completed" means is the provider's job, not the engine's.
pub trait SnapshotProvider {
    type Error: std::error::Error + Send + Sync + 'static;

    fn latest_completed_rounds(
        &self,
        owner_id: Uuid,
    ) -> Result<Vec<AssessmentRound>, Self::Error>;
}

/// Failure of an owner-driven report: either the provider or the engine.
#[derive(Debug, Error)]
pub enum OwnerReportError<E: std::error::Error + 'static> {
    #[error("snapshot provider failed: {0}")]
    Provider(#[source] E),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl<E: std::error::Error + 'static> OwnerReportError<E> {
    pub fn is_business_condition(&self) -> bool {
        match self {
            OwnerReportError::Provider(_) => false,
            OwnerReportError::Engine(err) => err.is_business_condition(),
        }
    }
}

/// Pick the two most recent rounds and return them oldest first, ready for
/// [`track_change`](crate::change::track_change).
///
/// Ties on `created_at` keep the input order. Fewer than two rounds is a
/// business condition ([`EngineError::InsufficientRounds`]).
pub fn latest_pair(
    rounds: &[AssessmentRound],
) -> Result<(&AssessmentRound, &AssessmentRound), EngineError> {
    let mut newest_first: Vec<&AssessmentRound> = rounds.iter().collect();
    newest_first.sort_by_key(|round| Reverse(round.created_at));

    match newest_first.as_slice() {
        [latest, previous, ..] => Ok((*previous, *latest)),
        _ => Err(EngineError::InsufficientRounds {
            available: rounds.len(),
        }),
    }
}

/// The newest round, if any.
pub fn latest(rounds: &[AssessmentRound]) -> Option<&AssessmentRound> {
    rounds.iter().max_by_key(|round| round.created_at)
}
