//! Patient-facing progress feedback.

use concord_core::models::{
    AssessmentRound, ChangeEntry, ComparisonRow, ProgressFeedback, Rating, Respondent, Severity,
};

use crate::change::track_change;
use crate::classify::classify;
use crate::error::EngineError;

/// Default smallest score drop counted as a clear improvement.
pub const DEFAULT_CLEAR_IMPROVEMENT: u8 = 2;

/// Feedback for the patient's latest round.
///
/// Without a previous round the patient sees their strengths: answered items
/// in the no-problem bucket. With one, they see which scores went down,
/// split at `clear_threshold` into clear and minor improvements. An
/// `Improvements` value with both lists empty is a valid answer ("no clear
/// improvement this time").
pub fn progress_feedback(
    previous: Option<&AssessmentRound>,
    current: &AssessmentRound,
    clear_threshold: u8,
) -> Result<ProgressFeedback, EngineError> {
    let Some(previous) = previous else {
        return strengths(current);
    };

    let report = track_change(previous, current, Respondent::Patient)?;
    let (clear, minor): (Vec<ChangeEntry>, Vec<ChangeEntry>) = report
        .improvements
        .into_iter()
        .partition(|entry| entry.magnitude() >= clear_threshold);

    Ok(ProgressFeedback::Improvements {
        previous_round_id: report.previous_round_id,
        current_round_id: report.current_round_id,
        clear,
        minor,
    })
}

fn strengths(round: &AssessmentRound) -> Result<ProgressFeedback, EngineError> {
    if !round.has_answers(Respondent::Patient) {
        return Err(EngineError::NoAnsweredItems {
            round_id: round.round_id,
            respondent: Respondent::Patient,
        });
    }

    let mut items = Vec::new();
    for record in &round.items {
        let classification = classify(record.patient_answer, record.staff_answer)?;
        let strong = record
            .rating(Respondent::Patient)?
            .is_some_and(|rating: Rating| Severity::of(rating) == Severity::NoProblem);
        if strong {
            items.push(ComparisonRow::new(record, classification));
        }
    }

    Ok(ProgressFeedback::Strengths {
        round_id: round.round_id,
        items,
    })
}
