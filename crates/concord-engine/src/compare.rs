//! Patient-vs-caregiver comparison across one round.

use concord_core::models::{
    AssessmentRound, ClassificationCounts, ComparisonRow, MatchOutcome, MatchStatistics,
    RoundComparisonResult,
};

use crate::classify::classify;
use crate::error::EngineError;

/// Build the comparison table for `round` and its match rate.
///
/// Rows keep the round's canonical order. The match rate only counts rows
/// where both respondents answered; when there are none the outcome is
/// [`MatchOutcome::NoComparableAnswers`] and the rows are still returned.
pub fn compare_round(round: &AssessmentRound) -> Result<RoundComparisonResult, EngineError> {
    let mut rows = Vec::with_capacity(round.items.len());
    let mut counts = ClassificationCounts::default();

    for record in &round.items {
        let classification = classify(record.patient_answer, record.staff_answer)?;
        counts.record(classification);
        rows.push(ComparisonRow::new(record, classification));
    }

    Ok(RoundComparisonResult {
        round_id: round.round_id,
        owner_id: round.owner_id,
        created_at: round.created_at,
        rows,
        counts,
        outcome: match_outcome(&counts),
    })
}

fn match_outcome(counts: &ClassificationCounts) -> MatchOutcome {
    let compared = counts.compared();
    if compared == 0 {
        return MatchOutcome::NoComparableAnswers;
    }

    // Work in tenths of a percent so the mismatch is derived from the
    // rounded match figure and the pair always sums to exactly 100.0.
    let match_tenths = (counts.matched as f64 * 1000.0 / compared as f64).round_ties_even() as u32;
    let mismatch_tenths = 1000 - match_tenths;

    MatchOutcome::Compared {
        statistics: MatchStatistics {
            compared_count: compared,
            match_count: counts.matched,
            match_percent: f64::from(match_tenths) / 10.0,
            mismatch_percent: f64::from(mismatch_tenths) / 10.0,
        },
    }
}
