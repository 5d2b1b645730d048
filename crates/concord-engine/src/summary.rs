//! Severity overview of one round.

use std::cmp::Reverse;

use concord_core::models::{AssessmentRound, ComparisonRow, Respondent, RoundSummary, Severity};

use crate::classify::classify;
use crate::error::EngineError;

/// Default length of the top-problem shortlist.
pub const DEFAULT_TOP_PROBLEMS: usize = 5;

/// Lowest answer value that can appear among the top problems.
pub const TOP_PROBLEM_FLOOR: u8 = 2;

/// [`summarize_round_with_limit`] with the default shortlist length.
pub fn summarize_round(
    round: &AssessmentRound,
    respondent: Respondent,
) -> Result<RoundSummary, EngineError> {
    summarize_round_with_limit(round, respondent, DEFAULT_TOP_PROBLEMS)
}

/// Bucket `respondent`'s answers in `round` by severity and pick the
/// `top_limit` highest-valued ones (value 2 or more) as top problems.
///
/// Fails with [`EngineError::NoAnsweredItems`] when `respondent` answered
/// nothing in the round.
pub fn summarize_round_with_limit(
    round: &AssessmentRound,
    respondent: Respondent,
    top_limit: usize,
) -> Result<RoundSummary, EngineError> {
    let mut summary = RoundSummary {
        round_id: round.round_id,
        respondent,
        total_items: round.item_count(),
        answered_count: 0,
        no_problem_count: 0,
        some_problem_count: 0,
        big_problem_count: 0,
        skipped_count: 0,
        top_problems: Vec::new(),
    };
    let mut candidates = Vec::new();

    for record in &round.items {
        let classification = classify(record.patient_answer, record.staff_answer)?;
        let Some(rating) = record.rating(respondent)? else {
            summary.skipped_count += 1;
            continue;
        };

        summary.answered_count += 1;
        match Severity::of(rating) {
            Severity::NoProblem => summary.no_problem_count += 1,
            Severity::SomeProblem => summary.some_problem_count += 1,
            Severity::BigProblem => summary.big_problem_count += 1,
        }

        if rating.value() >= TOP_PROBLEM_FLOOR {
            candidates.push((rating, ComparisonRow::new(record, classification)));
        }
    }

    if summary.answered_count == 0 {
        return Err(EngineError::NoAnsweredItems {
            round_id: round.round_id,
            respondent,
        });
    }

    // Stable: equal values keep item order.
    candidates.sort_by_key(|(rating, _)| Reverse(*rating));
    summary.top_problems = candidates
        .into_iter()
        .take(top_limit)
        .map(|(_, row)| row)
        .collect();

    Ok(summary)
}

/// Items `respondent` left unanswered, in canonical order.
pub fn skipped_items(
    round: &AssessmentRound,
    respondent: Respondent,
) -> Result<Vec<ComparisonRow>, EngineError> {
    round
        .items
        .iter()
        .filter(|record| !record.is_answered(respondent))
        .map(|record| {
            let classification = classify(record.patient_answer, record.staff_answer)?;
            Ok(ComparisonRow::new(record, classification))
        })
        .collect()
}
