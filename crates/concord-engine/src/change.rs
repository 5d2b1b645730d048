//! Round-over-round change for one respondent.

use std::cmp::{Ordering, Reverse};
use std::collections::HashMap;

use concord_core::models::{AnswerRecord, AssessmentRound, ChangeEntry, ChangeReport, Respondent};
use uuid::Uuid;

use crate::error::EngineError;

/// Compare `respondent`'s answers in `previous` against `current`.
///
/// Questions are matched by `question_id`, since item ids are scoped to a
/// round. Only questions present in both rounds are reported; iteration
/// follows `previous`'s canonical order.
///
/// Fails with [`EngineError::RoundsOutOfOrder`] unless `previous` is
/// strictly older, and with [`EngineError::InsufficientData`] when either
/// round has no answers at all for `respondent`.
pub fn track_change(
    previous: &AssessmentRound,
    current: &AssessmentRound,
    respondent: Respondent,
) -> Result<ChangeReport, EngineError> {
    if previous.created_at >= current.created_at {
        return Err(EngineError::RoundsOutOfOrder {
            previous: previous.round_id,
            previous_at: previous.created_at,
            current: current.round_id,
            current_at: current.created_at,
        });
    }

    index_by_question(previous)?;
    let lookup = index_by_question(current)?;

    for round in [previous, current] {
        if !round.has_answers(respondent) {
            return Err(EngineError::InsufficientData {
                round_id: round.round_id,
                respondent,
            });
        }
    }

    let mut report = ChangeReport {
        respondent,
        previous_round_id: previous.round_id,
        current_round_id: current.round_id,
        previous_created_at: previous.created_at,
        current_created_at: current.created_at,
        improvements: Vec::new(),
        deteriorations: Vec::new(),
        unchanged: Vec::new(),
        skipped: Vec::new(),
        flagged: Vec::new(),
    };

    for before in &previous.items {
        let Some(after) = lookup.get(&before.question_id) else {
            continue;
        };
        let entry = change_entry(before, after, respondent)?;

        if entry.flagged {
            report.flagged.push(entry.clone());
        }

        let bucket = match entry.change.map(|change| change.cmp(&0)) {
            None => &mut report.skipped,
            Some(Ordering::Greater) => &mut report.improvements,
            Some(Ordering::Less) => &mut report.deteriorations,
            Some(Ordering::Equal) => &mut report.unchanged,
        };
        bucket.push(entry);
    }

    // Stable: equal magnitudes keep item order.
    for bucket in [
        &mut report.improvements,
        &mut report.deteriorations,
        &mut report.unchanged,
    ] {
        bucket.sort_by_key(|entry| Reverse(entry.magnitude()));
    }

    Ok(report)
}

fn change_entry(
    before: &AnswerRecord,
    after: &AnswerRecord,
    respondent: Respondent,
) -> Result<ChangeEntry, EngineError> {
    let previous_value = before.rating(respondent)?.map(u8::from);
    let current_value = after.rating(respondent)?.map(u8::from);

    // Ratings are 0–4, so the difference always fits.
    let change = previous_value
        .zip(current_value)
        .map(|(prev, cur)| prev as i8 - cur as i8);

    Ok(ChangeEntry {
        item_id: after.item_id,
        question_id: after.question_id,
        question_text: after.question_text.clone(),
        category: after.category.clone(),
        previous_value,
        current_value,
        change,
        skipped_previous: previous_value.is_none(),
        skipped_current: current_value.is_none(),
        flagged: after.flagged,
    })
}

fn index_by_question(
    round: &AssessmentRound,
) -> Result<HashMap<Uuid, &AnswerRecord>, EngineError> {
    let mut lookup = HashMap::with_capacity(round.items.len());
    for record in &round.items {
        if lookup.insert(record.question_id, record).is_some() {
            return Err(EngineError::DuplicateQuestion {
                round_id: round.round_id,
                question_id: record.question_id,
            });
        }
    }
    Ok(lookup)
}
