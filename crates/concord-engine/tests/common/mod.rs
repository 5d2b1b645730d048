//! Round builders shared by the engine integration tests.

#![allow(dead_code)]

use concord_core::models::{AnswerRecord, AssessmentRound};
use uuid::Uuid;

pub const OWNER: Uuid = Uuid::from_u128(0xA11CE);

pub fn question(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

/// Item ids are scoped to their round.
pub fn item_id(round: u128, question: u128) -> Uuid {
    Uuid::from_u128(round * 10_000 + question)
}

/// Midnight UTC, `day` days after 2025-05-01.
pub fn day(day: i64) -> jiff::Timestamp {
    jiff::Timestamp::from_second(1_746_057_600 + day * 86_400).expect("valid timestamp")
}

pub fn item(round: u128, q: u128, patient: Option<u8>, staff: Option<u8>) -> AnswerRecord {
    let mut record = AnswerRecord::new(item_id(round, q), question(q), format!("Question {q}"))
        .with_category("Daily living");
    record.patient_answer = patient;
    record.staff_answer = staff;
    record
}

pub fn patient_item(round: u128, q: u128, answer: Option<u8>) -> AnswerRecord {
    item(round, q, answer, None)
}

pub fn round(id: u128, on_day: i64, items: Vec<AnswerRecord>) -> AssessmentRound {
    AssessmentRound::new(Uuid::from_u128(id), OWNER, day(on_day))
        .with_items(items)
        .completed(true, false)
}

pub fn questions_of(entries: &[concord_core::models::ChangeEntry]) -> Vec<Uuid> {
    entries.iter().map(|entry| entry.question_id).collect()
}
