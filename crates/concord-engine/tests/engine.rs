mod common;

use std::collections::HashMap;

use common::{OWNER, item, patient_item, question, questions_of, round};
use concord_core::models::{AssessmentRound, MatchOutcome, ProgressFeedback, Respondent};
use concord_engine::provider::latest_pair;
use concord_engine::{
    ComparisonEngine, EngineConfig, EngineError, OwnerReportError, SnapshotProvider,
};
use pretty_assertions::assert_eq;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
#[error("snapshot store unavailable")]
struct StoreUnavailable;

/// Rounds per owner, handed out newest first like a real provider.
#[derive(Default)]
struct InMemoryProvider {
    rounds: HashMap<Uuid, Vec<AssessmentRound>>,
    offline: bool,
}

impl InMemoryProvider {
    fn with_rounds(rounds: Vec<AssessmentRound>) -> Self {
        let mut by_owner: HashMap<Uuid, Vec<AssessmentRound>> = HashMap::new();
        for round in rounds {
            by_owner.entry(round.owner_id).or_default().push(round);
        }
        for rounds in by_owner.values_mut() {
            rounds.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        Self {
            rounds: by_owner,
            offline: false,
        }
    }
}

impl SnapshotProvider for InMemoryProvider {
    type Error = StoreUnavailable;

    fn latest_completed_rounds(&self, owner_id: Uuid) -> Result<Vec<AssessmentRound>, Self::Error> {
        if self.offline {
            return Err(StoreUnavailable);
        }
        Ok(self.rounds.get(&owner_id).cloned().unwrap_or_default())
    }
}

fn earlier() -> AssessmentRound {
    round(
        1,
        0,
        vec![
            item(1, 1, Some(4), Some(3)),
            item(1, 2, Some(2), Some(2)),
            item(1, 3, Some(1), None),
        ],
    )
}

fn later() -> AssessmentRound {
    round(
        2,
        45,
        vec![
            item(2, 1, Some(1), Some(2)).flagged(),
            item(2, 2, Some(3), Some(2)),
            item(2, 3, Some(1), Some(1)),
        ],
    )
}

#[test]
fn match_report_through_the_facade() {
    let engine = ComparisonEngine::default();
    let report = engine.match_report(&later()).unwrap();

    let statistics = report.statistics().unwrap();
    assert_eq!(statistics.compared_count, 3);
    assert_eq!(statistics.match_count, 1);
    assert_eq!(statistics.match_percent, 33.3);
    assert_eq!(statistics.mismatch_percent, 66.7);
}

#[test]
fn match_report_without_caregiver_answers_is_not_an_error() {
    let engine = ComparisonEngine::default();
    let snapshot = round(1, 0, vec![patient_item(1, 1, Some(2))]);

    let report = engine.match_report(&snapshot).unwrap();
    assert_eq!(report.outcome, MatchOutcome::NoComparableAnswers);
}

#[test]
fn summary_respects_configured_limit() {
    let config = EngineConfig {
        top_problems_limit: 1,
        ..EngineConfig::default()
    };
    let engine = ComparisonEngine::new(config);

    let summary = engine.single_round_summary(&earlier(), Respondent::Patient).unwrap();
    assert_eq!(summary.top_problems.len(), 1);
    assert_eq!(summary.top_problems[0].question_id, question(1));
}

#[test]
fn skipped_items_through_the_facade() {
    let engine = ComparisonEngine::default();
    let skipped = engine.skipped_items(&earlier(), Respondent::Staff).unwrap();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].question_id, question(3));
}

#[test]
fn caregiver_report_combines_patient_and_staff_movement() {
    let engine = ComparisonEngine::default();
    let report = engine.caregiver_change_report(&earlier(), &later()).unwrap();

    assert_eq!(report.owner_id, OWNER);
    assert_eq!(questions_of(&report.patient.improvements), vec![question(1)]);
    assert_eq!(questions_of(&report.patient.deteriorations), vec![question(2)]);
    assert_eq!(questions_of(&report.patient.unchanged), vec![question(3)]);
    assert_eq!(questions_of(&report.patient.flagged), vec![question(1)]);

    let staff = report.staff.expect("caregiver answered in both rounds");
    assert_eq!(staff.respondent, Respondent::Staff);
    assert_eq!(questions_of(&staff.improvements), vec![question(1)]);
    assert_eq!(questions_of(&staff.unchanged), vec![question(2)]);
    assert_eq!(questions_of(&staff.skipped), vec![question(3)]);
}

#[test]
fn caregiver_report_omits_staff_movement_without_staff_answers() {
    let engine = ComparisonEngine::default();
    let previous = round(1, 0, vec![patient_item(1, 1, Some(3))]);
    let current = round(2, 30, vec![item(2, 1, Some(2), Some(2))]);

    let report = engine.caregiver_change_report(&previous, &current).unwrap();
    assert!(report.staff.is_none());
    assert_eq!(report.patient.improvements.len(), 1);
}

#[test]
fn caregiver_report_keeps_contract_violations() {
    let engine = ComparisonEngine::default();
    let err = engine.caregiver_change_report(&later(), &earlier()).unwrap_err();
    assert!(matches!(err, EngineError::RoundsOutOfOrder { .. }));
}

#[test]
fn latest_pair_orders_chronologically() {
    let oldest = round(1, 0, vec![patient_item(1, 1, Some(1))]);
    let middle = round(2, 10, vec![patient_item(2, 1, Some(1))]);
    let newest = round(3, 20, vec![patient_item(3, 1, Some(1))]);
    let rounds = vec![middle.clone(), newest.clone(), oldest];

    let (previous, current) = latest_pair(&rounds).unwrap();
    assert_eq!(previous.round_id, middle.round_id);
    assert_eq!(current.round_id, newest.round_id);
}

#[test]
fn owner_change_report_uses_the_two_latest_rounds() {
    let provider = InMemoryProvider::with_rounds(vec![earlier(), later()]);
    let engine = ComparisonEngine::default();

    let report = engine
        .change_report_for_owner(&provider, OWNER, Respondent::Patient)
        .unwrap();
    assert_eq!(report.previous_round_id, earlier().round_id);
    assert_eq!(report.current_round_id, later().round_id);
}

#[test]
fn owner_caregiver_report_through_provider() {
    let provider = InMemoryProvider::with_rounds(vec![later(), earlier()]);
    let engine = ComparisonEngine::default();

    let report = engine
        .caregiver_change_report_for_owner(&provider, OWNER)
        .unwrap();
    assert_eq!(report.patient.flagged.len(), 1);
    assert!(report.staff.is_some());
}

#[test]
fn owner_with_one_round_has_insufficient_rounds() {
    let provider = InMemoryProvider::with_rounds(vec![earlier()]);
    let engine = ComparisonEngine::default();

    let err = engine
        .change_report_for_owner(&provider, OWNER, Respondent::Patient)
        .unwrap_err();
    assert!(matches!(
        err,
        OwnerReportError::Engine(EngineError::InsufficientRounds { available: 1 })
    ));
    assert!(err.is_business_condition());
}

#[test]
fn provider_failure_is_not_a_business_condition() {
    let provider = InMemoryProvider {
        offline: true,
        ..InMemoryProvider::default()
    };
    let engine = ComparisonEngine::default();

    let err = engine
        .caregiver_change_report_for_owner(&provider, OWNER)
        .unwrap_err();
    assert!(matches!(err, OwnerReportError::Provider(StoreUnavailable)));
    assert!(!err.is_business_condition());
}

#[test]
fn owner_feedback_falls_back_to_strengths_with_one_round() {
    let provider = InMemoryProvider::with_rounds(vec![earlier()]);
    let engine = ComparisonEngine::default();

    let feedback = engine.progress_feedback_for_owner(&provider, OWNER).unwrap();
    let ProgressFeedback::Strengths { items, .. } = feedback else {
        panic!("expected strengths");
    };
    assert_eq!(questions_of_rows(&items), vec![question(3)]);
}

#[test]
fn owner_feedback_reports_improvements_with_two_rounds() {
    let provider = InMemoryProvider::with_rounds(vec![earlier(), later()]);
    let engine = ComparisonEngine::default();

    let feedback = engine.progress_feedback_for_owner(&provider, OWNER).unwrap();
    let ProgressFeedback::Improvements { clear, minor, .. } = feedback else {
        panic!("expected improvements");
    };
    assert_eq!(questions_of(&clear), vec![question(1)]);
    assert!(minor.is_empty());
}

#[test]
fn owner_without_rounds_has_nothing_to_show() {
    let provider = InMemoryProvider::default();
    let engine = ComparisonEngine::default();

    let err = engine.progress_feedback_for_owner(&provider, OWNER).unwrap_err();
    assert!(matches!(
        err,
        OwnerReportError::Engine(EngineError::InsufficientRounds { available: 0 })
    ));
}

fn questions_of_rows(rows: &[concord_core::models::ComparisonRow]) -> Vec<Uuid> {
    rows.iter().map(|row| row.question_id).collect()
}
