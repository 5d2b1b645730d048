use concord_core::models::{
    AssessmentRound, CaregiverChangeReport, ChangeReport, ComparisonRow, ProgressFeedback,
    Respondent, RoundComparisonResult, RoundSummary,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::change::track_change;
use crate::compare::compare_round;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::feedback::progress_feedback;
use crate::provider::{OwnerReportError, SnapshotProvider, latest, latest_pair};
use crate::summary::{skipped_items, summarize_round_with_limit};

/// Entry point for every view that needs classified or aggregated answers.
///
/// Holds only configuration; every call is a pure function of its inputs.
#[derive(Debug, Clone, Default)]
pub struct ComparisonEngine {
    config: EngineConfig,
}

impl ComparisonEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Severity overview of one respondent's answers in a single round.
    pub fn single_round_summary(
        &self,
        round: &AssessmentRound,
        respondent: Respondent,
    ) -> Result<RoundSummary, EngineError> {
        let result = summarize_round_with_limit(round, respondent, self.config.top_problems_limit);
        if let Ok(summary) = &result {
            debug!(
                round_id = %round.round_id,
                %respondent,
                answered = summary.answered_count,
                skipped = summary.skipped_count,
                "summarized round"
            );
        }
        log_failure("single_round_summary", &result);
        result
    }

    /// Items `respondent` left unanswered in `round`.
    pub fn skipped_items(
        &self,
        round: &AssessmentRound,
        respondent: Respondent,
    ) -> Result<Vec<ComparisonRow>, EngineError> {
        let result = skipped_items(round, respondent);
        log_failure("skipped_items", &result);
        result
    }

    /// Patient-vs-caregiver table and match rate for a single round.
    pub fn match_report(
        &self,
        round: &AssessmentRound,
    ) -> Result<RoundComparisonResult, EngineError> {
        let result = compare_round(round);
        match &result {
            Ok(comparison) if comparison.has_comparable_answers() => debug!(
                round_id = %round.round_id,
                compared = comparison.compared_count(),
                matched = comparison.counts.matched,
                "compared round"
            ),
            Ok(_) => info!(round_id = %round.round_id, "no comparable answers in round"),
            Err(_) => log_failure("match_report", &result),
        }
        result
    }

    /// Round-over-round change of `respondent`'s answers.
    pub fn change_report(
        &self,
        previous: &AssessmentRound,
        current: &AssessmentRound,
        respondent: Respondent,
    ) -> Result<ChangeReport, EngineError> {
        let result = track_change(previous, current, respondent);
        if let Ok(report) = &result {
            debug!(
                previous = %previous.round_id,
                current = %current.round_id,
                %respondent,
                improvements = report.improvements.len(),
                deteriorations = report.deteriorations.len(),
                unchanged = report.unchanged.len(),
                skipped = report.skipped.len(),
                flagged = report.flagged.len(),
                "tracked change"
            );
        }
        log_failure("change_report", &result);
        result
    }

    /// The caregiver's change overview: the patient's movement (with flags)
    /// plus the caregiver's own movement when they answered in both rounds.
    pub fn caregiver_change_report(
        &self,
        previous: &AssessmentRound,
        current: &AssessmentRound,
    ) -> Result<CaregiverChangeReport, EngineError> {
        let patient = self.change_report(previous, current, Respondent::Patient)?;
        let staff = match track_change(previous, current, Respondent::Staff) {
            Ok(report) => Some(report),
            Err(EngineError::InsufficientData { round_id, .. }) => {
                debug!(%round_id, "caregiver answers missing, omitting staff change");
                None
            }
            Err(err) => {
                warn!(error = %err, "caregiver change tracking failed");
                return Err(err);
            }
        };

        Ok(CaregiverChangeReport {
            owner_id: current.owner_id,
            patient,
            staff,
            previous_staff_complete: previous.staff_complete,
            current_staff_complete: current.staff_complete,
        })
    }

    /// Patient-facing feedback for `current`, relative to `previous` when
    /// there is one.
    pub fn progress_feedback(
        &self,
        previous: Option<&AssessmentRound>,
        current: &AssessmentRound,
    ) -> Result<ProgressFeedback, EngineError> {
        let result = progress_feedback(previous, current, self.config.clear_improvement_threshold);
        log_failure("progress_feedback", &result);
        result
    }

    /// [`change_report`](Self::change_report) over the owner's two most
    /// recent completed rounds.
    pub fn change_report_for_owner<P: SnapshotProvider>(
        &self,
        provider: &P,
        owner_id: Uuid,
        respondent: Respondent,
    ) -> Result<ChangeReport, OwnerReportError<P::Error>> {
        let rounds = fetch_rounds(provider, owner_id)?;
        let (previous, current) = latest_pair(&rounds)?;
        Ok(self.change_report(previous, current, respondent)?)
    }

    /// [`caregiver_change_report`](Self::caregiver_change_report) over the
    /// owner's two most recent completed rounds.
    pub fn caregiver_change_report_for_owner<P: SnapshotProvider>(
        &self,
        provider: &P,
        owner_id: Uuid,
    ) -> Result<CaregiverChangeReport, OwnerReportError<P::Error>> {
        let rounds = fetch_rounds(provider, owner_id)?;
        let (previous, current) = latest_pair(&rounds)?;
        Ok(self.caregiver_change_report(previous, current)?)
    }

    /// [`progress_feedback`](Self::progress_feedback) for the owner's latest
    /// round; falls back to strengths when only one round exists.
    pub fn progress_feedback_for_owner<P: SnapshotProvider>(
        &self,
        provider: &P,
        owner_id: Uuid,
    ) -> Result<ProgressFeedback, OwnerReportError<P::Error>> {
        let rounds = fetch_rounds(provider, owner_id)?;
        let feedback = match latest_pair(&rounds) {
            Ok((previous, current)) => self.progress_feedback(Some(previous), current)?,
            Err(EngineError::InsufficientRounds { .. }) => {
                let current = latest(&rounds).ok_or(EngineError::InsufficientRounds {
                    available: rounds.len(),
                })?;
                self.progress_feedback(None, current)?
            }
            Err(err) => return Err(err.into()),
        };
        Ok(feedback)
    }
}

fn fetch_rounds<P: SnapshotProvider>(
    provider: &P,
    owner_id: Uuid,
) -> Result<Vec<AssessmentRound>, OwnerReportError<P::Error>> {
    let rounds = provider.latest_completed_rounds(owner_id).map_err(|err| {
        warn!(%owner_id, error = %err, "snapshot provider failed");
        OwnerReportError::Provider(err)
    })?;
    debug!(%owner_id, count = rounds.len(), "fetched rounds");
    Ok(rounds)
}

fn log_failure<T>(operation: &'static str, result: &Result<T, EngineError>) {
    match result {
        Err(err) if err.is_business_condition() => {
            info!(operation, reason = %err, "nothing to show")
        }
        Err(err) => warn!(operation, error = %err, "engine contract violated"),
        Ok(_) => {}
    }
}
