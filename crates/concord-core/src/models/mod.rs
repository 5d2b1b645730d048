pub mod answer;
pub mod assessment;
pub mod change;
pub mod comparison;
pub mod feedback;
pub mod summary;

pub use answer::{AnswerRecord, MAX_ANSWER, MIN_ANSWER, Rating, Respondent};
pub use assessment::AssessmentRound;
pub use change::{CaregiverChangeReport, ChangeEntry, ChangeReport};
pub use comparison::{
    Classification, ClassificationCounts, ComparisonRow, MatchOutcome, MatchStatistics,
    RoundComparisonResult,
};
pub use feedback::ProgressFeedback;
pub use summary::{RoundSummary, Severity};
