//! concord-engine
//!
//! Comparison and change-tracking rules for questionnaire rounds. Pure and
//! synchronous — no I/O, no shared state. Classifies patient-vs-caregiver
//! agreement, tracks change between rounds, and summarizes severity.

pub mod change;
pub mod classify;
pub mod compare;
pub mod config;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod provider;
pub mod summary;

pub use config::EngineConfig;
pub use engine::ComparisonEngine;
pub use error::{ConfigError, EngineError};
pub use provider::{OwnerReportError, SnapshotProvider};
