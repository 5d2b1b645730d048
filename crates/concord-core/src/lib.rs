//! concord-core
//!
//! Pure domain types for questionnaire rounds answered in parallel by a
//! patient and a caregiver. No computation beyond simple projections lives
//! here — this is the shared vocabulary the engine and its hosts exchange.

pub mod error;
pub mod models;
