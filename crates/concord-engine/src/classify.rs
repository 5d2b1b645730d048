//! Pairwise agreement rules for a single item.

use concord_core::models::{Classification, Rating};

use crate::error::EngineError;

/// Classify the patient's answer against the caregiver's.
///
/// Both values are range-checked before any rule runs. The rules apply in a
/// fixed order: a missing patient answer wins over a missing caregiver
/// answer, so a row with neither resolves to [`Classification::Skipped`].
pub fn classify(patient: Option<u8>, staff: Option<u8>) -> Result<Classification, EngineError> {
    let patient = patient.map(Rating::new).transpose()?;
    let staff = staff.map(Rating::new).transpose()?;
    Ok(classify_ratings(patient, staff))
}

/// [`classify`] over already-validated ratings.
pub fn classify_ratings(patient: Option<Rating>, staff: Option<Rating>) -> Classification {
    let Some(patient) = patient else {
        return Classification::Skipped;
    };
    let Some(staff) = staff else {
        return Classification::StaffSkipped;
    };
    match patient.distance(staff) {
        0 => Classification::Match,
        1 => Classification::MildDiff,
        _ => Classification::StrongDiff,
    }
}
