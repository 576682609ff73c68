use super::domain::{ScoringProfile, StudentProfile};
use crate::orientation::riasec::{Dimension, HollandCode};

/// Maximum bac grade on the national scale.
pub const BAC_GRADE_MAX: u8 = 20;

/// Inclusive bounds of the professional-value rating scale.
pub const VALUE_RATING_MIN: u8 = 1;
pub const VALUE_RATING_MAX: u8 = 5;

/// Rejection reasons raised before scoring.
///
/// RIASEC data is the highest-weighted input, so its absence is a hard error
/// rather than a silent zero; optional program fields never reach this path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileValidationError {
    #[error("student has no RIASEC results; the test must be completed before scoring")]
    MissingRiasecResults,
    #[error("RIASEC score {value} for dimension {dimension} exceeds 100")]
    RiasecScoreOutOfRange { dimension: Dimension, value: u8 },
    #[error("bac grade {0} is outside the 0-20 scale")]
    GradeOutOfRange(u8),
    #[error("rating {rating} for value '{name}' is outside the 1-5 scale")]
    ValueRatingOutOfRange { name: &'static str, rating: u8 },
}

impl ScoringProfile {
    /// Validate a captured profile into the form the engine consumes.
    pub fn from_student(profile: &StudentProfile) -> Result<Self, ProfileValidationError> {
        let riasec = profile
            .riasec
            .ok_or(ProfileValidationError::MissingRiasecResults)?;

        for (dimension, value) in riasec.entries() {
            if value > 100 {
                return Err(ProfileValidationError::RiasecScoreOutOfRange { dimension, value });
            }
        }

        if let Some(grade) = profile.bac_grade {
            if grade > BAC_GRADE_MAX {
                return Err(ProfileValidationError::GradeOutOfRange(grade));
            }
        }

        if let Some(values) = &profile.values {
            for (value, rating) in values.entries() {
                if !(VALUE_RATING_MIN..=VALUE_RATING_MAX).contains(&rating) {
                    return Err(ProfileValidationError::ValueRatingOutOfRange {
                        name: value.name(),
                        rating,
                    });
                }
            }
        }

        Ok(Self {
            riasec,
            holland_code: HollandCode::from_scores(&riasec),
            bac_grade: profile.bac_grade,
            values: profile.values,
            financial_situation: profile.financial_situation,
        })
    }
}
