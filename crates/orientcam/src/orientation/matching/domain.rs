use crate::orientation::riasec::{HollandCode, RiasecScores};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier wrapper for registered students.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StudentId(pub String);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scholarship-need category declared during profile capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancialSituation {
    Low,
    Medium,
    High,
}

impl FinancialSituation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Besoin faible",
            Self::Medium => "Besoin moyen",
            Self::High => "Besoin élevé",
        }
    }
}

/// The professional values rated during profile capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfessionalValue {
    Autonomy,
    Creativity,
    HelpingOthers,
    JobSecurity,
    Salary,
    WorkLifeBalance,
    Prestige,
    Variety,
}

impl ProfessionalValue {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Autonomy,
            Self::Creativity,
            Self::HelpingOthers,
            Self::JobSecurity,
            Self::Salary,
            Self::WorkLifeBalance,
            Self::Prestige,
            Self::Variety,
        ]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Autonomy => "autonomy",
            Self::Creativity => "creativity",
            Self::HelpingOthers => "helping_others",
            Self::JobSecurity => "job_security",
            Self::Salary => "salary",
            Self::WorkLifeBalance => "work_life_balance",
            Self::Prestige => "prestige",
            Self::Variety => "variety",
        }
    }
}

/// Importance ratings for the eight professional values, each 1-5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRatings {
    pub autonomy: u8,
    pub creativity: u8,
    pub helping_others: u8,
    pub job_security: u8,
    pub salary: u8,
    pub work_life_balance: u8,
    pub prestige: u8,
    pub variety: u8,
}

impl ValueRatings {
    pub const fn get(&self, value: ProfessionalValue) -> u8 {
        match value {
            ProfessionalValue::Autonomy => self.autonomy,
            ProfessionalValue::Creativity => self.creativity,
            ProfessionalValue::HelpingOthers => self.helping_others,
            ProfessionalValue::JobSecurity => self.job_security,
            ProfessionalValue::Salary => self.salary,
            ProfessionalValue::WorkLifeBalance => self.work_life_balance,
            ProfessionalValue::Prestige => self.prestige,
            ProfessionalValue::Variety => self.variety,
        }
    }

    /// Ratings paired with their value, in declaration order.
    pub fn entries(&self) -> [(ProfessionalValue, u8); 8] {
        let mut out = [(ProfessionalValue::Autonomy, 0); 8];
        for (slot, value) in out.iter_mut().zip(ProfessionalValue::ordered()) {
            *slot = (value, self.get(value));
        }
        out
    }
}

/// Student profile as captured across the onboarding forms.
///
/// Every section is optional until the student completes it; the matching
/// engine only requires RIASEC results and degrades gracefully on the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub riasec: Option<RiasecScores>,
    /// Bac average on the national 0-20 scale.
    pub bac_grade: Option<u8>,
    pub values: Option<ValueRatings>,
    pub financial_situation: FinancialSituation,
    /// UI progress indicator; the matching engine ignores it.
    pub completion_percentage: u8,
}

/// The validated profile consumed by the compatibility engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringProfile {
    pub riasec: RiasecScores,
    pub holland_code: HollandCode,
    pub bac_grade: Option<u8>,
    pub values: Option<ValueRatings>,
    pub financial_situation: FinancialSituation,
}
