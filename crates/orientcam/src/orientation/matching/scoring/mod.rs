mod config;
mod policy;
mod rules;

pub use config::{ComponentWeights, ScoringConfig};
pub use policy::{Criterion, RankingTier};

use super::domain::ScoringProfile;
use crate::orientation::catalog::ProgramDescriptor;
use serde::{Deserialize, Serialize};

/// Stateless engine applying the rubric configuration to a profile.
///
/// `score` is a pure function of its inputs: no I/O, no clocks, no shared
/// state, so batch scoring a catalog is safe to run concurrently.
pub struct CompatibilityEngine {
    config: ScoringConfig,
}

impl CompatibilityEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, profile: &ScoringProfile, program: &ProgramDescriptor) -> CompatibilityScore {
        let components = rules::component_scores(profile, program, &self.config);
        let total_score = weighted_total(&components, &self.config.weights);
        let (strengths, weaknesses) = policy::explanations(&components, &self.config);
        let advice = policy::advice_for(total_score);

        CompatibilityScore {
            total_score,
            components,
            strengths,
            weaknesses,
            advice,
        }
    }
}

/// Weighted total over the already-rounded components, so the published
/// invariant `total = round(Σ wᵢ·cᵢ)` holds exactly.
fn weighted_total(components: &ComponentScores, weights: &ComponentWeights) -> u8 {
    let total = components.riasec_score as f64 * weights.riasec
        + components.grades_score as f64 * weights.grades
        + components.values_score as f64 * weights.values
        + components.employment_score as f64 * weights.employment
        + components.financial_score as f64 * weights.financial;

    total.round().clamp(0.0, 100.0) as u8
}

/// The five criterion scores, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub riasec_score: u8,
    pub grades_score: u8,
    pub values_score: u8,
    pub employment_score: u8,
    pub financial_score: u8,
}

impl ComponentScores {
    pub const fn get(&self, criterion: Criterion) -> u8 {
        match criterion {
            Criterion::Riasec => self.riasec_score,
            Criterion::Grades => self.grades_score,
            Criterion::Values => self.values_score,
            Criterion::Employment => self.employment_score,
            Criterion::Financial => self.financial_score,
        }
    }
}

/// Full scoring output for one student/program pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityScore {
    pub total_score: u8,
    #[serde(flatten)]
    pub components: ComponentScores,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub advice: String,
}

impl CompatibilityScore {
    /// Display band for the total; derived, never persisted.
    pub fn tier(&self) -> RankingTier {
        RankingTier::for_total(self.total_score)
    }
}
