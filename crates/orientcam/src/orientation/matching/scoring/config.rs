use serde::{Deserialize, Serialize};

/// Relative weight of each compatibility criterion.
///
/// These constants are the single source of truth for the advertised
/// 30/25/20/15/10 methodology; UI copy describing the weighting must read
/// from here rather than restating the numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentWeights {
    pub riasec: f64,
    pub grades: f64,
    pub values: f64,
    pub employment: f64,
    pub financial: f64,
}

impl ComponentWeights {
    pub fn sum(&self) -> f64 {
        self.riasec + self.grades + self.values + self.employment + self.financial
    }
}

impl Default for ComponentWeights {
    fn default() -> Self {
        Self {
            riasec: 0.30,
            grades: 0.25,
            values: 0.20,
            employment: 0.15,
            financial: 0.10,
        }
    }
}

/// Rubric configuration for the compatibility engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: ComponentWeights,
    /// Component score at or above which a strength line is emitted.
    pub strong_threshold: u8,
    /// Component score at or below which a weakness line is emitted.
    pub weak_threshold: u8,
    /// Substitute for absent optional inputs.
    pub neutral_score: u8,
    /// Interest attenuation per hexagon distance 0..=3.
    pub distance_attenuation: [f64; 4],
    /// Points gained per grade point above a program's minimum.
    pub grade_bonus_per_point: f64,
    /// Points lost per grade point below a program's minimum.
    pub grade_penalty_per_point: f64,
    /// Tuition at or below which a program counts as low-cost (FCFA).
    pub low_tuition_threshold: u32,
    /// Tuition at or below which a program counts as affordable (FCFA).
    pub affordable_tuition_threshold: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ComponentWeights::default(),
            strong_threshold: 70,
            weak_threshold: 40,
            neutral_score: 50,
            distance_attenuation: [1.0, 0.75, 0.5, 0.25],
            grade_bonus_per_point: 10.0,
            grade_penalty_per_point: 15.0,
            low_tuition_threshold: 100_000,
            affordable_tuition_threshold: 300_000,
        }
    }
}
