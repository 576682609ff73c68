use super::config::ScoringConfig;
use super::ComponentScores;
use crate::orientation::catalog::ProgramDescriptor;
use crate::orientation::matching::domain::{ProfessionalValue, ScoringProfile};
use crate::orientation::riasec::{hexagon_distance, Dimension};

pub(crate) fn component_scores(
    profile: &ScoringProfile,
    program: &ProgramDescriptor,
    config: &ScoringConfig,
) -> ComponentScores {
    ComponentScores {
        riasec_score: clamp_round(riasec_score(profile, program, config)),
        grades_score: clamp_round(grades_score(profile, program, config)),
        values_score: clamp_round(values_score(profile, program, config)),
        employment_score: clamp_round(employment_score(program, config)),
        financial_score: clamp_round(financial_score(profile, program, config)),
    }
}

fn clamp_round(score: f64) -> u8 {
    score.clamp(0.0, 100.0).round() as u8
}

/// Interest fit: the student's percentage on the program's primary dimension,
/// attenuated by how far that dimension sits from the student's dominant one
/// on the hexagon.
fn riasec_score(profile: &ScoringProfile, program: &ProgramDescriptor, config: &ScoringConfig) -> f64 {
    let Some(primary) = program.primary_dimension() else {
        return 0.0;
    };

    let base = profile.riasec.get(primary) as f64;
    let distance = hexagon_distance(profile.holland_code.primary(), primary);
    base * config.distance_attenuation[distance as usize]
}

/// Academic fit: full score without an entry bar, neutral when the student is
/// ungraded, otherwise a linear curve around the program minimum.
fn grades_score(profile: &ScoringProfile, program: &ProgramDescriptor, config: &ScoringConfig) -> f64 {
    let Some(minimum) = program.min_bac_grade else {
        return 100.0;
    };
    let Some(average) = profile.bac_grade else {
        return config.neutral_score as f64;
    };

    let margin = average as f64 - minimum as f64;
    if margin >= 0.0 {
        (70.0 + margin * config.grade_bonus_per_point).min(100.0)
    } else {
        (50.0 + margin * config.grade_penalty_per_point).max(0.0)
    }
}

/// Weighted value preferences associated with each primary dimension.
fn value_weights(dimension: Dimension) -> &'static [(ProfessionalValue, f64)] {
    use ProfessionalValue::*;
    match dimension {
        Dimension::Realistic => &[
            (Autonomy, 0.3),
            (JobSecurity, 0.3),
            (Salary, 0.2),
            (Variety, 0.2),
        ],
        Dimension::Investigative => &[
            (Autonomy, 0.4),
            (Creativity, 0.3),
            (Prestige, 0.2),
            (Variety, 0.1),
        ],
        Dimension::Artistic => &[(Creativity, 0.5), (Autonomy, 0.3), (Variety, 0.2)],
        Dimension::Social => &[
            (HelpingOthers, 0.5),
            (WorkLifeBalance, 0.3),
            (JobSecurity, 0.2),
        ],
        Dimension::Enterprising => &[
            (Prestige, 0.4),
            (Salary, 0.3),
            (Autonomy, 0.2),
            (Variety, 0.1),
        ],
        Dimension::Conventional => &[
            (JobSecurity, 0.4),
            (WorkLifeBalance, 0.3),
            (Salary, 0.2),
            (Prestige, 0.1),
        ],
    }
}

/// Values fit: weighted mean of the student's normalised ratings over the
/// value profile of the program's primary dimension.
fn values_score(profile: &ScoringProfile, program: &ProgramDescriptor, config: &ScoringConfig) -> f64 {
    let (Some(ratings), Some(primary)) = (profile.values, program.primary_dimension()) else {
        return config.neutral_score as f64;
    };

    let mut total = 0.0;
    let mut total_weight = 0.0;
    for (value, weight) in value_weights(primary) {
        let normalized = (ratings.get(*value) as f64 - 1.0) / 4.0 * 100.0;
        total += normalized * weight;
        total_weight += weight;
    }

    if total_weight > 0.0 {
        total / total_weight
    } else {
        config.neutral_score as f64
    }
}

/// Employment fit: pass-through of the reported placement rate.
fn employment_score(program: &ProgramDescriptor, config: &ScoringConfig) -> f64 {
    match program.employment_rate {
        Some(rate) => rate.min(100) as f64,
        None => config.neutral_score as f64,
    }
}

/// Financial fit: scholarship-need category against the program's funding and
/// tuition bands. Low need is flat regardless of cost.
fn financial_score(
    profile: &ScoringProfile,
    program: &ProgramDescriptor,
    config: &ScoringConfig,
) -> f64 {
    use crate::orientation::matching::domain::FinancialSituation::*;

    match profile.financial_situation {
        Low => 75.0,
        Medium => {
            if program.scholarship_available {
                85.0
            } else if program.annual_tuition <= config.affordable_tuition_threshold {
                70.0
            } else {
                45.0
            }
        }
        High => {
            if program.scholarship_available {
                90.0
            } else if program.annual_tuition <= config.low_tuition_threshold {
                75.0
            } else if program.annual_tuition <= config.affordable_tuition_threshold {
                40.0
            } else {
                15.0
            }
        }
    }
}
