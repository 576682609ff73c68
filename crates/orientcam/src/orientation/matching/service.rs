use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use super::domain::{ScoringProfile, StudentId};
use super::repository::{
    ProgramCatalogRepository, RankedProgram, RepositoryError, StudentRepository,
};
use super::scoring::{
    CompatibilityEngine, CompatibilityScore, Criterion, RankingTier, ScoringConfig,
};
use super::validation::ProfileValidationError;
use crate::orientation::catalog::{ProgramDescriptor, ProgramId};

/// Hard cap on a generated recommendation list.
pub const RECOMMENDATION_CAP: usize = 20;

/// Service composing profile validation, the catalog, and the scoring rubric.
pub struct RecommendationService<S, P> {
    students: Arc<S>,
    programs: Arc<P>,
    engine: Arc<CompatibilityEngine>,
    max_recommendations: usize,
}

impl<S, P> RecommendationService<S, P>
where
    S: StudentRepository + 'static,
    P: ProgramCatalogRepository + 'static,
{
    pub fn new(students: Arc<S>, programs: Arc<P>, config: ScoringConfig) -> Self {
        Self::with_cap(students, programs, config, RECOMMENDATION_CAP)
    }

    pub fn with_cap(
        students: Arc<S>,
        programs: Arc<P>,
        config: ScoringConfig,
        max_recommendations: usize,
    ) -> Self {
        Self {
            students,
            programs,
            engine: Arc::new(CompatibilityEngine::new(config)),
            max_recommendations: max_recommendations.clamp(1, RECOMMENDATION_CAP),
        }
    }

    pub fn engine(&self) -> &CompatibilityEngine {
        &self.engine
    }

    /// Score every active program for a student and persist the ranked list.
    ///
    /// Ordering is descending total score with ascending program id as the
    /// tie-break, so repeated runs over identical data return identical lists.
    pub fn generate(
        &self,
        student_id: &StudentId,
        limit: Option<usize>,
        today: NaiveDate,
    ) -> Result<Vec<RankedProgram>, RecommendationServiceError> {
        let record = self
            .students
            .fetch(student_id)?
            .ok_or(RepositoryError::NotFound)?;
        let profile = ScoringProfile::from_student(&record.profile)?;

        let programs = self.programs.list_active()?;
        if programs.is_empty() {
            return Err(RecommendationServiceError::EmptyCatalog);
        }

        let mut scored: Vec<(CompatibilityScore, ProgramDescriptor)> = programs
            .into_iter()
            .map(|program| (self.engine.score(&profile, &program), program))
            .collect();

        scored.sort_by(|(score_a, program_a), (score_b, program_b)| {
            score_b
                .total_score
                .cmp(&score_a.total_score)
                .then_with(|| program_a.id.cmp(&program_b.id))
        });

        let keep = limit
            .unwrap_or(self.max_recommendations)
            .clamp(1, self.max_recommendations);
        scored.truncate(keep);

        let entries: Vec<RankedProgram> = scored
            .into_iter()
            .enumerate()
            .map(|(index, (score, program))| RankedProgram {
                ranking: index as u32 + 1,
                program,
                score,
                generated_on: today,
            })
            .collect();

        self.students
            .store_recommendations(student_id, entries.clone())?;

        info!(
            student = %student_id,
            count = entries.len(),
            "recommendation list generated"
        );

        Ok(entries)
    }

    /// The most recently stored list, without recomputation.
    pub fn latest(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<RankedProgram>, RecommendationServiceError> {
        self.students
            .fetch(student_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(self.students.latest_recommendations(student_id)?)
    }

    /// Detailed breakdown for a single program, used on detail pages.
    pub fn compatibility(
        &self,
        student_id: &StudentId,
        program_id: &ProgramId,
        today: NaiveDate,
    ) -> Result<ProgramCompatibility, RecommendationServiceError> {
        let record = self
            .students
            .fetch(student_id)?
            .ok_or(RepositoryError::NotFound)?;
        let profile = ScoringProfile::from_student(&record.profile)?;

        let program = self
            .programs
            .fetch(program_id)?
            .ok_or(RepositoryError::NotFound)?;

        let score = self.engine.score(&profile, &program);
        let weights = self.engine.config().weights;
        let tier = score.tier();

        let criterion_weight = |criterion: Criterion| match criterion {
            Criterion::Riasec => weights.riasec,
            Criterion::Grades => weights.grades,
            Criterion::Values => weights.values,
            Criterion::Employment => weights.employment,
            Criterion::Financial => weights.financial,
        };

        let criterion_details = |criterion: Criterion| match criterion {
            Criterion::Riasec => Some(format!(
                "Votre code Holland ({}) vs Programme ({})",
                profile.holland_code, program.riasec_match
            )),
            Criterion::Grades => match (profile.bac_grade, program.min_bac_grade) {
                (Some(average), Some(minimum)) => {
                    Some(format!("Note bac: {average}/20, Requis: {minimum}/20"))
                }
                (_, None) => Some("Aucune note minimale exigée".to_string()),
                (None, Some(minimum)) => Some(format!("Requis: {minimum}/20, note non renseignée")),
            },
            Criterion::Values => None,
            Criterion::Employment => program
                .employment_rate
                .map(|rate| format!("Taux d'insertion: {rate}%")),
            Criterion::Financial => Some(format!(
                "Frais annuels: {} FCFA, {}",
                program.annual_tuition,
                if program.scholarship_available {
                    "bourse disponible"
                } else {
                    "pas de bourse"
                }
            )),
        };

        let scores = Criterion::ordered()
            .into_iter()
            .map(|criterion| {
                let component = score.components.get(criterion);
                let weight = criterion_weight(criterion);
                CriterionScore {
                    criterion: criterion.label(),
                    score: component,
                    weight,
                    weighted_score: component as f64 * weight,
                    details: criterion_details(criterion),
                }
            })
            .collect();

        Ok(ProgramCompatibility {
            program_id: program.id.clone(),
            program_code: program.code.clone(),
            program_name: program.name.clone(),
            total_score: score.total_score,
            ranking: tier.label().to_string(),
            tier,
            scores,
            components: score.components,
            strengths: score.strengths.clone(),
            weaknesses: score.weaknesses.clone(),
            advice: score.advice.clone(),
            evaluated_on: today,
        })
    }
}

/// One weighted criterion row of a compatibility breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionScore {
    pub criterion: &'static str,
    pub score: u8,
    pub weight: f64,
    pub weighted_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Single-program compatibility view for detail pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgramCompatibility {
    pub program_id: ProgramId,
    pub program_code: String,
    pub program_name: String,
    pub total_score: u8,
    pub ranking: String,
    pub tier: RankingTier,
    pub scores: Vec<CriterionScore>,
    pub components: super::scoring::ComponentScores,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub advice: String,
    pub evaluated_on: NaiveDate,
}

/// Error raised by the recommendation service.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationServiceError {
    #[error(transparent)]
    Profile(#[from] ProfileValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("no active programs in the catalog")]
    EmptyCatalog,
}
