//! Compatibility matching: profile validation, the scoring rubric, and the
//! recommendation service with its HTTP surface.

pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    FinancialSituation, ProfessionalValue, ScoringProfile, StudentId, StudentProfile, ValueRatings,
};
pub use repository::{
    ProgramCatalogRepository, RankedProgram, RepositoryError, RiasecResult, StudentRecord,
    StudentRepository,
};
pub use router::recommendation_router;
pub use scoring::{
    CompatibilityEngine, CompatibilityScore, ComponentScores, ComponentWeights, Criterion,
    RankingTier, ScoringConfig,
};
pub use service::{
    CriterionScore, ProgramCompatibility, RecommendationService, RecommendationServiceError,
    RECOMMENDATION_CAP,
};
pub use validation::ProfileValidationError;
