use super::domain::{StudentId, StudentProfile};
use super::scoring::CompatibilityScore;
use crate::orientation::catalog::{ProgramDescriptor, ProgramId};
use crate::orientation::riasec::{HollandCode, RiasecScores};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stored outcome of a completed RIASEC test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiasecResult {
    pub scores: RiasecScores,
    pub holland_code: HollandCode,
    pub recorded_on: NaiveDate,
    pub test_version: String,
}

/// Repository record bundling the captured profile and test history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub student_id: StudentId,
    pub profile: StudentProfile,
    pub riasec_result: Option<RiasecResult>,
}

impl StudentRecord {
    /// Attach a fresh test result, keeping the profile's scores in sync.
    pub fn apply_riasec(&mut self, result: RiasecResult) {
        self.profile.riasec = Some(result.scores);
        self.riasec_result = Some(result);
    }
}

/// One entry of a generated recommendation list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedProgram {
    /// 1-based position after sorting by descending total score.
    pub ranking: u32,
    pub program: ProgramDescriptor,
    pub score: CompatibilityScore,
    pub generated_on: NaiveDate,
}

/// Storage abstraction for student profiles and their recommendation lists.
pub trait StudentRepository: Send + Sync {
    fn fetch(&self, id: &StudentId) -> Result<Option<StudentRecord>, RepositoryError>;
    fn upsert(&self, record: StudentRecord) -> Result<(), RepositoryError>;
    fn record_riasec(
        &self,
        id: &StudentId,
        result: RiasecResult,
    ) -> Result<StudentRecord, RepositoryError>;
    fn store_recommendations(
        &self,
        id: &StudentId,
        entries: Vec<RankedProgram>,
    ) -> Result<(), RepositoryError>;
    fn latest_recommendations(&self, id: &StudentId) -> Result<Vec<RankedProgram>, RepositoryError>;
}

/// Read/replace abstraction over the program catalog.
pub trait ProgramCatalogRepository: Send + Sync {
    fn list_active(&self) -> Result<Vec<ProgramDescriptor>, RepositoryError>;
    fn fetch(&self, id: &ProgramId) -> Result<Option<ProgramDescriptor>, RepositoryError>;
    fn replace_all(&self, programs: Vec<ProgramDescriptor>) -> Result<usize, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
