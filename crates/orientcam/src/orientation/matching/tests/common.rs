use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::orientation::catalog::{ProgramDescriptor, ProgramId, StudyLevel};
use crate::orientation::matching::domain::{
    FinancialSituation, ScoringProfile, StudentId, StudentProfile, ValueRatings,
};
use crate::orientation::matching::repository::{
    ProgramCatalogRepository, RankedProgram, RepositoryError, RiasecResult, StudentRecord,
    StudentRepository,
};
use crate::orientation::matching::router::recommendation_router;
use crate::orientation::matching::scoring::{CompatibilityEngine, ScoringConfig};
use crate::orientation::matching::service::RecommendationService;
use crate::orientation::riasec::{HollandCode, RiasecScores};

pub(super) fn riasec_scores() -> RiasecScores {
    RiasecScores {
        realistic: 20,
        investigative: 85,
        artistic: 40,
        social: 30,
        enterprising: 25,
        conventional: 35,
    }
}

pub(super) fn value_ratings() -> ValueRatings {
    ValueRatings {
        autonomy: 5,
        creativity: 4,
        helping_others: 3,
        job_security: 2,
        salary: 3,
        work_life_balance: 3,
        prestige: 4,
        variety: 3,
    }
}

pub(super) fn student_profile() -> StudentProfile {
    StudentProfile {
        riasec: Some(riasec_scores()),
        bac_grade: Some(15),
        values: Some(value_ratings()),
        financial_situation: FinancialSituation::High,
        completion_percentage: 100,
    }
}

pub(super) fn scoring_profile() -> ScoringProfile {
    ScoringProfile::from_student(&student_profile()).expect("profile validates")
}

pub(super) fn scoring_config() -> ScoringConfig {
    ScoringConfig::default()
}

pub(super) fn engine() -> CompatibilityEngine {
    CompatibilityEngine::new(scoring_config())
}

pub(super) fn program(code: &str) -> ProgramDescriptor {
    ProgramDescriptor {
        id: ProgramId(code.to_string()),
        code: code.to_string(),
        name: format!("Programme {code}"),
        university: Some("Université de Bertoua".to_string()),
        level: StudyLevel::Licence,
        domain: Some("Sciences et Technologies".to_string()),
        department: "Informatique".to_string(),
        riasec_match: "IRC".to_string(),
        min_bac_grade: Some(12),
        employment_rate: Some(80),
        registration_fee: 50_000,
        annual_tuition: 200_000,
        scholarship_available: true,
        capacity: 120,
        is_active: true,
    }
}

pub(super) fn mismatched_program(code: &str) -> ProgramDescriptor {
    let mut program = program(code);
    program.riasec_match = "CES".to_string();
    program.department = "Comptabilité".to_string();
    program.min_bac_grade = Some(18);
    program.employment_rate = None;
    program.annual_tuition = 500_000;
    program.scholarship_available = false;
    program
}

pub(super) fn student_record(id: &str) -> StudentRecord {
    let scores = riasec_scores();
    StudentRecord {
        student_id: StudentId(id.to_string()),
        profile: student_profile(),
        riasec_result: Some(RiasecResult {
            scores,
            holland_code: HollandCode::from_scores(&scores),
            recorded_on: sample_date(),
            test_version: "1.0".to_string(),
        }),
    }
}

pub(super) fn sample_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 24).expect("valid date")
}

#[derive(Default, Clone)]
pub(super) struct MemoryStudents {
    records: Arc<Mutex<HashMap<StudentId, StudentRecord>>>,
    recommendations: Arc<Mutex<HashMap<StudentId, Vec<RankedProgram>>>>,
}

impl StudentRepository for MemoryStudents {
    fn fetch(&self, id: &StudentId) -> Result<Option<StudentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("student mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn upsert(&self, record: StudentRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("student mutex poisoned");
        guard.insert(record.student_id.clone(), record);
        Ok(())
    }

    fn record_riasec(
        &self,
        id: &StudentId,
        result: RiasecResult,
    ) -> Result<StudentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("student mutex poisoned");
        let record = guard.get_mut(id).ok_or(RepositoryError::NotFound)?;
        record.apply_riasec(result);
        Ok(record.clone())
    }

    fn store_recommendations(
        &self,
        id: &StudentId,
        entries: Vec<RankedProgram>,
    ) -> Result<(), RepositoryError> {
        let mut guard = self
            .recommendations
            .lock()
            .expect("recommendation mutex poisoned");
        guard.insert(id.clone(), entries);
        Ok(())
    }

    fn latest_recommendations(
        &self,
        id: &StudentId,
    ) -> Result<Vec<RankedProgram>, RepositoryError> {
        let guard = self
            .recommendations
            .lock()
            .expect("recommendation mutex poisoned");
        Ok(guard.get(id).cloned().unwrap_or_default())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryCatalog {
    programs: Arc<Mutex<Vec<ProgramDescriptor>>>,
}

impl MemoryCatalog {
    pub(super) fn with_programs(programs: Vec<ProgramDescriptor>) -> Self {
        Self {
            programs: Arc::new(Mutex::new(programs)),
        }
    }
}

impl ProgramCatalogRepository for MemoryCatalog {
    fn list_active(&self) -> Result<Vec<ProgramDescriptor>, RepositoryError> {
        let guard = self.programs.lock().expect("catalog mutex poisoned");
        Ok(guard
            .iter()
            .filter(|program| program.is_active)
            .cloned()
            .collect())
    }

    fn fetch(&self, id: &ProgramId) -> Result<Option<ProgramDescriptor>, RepositoryError> {
        let guard = self.programs.lock().expect("catalog mutex poisoned");
        Ok(guard.iter().find(|program| &program.id == id).cloned())
    }

    fn replace_all(&self, programs: Vec<ProgramDescriptor>) -> Result<usize, RepositoryError> {
        let mut guard = self.programs.lock().expect("catalog mutex poisoned");
        *guard = programs;
        Ok(guard.len())
    }
}

pub(super) struct UnavailableStudents;

impl StudentRepository for UnavailableStudents {
    fn fetch(&self, _id: &StudentId) -> Result<Option<StudentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn upsert(&self, _record: StudentRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn record_riasec(
        &self,
        _id: &StudentId,
        _result: RiasecResult,
    ) -> Result<StudentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn store_recommendations(
        &self,
        _id: &StudentId,
        _entries: Vec<RankedProgram>,
    ) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn latest_recommendations(
        &self,
        _id: &StudentId,
    ) -> Result<Vec<RankedProgram>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (
    RecommendationService<MemoryStudents, MemoryCatalog>,
    Arc<MemoryStudents>,
    Arc<MemoryCatalog>,
) {
    let students = Arc::new(MemoryStudents::default());
    students
        .upsert(student_record("stu-001"))
        .expect("seed student");

    let catalog = Arc::new(MemoryCatalog::with_programs(vec![
        program("INF-L"),
        mismatched_program("CPT-L"),
    ]));

    let service = RecommendationService::new(students.clone(), catalog.clone(), scoring_config());
    (service, students, catalog)
}

pub(super) fn recommendation_router_with_service(
    service: RecommendationService<MemoryStudents, MemoryCatalog>,
) -> axum::Router {
    recommendation_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
