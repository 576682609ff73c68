use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use orientcam::orientation::catalog::{ProgramDescriptor, ProgramId, StudyLevel};
use orientcam::orientation::matching::{
    ProgramCatalogRepository, RankedProgram, RepositoryError, RiasecResult, ScoringConfig,
    StudentId, StudentRecord, StudentRepository,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryStudentDirectory {
    records: Arc<Mutex<HashMap<StudentId, StudentRecord>>>,
    recommendations: Arc<Mutex<HashMap<StudentId, Vec<RankedProgram>>>>,
}

impl StudentRepository for InMemoryStudentDirectory {
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

    fn latest_recommendations(&self, id: &StudentId) -> Result<Vec<RankedProgram>, RepositoryError> {
        let guard = self
            .recommendations
            .lock()
            .expect("recommendation mutex poisoned");
        Ok(guard.get(id).cloned().unwrap_or_default())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryProgramCatalog {
    programs: Arc<Mutex<Vec<ProgramDescriptor>>>,
}

impl InMemoryProgramCatalog {
    pub(crate) fn seeded() -> Self {
        Self {
            programs: Arc::new(Mutex::new(seed_catalog())),
        }
    }
}

impl ProgramCatalogRepository for InMemoryProgramCatalog {
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

pub(crate) fn default_scoring_config() -> ScoringConfig {
    ScoringConfig::default()
}

fn seed_program(
    code: &str,
    name: &str,
    level: StudyLevel,
    department: &str,
    riasec: &str,
    min_bac_grade: Option<u8>,
    employment_rate: Option<u8>,
    annual_tuition: u32,
    scholarship_available: bool,
) -> ProgramDescriptor {
    ProgramDescriptor {
        id: ProgramId(code.to_string()),
        code: code.to_string(),
        name: name.to_string(),
        university: Some("Université de Bertoua".to_string()),
        level,
        domain: None,
        department: department.to_string(),
        riasec_match: riasec.to_string(),
        min_bac_grade,
        employment_rate,
        registration_fee: 50_000,
        annual_tuition,
        scholarship_available,
        capacity: 100,
        is_active: true,
    }
}

/// Built-in catalog used until a registry export is imported.
pub(crate) fn seed_catalog() -> Vec<ProgramDescriptor> {
    vec![
        seed_program(
            "INF-L",
            "Licence en Informatique",
            StudyLevel::Licence,
            "Informatique",
            "IRC",
            Some(12),
            Some(80),
            200_000,
            true,
        ),
        seed_program(
            "MAT-L",
            "Licence en Mathématiques",
            StudyLevel::Licence,
            "Mathématiques",
            "ICR",
            Some(12),
            Some(70),
            200_000,
            true,
        ),
        seed_program(
            "BIO-L",
            "Licence en Sciences Biomédicales",
            StudyLevel::Licence,
            "Sciences Biomédicales",
            "ISR",
            Some(14),
            Some(75),
            250_000,
            false,
        ),
        seed_program(
            "ECO-L",
            "Licence en Économie et Gestion",
            StudyLevel::Licence,
            "Sciences Économiques",
            "ECS",
            Some(10),
            Some(65),
            150_000,
            true,
        ),
        seed_program(
            "DRT-L",
            "Licence en Droit",
            StudyLevel::Licence,
            "Droit",
            "ESC",
            Some(10),
            None,
            150_000,
            false,
        ),
        seed_program(
            "GCV-I",
            "Diplôme d'Ingénieur Génie Civil",
            StudyLevel::Ingenieur,
            "Génie Civil",
            "RIC",
            Some(14),
            Some(85),
            450_000,
            true,
        ),
        seed_program(
            "LET-L",
            "Licence en Lettres Modernes Françaises",
            StudyLevel::Licence,
            "Lettres",
            "ASE",
            None,
            None,
            100_000,
            false,
        ),
    ]
}
