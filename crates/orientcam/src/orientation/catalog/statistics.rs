use super::ProgramDescriptor;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate view of the catalog for the statistics endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStatistics {
    pub total_programs: usize,
    pub by_level: BTreeMap<String, usize>,
    pub by_department: BTreeMap<String, usize>,
    pub average_tuition: f64,
    pub average_employment_rate: f64,
    pub riasec_distribution: BTreeMap<char, usize>,
}

impl CatalogStatistics {
    /// Aggregate over active programs only; inactive entries are ignored.
    pub fn collect(programs: &[ProgramDescriptor]) -> Self {
        let active: Vec<&ProgramDescriptor> =
            programs.iter().filter(|program| program.is_active).collect();

        let mut by_level = BTreeMap::new();
        let mut by_department = BTreeMap::new();
        let mut riasec_distribution = BTreeMap::new();

        for program in &active {
            *by_level
                .entry(program.level.label().to_string())
                .or_default() += 1;
            *by_department
                .entry(program.department.clone())
                .or_default() += 1;
            if let Some(dimension) = program.primary_dimension() {
                *riasec_distribution.entry(dimension.code()).or_default() += 1;
            }
        }

        let average_tuition = if active.is_empty() {
            0.0
        } else {
            active
                .iter()
                .map(|program| program.annual_tuition as f64)
                .sum::<f64>()
                / active.len() as f64
        };

        let with_employment: Vec<u8> = active
            .iter()
            .filter_map(|program| program.employment_rate)
            .collect();
        let average_employment_rate = if with_employment.is_empty() {
            0.0
        } else {
            with_employment.iter().map(|rate| *rate as f64).sum::<f64>()
                / with_employment.len() as f64
        };

        Self {
            total_programs: active.len(),
            by_level,
            by_department,
            average_tuition,
            average_employment_rate,
            riasec_distribution,
        }
    }
}
