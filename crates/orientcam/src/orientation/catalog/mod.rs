//! Academic program catalog: descriptors, CSV import, and statistics.

mod importer;
mod parser;
mod statistics;

pub use importer::ProgramCatalogImporter;
pub use statistics::CatalogStatistics;

use super::riasec::Dimension;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier wrapper for catalog programs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProgramId(pub String);

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Degree level offered by a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyLevel {
    Licence,
    Master,
    Ingenieur,
}

impl StudyLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Licence => "Licence",
            Self::Master => "Master",
            Self::Ingenieur => "Ingénieur",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "licence" => Some(Self::Licence),
            "master" => Some(Self::Master),
            "ingenieur" | "ingénieur" => Some(Self::Ingenieur),
            _ => None,
        }
    }
}

/// One program as advertised in the catalog.
///
/// Optional fields reflect incomplete institutional data; the matching engine
/// substitutes neutral defaults rather than rejecting such programs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramDescriptor {
    pub id: ProgramId,
    pub code: String,
    pub name: String,
    pub university: Option<String>,
    pub level: StudyLevel,
    pub domain: Option<String>,
    pub department: String,
    /// One to three RIASEC letters, primary first (e.g. "IRC").
    pub riasec_match: String,
    pub min_bac_grade: Option<u8>,
    pub employment_rate: Option<u8>,
    pub registration_fee: u32,
    pub annual_tuition: u32,
    pub scholarship_available: bool,
    pub capacity: u32,
    pub is_active: bool,
}

impl ProgramDescriptor {
    /// The dimension the program rewards most, parsed from `riasec_match`.
    pub fn primary_dimension(&self) -> Option<Dimension> {
        self.riasec_match.chars().next().and_then(Dimension::from_code)
    }

    /// All dimensions named by `riasec_match`, primary first.
    pub fn riasec_dimensions(&self) -> Vec<Dimension> {
        self.riasec_match
            .chars()
            .filter_map(Dimension::from_code)
            .collect()
    }
}

/// Failures raised while importing a catalog export.
#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read catalog export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid program record '{code}': {reason}")]
    InvalidRecord { code: String, reason: String },
}
