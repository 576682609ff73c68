use super::parser::{self, CatalogRow};
use super::{CatalogImportError, ProgramDescriptor, ProgramId, StudyLevel};
use crate::orientation::riasec::Dimension;
use std::io::Read;
use std::path::Path;

/// Builds `ProgramDescriptor`s from a registry CSV export.
pub struct ProgramCatalogImporter;

impl ProgramCatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ProgramDescriptor>, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ProgramDescriptor>, CatalogImportError> {
        parser::parse_rows(reader)?
            .into_iter()
            .map(descriptor_from_row)
            .collect()
    }
}

fn descriptor_from_row(row: CatalogRow) -> Result<ProgramDescriptor, CatalogImportError> {
    let invalid = |reason: String| CatalogImportError::InvalidRecord {
        code: row.code.clone(),
        reason,
    };

    if row.code.trim().is_empty() {
        return Err(CatalogImportError::InvalidRecord {
            code: "<blank>".to_string(),
            reason: "program code is required".to_string(),
        });
    }

    let level = StudyLevel::parse(&row.level)
        .ok_or_else(|| invalid(format!("unknown study level '{}'", row.level)))?;

    let riasec_match = row.riasec_match.trim().to_ascii_uppercase();
    if riasec_match.is_empty() || riasec_match.len() > 3 {
        return Err(invalid(format!(
            "RIASEC match '{riasec_match}' must be one to three letters"
        )));
    }
    for letter in riasec_match.chars() {
        if Dimension::from_code(letter).is_none() {
            return Err(invalid(format!("'{letter}' is not a RIASEC letter")));
        }
    }

    let min_bac_grade = row
        .min_bac_grade
        .as_deref()
        .map(|value| {
            value
                .parse::<u8>()
                .ok()
                .filter(|grade| *grade <= 20)
                .ok_or_else(|| invalid(format!("minimum bac grade '{value}' is not in 0-20")))
        })
        .transpose()?;

    let employment_rate = row
        .employment_rate
        .as_deref()
        .map(|value| {
            value
                .parse::<u8>()
                .ok()
                .filter(|rate| *rate <= 100)
                .ok_or_else(|| invalid(format!("employment rate '{value}' is not in 0-100")))
        })
        .transpose()?;

    let scholarship_available = parser::parse_flag(&row.scholarship_available);

    Ok(ProgramDescriptor {
        id: ProgramId(row.code.clone()),
        code: row.code,
        name: row.name,
        university: row.university,
        level,
        domain: row.domain,
        department: row.department,
        riasec_match,
        min_bac_grade,
        employment_rate,
        registration_fee: row.registration_fee,
        annual_tuition: row.annual_tuition,
        scholarship_available,
        capacity: row.capacity,
        is_active: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "Code,Name,University,Level,Domain,Department,RIASEC Match,Min Bac Grade,Employment Rate,Registration Fee,Annual Tuition,Scholarship Available,Capacity\n";

    #[test]
    fn imports_complete_rows() {
        let csv = format!(
            "{HEADER}INF-L,Licence en Informatique,Université de Bertoua,Licence,Sciences,Informatique,irc,12,80,50000,200000,oui,120\n"
        );
        let programs =
            ProgramCatalogImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(programs.len(), 1);
        let program = &programs[0];
        assert_eq!(program.id, ProgramId("INF-L".to_string()));
        assert_eq!(program.riasec_match, "IRC");
        assert_eq!(program.min_bac_grade, Some(12));
        assert!(program.scholarship_available);
        assert!(program.is_active);
    }

    #[test]
    fn missing_optional_columns_become_none() {
        let csv = format!(
            "{HEADER}DRT-L,Licence en Droit,,Licence,,Droit,ESC,,,25000,150000,,0\n"
        );
        let programs =
            ProgramCatalogImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        let program = &programs[0];
        assert_eq!(program.min_bac_grade, None);
        assert_eq!(program.employment_rate, None);
        assert!(!program.scholarship_available);
    }

    #[test]
    fn rejects_unknown_riasec_letters() {
        let csv = format!(
            "{HEADER}BAD,Programme,Univ,Licence,,Droit,XYZ,,,0,100000,,0\n"
        );
        match ProgramCatalogImporter::from_reader(Cursor::new(csv)) {
            Err(CatalogImportError::InvalidRecord { code, .. }) => assert_eq!(code, "BAD"),
            other => panic!("expected invalid record, got {other:?}"),
        }
    }

    #[test]
    fn rejects_out_of_scale_grades() {
        let csv = format!(
            "{HEADER}BAD,Programme,Univ,Licence,,Droit,IRC,25,,0,100000,,0\n"
        );
        match ProgramCatalogImporter::from_reader(Cursor::new(csv)) {
            Err(CatalogImportError::InvalidRecord { reason, .. }) => {
                assert!(reason.contains("0-20"));
            }
            other => panic!("expected invalid record, got {other:?}"),
        }
    }

    #[test]
    fn from_path_propagates_io_errors() {
        match ProgramCatalogImporter::from_path("./does-not-exist.csv") {
            Err(CatalogImportError::Io(_)) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
