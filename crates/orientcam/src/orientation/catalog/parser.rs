use serde::{Deserialize, Deserializer};
use std::io::Read;

/// Raw catalog row as exported by the registry spreadsheet.
#[derive(Debug, Deserialize)]
pub(crate) struct CatalogRow {
    #[serde(rename = "Code")]
    pub(crate) code: String,
    #[serde(rename = "Name")]
    pub(crate) name: String,
    #[serde(rename = "University", default, deserialize_with = "empty_string_as_none")]
    pub(crate) university: Option<String>,
    #[serde(rename = "Level")]
    pub(crate) level: String,
    #[serde(rename = "Domain", default, deserialize_with = "empty_string_as_none")]
    pub(crate) domain: Option<String>,
    #[serde(rename = "Department")]
    pub(crate) department: String,
    #[serde(rename = "RIASEC Match")]
    pub(crate) riasec_match: String,
    #[serde(
        rename = "Min Bac Grade",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) min_bac_grade: Option<String>,
    #[serde(
        rename = "Employment Rate",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) employment_rate: Option<String>,
    #[serde(rename = "Registration Fee", default)]
    pub(crate) registration_fee: u32,
    #[serde(rename = "Annual Tuition")]
    pub(crate) annual_tuition: u32,
    #[serde(rename = "Scholarship Available", default)]
    pub(crate) scholarship_available: String,
    #[serde(rename = "Capacity", default)]
    pub(crate) capacity: u32,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<CatalogRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader.deserialize::<CatalogRow>().collect()
}

pub(crate) fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "yes" | "oui" | "true" | "1"
    )
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
