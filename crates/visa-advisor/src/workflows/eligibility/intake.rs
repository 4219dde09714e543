use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::domain::RawProfile;

#[derive(Debug, thiserror::Error)]
pub enum ProfileImportError {
    #[error("failed to read applicant export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid applicant CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid applicant JSON document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loads applicant field maps from CSV exports (header row names the form fields) or from a
/// single flat JSON object.
pub struct ProfileImporter;

impl ProfileImporter {
    pub fn json_from_path<P: AsRef<Path>>(path: P) -> Result<RawProfile, ProfileImportError> {
        let file = File::open(path)?;
        Self::json_from_reader(file)
    }

    pub fn json_from_reader<R: Read>(reader: R) -> Result<RawProfile, ProfileImportError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RawProfile>, ProfileImportError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<RawProfile>, ProfileImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);
        let mut profiles = Vec::new();

        for record in csv_reader.deserialize::<BTreeMap<String, String>>() {
            let row = record?;
            // Blank cells behave like omitted form fields.
            let fields = row.into_iter().filter(|(_, value)| !value.is_empty());
            profiles.push(RawProfile::from_pairs(fields));
        }

        Ok(profiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn blank_cells_are_left_out() {
        let csv = "client_name,bank_balance,trip_duration_days\nSara,80000,\n";
        let profiles = ProfileImporter::from_reader(Cursor::new(csv)).expect("csv parses");

        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].get("client_name"), Some("Sara"));
        assert_eq!(profiles[0].get("trip_duration_days"), None);
    }

    #[test]
    fn json_documents_must_be_flat_objects() {
        let profile = ProfileImporter::json_from_reader(Cursor::new(r#"{"age": 41}"#))
            .expect("object parses");
        assert_eq!(profile.get("age"), Some("41"));

        let result = ProfileImporter::json_from_reader(Cursor::new("[1, 2]"));
        assert!(matches!(result, Err(ProfileImportError::Json(_))));
    }

    #[test]
    fn missing_file_reports_io_error() {
        let result = ProfileImporter::from_path("/nonexistent/applicants.csv");
        assert!(matches!(result, Err(ProfileImportError::Io(_))));
    }
}
