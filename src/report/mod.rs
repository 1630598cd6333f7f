// src/report/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::maps::models::ExtractionRecord;
use crate::utils::error::ReportError;

pub struct ReportWriter {
    base_dir: PathBuf,
}

impl ReportWriter {
    /// Creates a new ReportWriter with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, ReportError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(ReportError::Io)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Saves the extraction records as a pretty-printed JSON array
    pub fn save_records(&self, records: &[ExtractionRecord]) -> Result<PathBuf, ReportError> {
        let file_path = self.base_dir.join("extractions.json");

        let body = serde_json::to_string_pretty(records)
            .map_err(|e| ReportError::Serialization(e.to_string()))?;

        fs::write(&file_path, body).map_err(ReportError::Io)?;

        tracing::info!("Saved extraction records to {}", file_path.display());

        Ok(file_path)
    }

    /// Saves metadata about the run (counts and timestamp) in JSON format
    pub fn save_run_metadata(&self, records: &[ExtractionRecord]) -> Result<PathBuf, ReportError> {
        let file_path = self.base_dir.join("extractions_meta.json");

        let success_count = records.iter().filter(|r| r.is_success()).count();
        let metadata = serde_json::json!({
            "url_count": records.len(),
            "success_count": success_count,
            "failure_count": records.len() - success_count,
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| ReportError::Serialization(e.to_string()))?;

        fs::write(&file_path, metadata_str).map_err(ReportError::Io)?;

        tracing::info!("Saved run metadata to {}", file_path.display());

        Ok(file_path)
    }
}
