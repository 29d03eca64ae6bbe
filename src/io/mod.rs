pub mod output;
pub mod writers;

use crate::core::BenchReport;
use crate::errors::ReportError;
use std::fs;
use std::path::Path;

/// Load and parse a benchmark document. Parse failures propagate with the
/// offending path attached; there is no empty-report fallback.
pub fn load_report(path: &Path) -> Result<BenchReport, ReportError> {
    let content =
        fs::read_to_string(path).map_err(|source| ReportError::io(path, source))?;
    serde_json::from_str(&content).map_err(|source| ReportError::parse(path, source))
}
