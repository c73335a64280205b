//! Area report reading (display only).

use std::path::Path;

use crate::error::ReportError;

/// Extracts the total area for `top_module` from an area report.
///
/// The report lists one row per module; the row whose first column is the
/// top module name carries the total area in its third column (µm²).
/// Returns `Ok(None)` if no such row exists.
pub fn parse_area_report(text: &str, top_module: &str) -> Result<Option<f64>, ReportError> {
    for line in text.lines() {
        if !line.trim_start().starts_with(top_module) {
            continue;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 3 {
            continue;
        }
        let token = parts[2];
        let area = token.parse().map_err(|_| ReportError::MalformedNumber {
            text: token.to_string(),
        })?;
        return Ok(Some(area));
    }
    Ok(None)
}

/// Reads and parses an area report from disk.
pub fn read_area_report(path: &Path, top_module: &str) -> Result<Option<f64>, ReportError> {
    let text = std::fs::read_to_string(path)?;
    parse_area_report(&text, top_module)
}
