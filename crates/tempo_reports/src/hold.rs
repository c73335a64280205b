//! Hold timing report reading (display only).

use std::path::Path;

use crate::error::ReportError;
use crate::slack::extract_slack_text;

/// Extracts the Path 1 hold slack text from a hold timing report.
///
/// Returns the raw slack text including units; hold slack is surfaced for
/// display and never fed back into tuning. `Ok(None)` if the report has no
/// `Path 1` line.
pub fn parse_hold_slack(text: &str) -> Result<Option<String>, ReportError> {
    for line in text.lines() {
        if line.contains("Path 1:") {
            return extract_slack_text(line).map(Some);
        }
    }
    Ok(None)
}

/// Reads and parses a hold timing report from disk.
pub fn read_hold_slack(path: &Path) -> Result<Option<String>, ReportError> {
    let text = std::fs::read_to_string(path)?;
    parse_hold_slack(&text)
}
