//! Power report reading (display only).

use std::path::Path;

use serde::Serialize;

use crate::error::ReportError;

/// Power metrics collected from a post-route power report.
///
/// Values are kept as the raw text after the colon (tool units vary);
/// they are surfaced for display only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PowerReport {
    /// Total internal power.
    pub internal: Option<String>,
    /// Total switching power.
    pub switching: Option<String>,
    /// Total leakage power.
    pub leakage: Option<String>,
    /// Total power (mW).
    pub total: Option<String>,
}

impl PowerReport {
    /// Returns true if no power lines were found at all.
    pub fn is_empty(&self) -> bool {
        self.internal.is_none()
            && self.switching.is_none()
            && self.leakage.is_none()
            && self.total.is_none()
    }
}

/// Parses a power report, collecting the `Total ... Power:` summary lines.
///
/// The scan stops after `Total Power:`, which the tool prints last.
pub fn parse_power_report(text: &str) -> PowerReport {
    let mut report = PowerReport::default();
    for line in text.lines() {
        if let Some(value) = value_after_colon(line, "Total Internal Power:") {
            report.internal = Some(value);
        } else if let Some(value) = value_after_colon(line, "Total Switching Power:") {
            report.switching = Some(value);
        } else if let Some(value) = value_after_colon(line, "Total Leakage Power:") {
            report.leakage = Some(value);
        } else if let Some(value) = value_after_colon(line, "Total Power:") {
            report.total = Some(value);
            break;
        }
    }
    report
}

/// Reads and parses a power report from disk.
pub fn read_power_report(path: &Path) -> Result<PowerReport, ReportError> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_power_report(&text))
}

/// If `line` contains `label`, returns the trimmed text after the label's colon.
fn value_after_colon(line: &str, label: &str) -> Option<String> {
    line.contains(label)
        .then(|| line.split(':').nth(1).unwrap_or("").trim().to_string())
}
