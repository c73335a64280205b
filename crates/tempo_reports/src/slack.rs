//! Setup timing report parsing.
//!
//! Timing reports contain one summary line per path of the form
//! `Path 1: MET (42.5 ns) ...` or `Path 1: VIOLATED (-120 ps) ...`. Only
//! the first `Path 1` line matters; later lines are ignored.

use std::path::Path;

use serde::Serialize;

use crate::error::ReportError;

/// Whether the path met its setup constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Setup timing met.
    Met,
    /// Setup timing violated.
    Violated,
}

/// A slack value extracted from a timing report.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SlackReading {
    /// The MET/VIOLATED verdict from the report line.
    pub verdict: Verdict,
    /// The numeric slack value, in the report's stage-dependent units.
    pub slack: f64,
    /// The raw slack text including units, for display.
    pub raw: String,
}

/// Parses the full text of a setup timing report.
///
/// Scans lines in order for the first containing `Path 1: MET` or
/// `Path 1: VIOLATED` and extracts the slack from the first parenthesized
/// group on that line. Returns `Ok(None)` if no such line exists; absent
/// timing information is a distinct terminal outcome, not an error.
pub fn parse_setup_report(text: &str) -> Result<Option<SlackReading>, ReportError> {
    for line in text.lines() {
        let verdict = if line.contains("Path 1: MET") {
            Verdict::Met
        } else if line.contains("Path 1: VIOLATED") {
            Verdict::Violated
        } else {
            continue;
        };
        let raw = extract_slack_text(line)?;
        let slack = parse_leading_number(&raw)?;
        return Ok(Some(SlackReading {
            verdict,
            slack,
            raw,
        }));
    }
    Ok(None)
}

/// Reads and parses a setup timing report from disk.
pub fn read_setup_report(path: &Path) -> Result<Option<SlackReading>, ReportError> {
    let text = std::fs::read_to_string(path)?;
    parse_setup_report(&text)
}

/// Extracts the trimmed text between the first `(` and the first `)`.
pub(crate) fn extract_slack_text(line: &str) -> Result<String, ReportError> {
    let malformed = || ReportError::MalformedLine {
        line: line.to_string(),
    };
    let start = line.find('(').ok_or_else(malformed)?;
    let end = line.find(')').ok_or_else(malformed)?;
    if end <= start {
        return Err(malformed());
    }
    Ok(line[start + 1..end].trim().to_string())
}

/// Parses the leading whitespace-delimited token of `text` as a number.
pub(crate) fn parse_leading_number(text: &str) -> Result<f64, ReportError> {
    let token = text.split_whitespace().next().unwrap_or("");
    token.parse().map_err(|_| ReportError::MalformedNumber {
        text: token.to_string(),
    })
}
