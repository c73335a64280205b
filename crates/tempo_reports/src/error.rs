//! Error types for report parsing.

/// Errors that can occur while reading or parsing a toolchain report.
///
/// A report with no matching line at all is *not* an error; parsers return
/// `Ok(None)` for that case so callers can treat "information absent" as a
/// distinct terminal outcome.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The report file could not be opened or read.
    #[error("failed to read report: {0}")]
    Unreadable(#[from] std::io::Error),

    /// A matching timing line had no parenthesized slack field.
    #[error("timing line has no parenthesized slack field: `{line}`")]
    MalformedLine {
        /// The offending line.
        line: String,
    },

    /// The extracted value text did not parse as a number.
    #[error("report value `{text}` is not a number")]
    MalformedNumber {
        /// The text that failed to parse.
        text: String,
    },
}
