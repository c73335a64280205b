//! Flow pipeline errors.

use tempo_reports::ReportError;

/// Errors surfaced by the flow pipeline.
///
/// Tool failures and unreadable reports are not errors here; the tuning
/// loop absorbs them into a stage outcome. Only setup failures and
/// malformed reports reach this type.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// Failed to prepare the project directory layout.
    #[error("flow i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A timing report was present but could not be interpreted.
    #[error("report error: {0}")]
    Report(#[from] ReportError),
}
