//! Clock-period tuning for timing closure.
//!
//! The heart of the flow: a slack-driven adjustment policy (pure function
//! over breakpoint tables) and a per-stage tuning loop that wraps the
//! external toolchain, rewriting the clock constraint and rerunning until
//! setup slack lands in the acceptance band or a terminal condition is
//! reached (tool failure, iteration budget, oscillation, period floor).

#![warn(missing_docs)]

mod controller;
mod policy;
mod thresholds;

pub use controller::{
    tune_stage, RunMode, RunnerError, StageContext, StageOutcome, StageResult, StageRunner,
    TuneSettings, ACCEPT_MAX_SLACK, ACCEPT_MIN_SLACK,
};
pub use policy::adjust;
pub use thresholds::{AdjustmentThresholds, SYNTHESIS_THRESHOLDS};
