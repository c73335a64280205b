//! The tuning loop state machine.
//!
//! One stage at a time: run the external toolchain, read the setup timing
//! report, and either stop (slack in the acceptance band, or a terminal
//! condition) or write an adjusted constraint and rerun. The external
//! toolchain is reached through the [`StageRunner`] trait so the loop can
//! be driven by scripted fakes in tests.

use std::path::PathBuf;

use serde::Serialize;

use tempo_common::{ClockPeriod, StageKind};
use tempo_reports::{read_setup_report, ReportError, SlackReading, Verdict};
use tempo_sdc::ConstraintFile;

use crate::policy::adjust;

/// Lower edge of the slack acceptance band.
///
/// The band is in report units and deliberately not stage-scaled: any
/// non-negative place-and-route slack up to 100 accepts, matching the
/// breakpoint table's calibration.
pub const ACCEPT_MIN_SLACK: f64 = 0.0;

/// Upper edge of the slack acceptance band.
pub const ACCEPT_MAX_SLACK: f64 = 100.0;

/// Whether a stage invocation is the first run or a rerun after a
/// constraint adjustment. Reruns use a distinct external command variant
/// (incremental or clean rebuild).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
    /// First run of the stage.
    Initial,
    /// Rerun after a clock-period adjustment.
    Rerun,
}

/// An external toolchain failure (non-zero exit or spawn failure).
#[derive(Debug, thiserror::Error)]
#[error("external tool failed: {message}")]
pub struct RunnerError {
    /// Description of the failure.
    pub message: String,
}

impl RunnerError {
    /// Creates a new runner error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Invokes the external toolchain for one stage, blocking until it exits.
pub trait StageRunner {
    /// Runs the stage once in the given mode.
    fn run(&mut self, mode: RunMode) -> Result<(), RunnerError>;
}

/// Knobs for the tuning loop.
#[derive(Clone, Copy, Debug)]
pub struct TuneSettings {
    /// Maximum reruns per stage before giving up.
    pub max_iterations: u32,
}

impl Default for TuneSettings {
    fn default() -> Self {
        Self { max_iterations: 25 }
    }
}

/// Everything one stage's tuning loop needs: the stage kind, the current
/// period, and where to write constraints and read the report. Owned by a
/// single [`tune_stage`] call and mutated in place as the period moves.
#[derive(Debug)]
pub struct StageContext {
    /// Which stage is being tuned.
    pub stage: StageKind,
    /// The current clock period; updated on every accepted adjustment.
    pub period: ClockPeriod,
    /// Path of the constraint file the toolchain reads.
    pub constraints_path: PathBuf,
    /// Path of the setup timing report the toolchain writes.
    pub report_path: PathBuf,
}

/// How a stage's tuning loop ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageOutcome {
    /// Setup slack landed in the acceptance band.
    Converged,
    /// The report had no `Path 1` line; period left unchanged.
    ReportMissing,
    /// The report or constraint file could not be accessed.
    ResourceUnavailable,
    /// The external tool exited with a failure.
    ToolFailed,
    /// The iteration budget ran out before convergence.
    MaxIterations,
    /// The policy revisited an earlier period.
    Oscillating,
    /// The next adjustment would have driven the period to zero or below.
    PeriodFloor,
}

impl StageOutcome {
    /// True for outcomes that allow the pipeline to continue to the next
    /// stage with a best-effort period.
    pub fn allows_next_stage(&self) -> bool {
        !matches!(self, StageOutcome::ToolFailed)
    }
}

impl std::fmt::Display for StageOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StageOutcome::Converged => "converged",
            StageOutcome::ReportMissing => "report missing",
            StageOutcome::ResourceUnavailable => "resource unavailable",
            StageOutcome::ToolFailed => "tool failed",
            StageOutcome::MaxIterations => "iteration budget exhausted",
            StageOutcome::Oscillating => "oscillating",
            StageOutcome::PeriodFloor => "period floor reached",
        };
        f.write_str(s)
    }
}

/// The result of tuning one stage.
#[derive(Clone, Debug, Serialize)]
pub struct StageResult {
    /// How the loop ended.
    pub outcome: StageOutcome,
    /// The last known clock period.
    pub period: ClockPeriod,
    /// How many reruns were performed.
    pub iterations: u32,
    /// The last slack reading, if the loop got that far.
    pub final_slack: Option<SlackReading>,
    /// Failure detail for non-convergent outcomes.
    pub detail: Option<String>,
}

/// Internal controller state.
enum TunerState {
    RunStage(RunMode),
    Evaluate,
    Done(StageOutcome),
}

/// Tunes one stage to timing closure.
///
/// Writes the constraint file for the current period, runs the toolchain,
/// evaluates the report, and reruns with an adjusted period until a
/// terminal outcome. Resource failures (unreadable report, unwritable
/// constraints) and tool failures are absorbed into the result with the
/// last known period preserved; a malformed slack value propagates as
/// `Err` and is never defaulted.
pub fn tune_stage<R: StageRunner>(
    runner: &mut R,
    ctx: &mut StageContext,
    settings: &TuneSettings,
) -> Result<StageResult, ReportError> {
    let mut iterations = 0u32;
    let mut visited = vec![ctx.period.ns().to_bits()];
    let mut final_slack: Option<SlackReading> = None;
    let mut detail: Option<String> = None;
    let mut state = TunerState::RunStage(RunMode::Initial);

    let outcome = loop {
        state = match state {
            TunerState::RunStage(mode) => {
                match ConstraintFile::new(ctx.period).write_to(&ctx.constraints_path) {
                    Err(e) => {
                        detail = Some(e.to_string());
                        TunerState::Done(StageOutcome::ResourceUnavailable)
                    }
                    Ok(()) => match runner.run(mode) {
                        Ok(()) => TunerState::Evaluate,
                        Err(e) => {
                            detail = Some(e.message);
                            TunerState::Done(StageOutcome::ToolFailed)
                        }
                    },
                }
            }
            TunerState::Evaluate => match read_setup_report(&ctx.report_path) {
                Err(ReportError::Unreadable(e)) => {
                    detail = Some(e.to_string());
                    TunerState::Done(StageOutcome::ResourceUnavailable)
                }
                Err(e) => return Err(e),
                Ok(None) => TunerState::Done(StageOutcome::ReportMissing),
                Ok(Some(reading)) => {
                    let accepted = reading.verdict == Verdict::Met
                        && (ACCEPT_MIN_SLACK..=ACCEPT_MAX_SLACK).contains(&reading.slack);
                    let next = adjust(ctx.period, reading.slack, ctx.stage);
                    final_slack = Some(reading);

                    if accepted {
                        TunerState::Done(StageOutcome::Converged)
                    } else if !next.is_positive() {
                        TunerState::Done(StageOutcome::PeriodFloor)
                    } else if visited.contains(&next.ns().to_bits()) {
                        TunerState::Done(StageOutcome::Oscillating)
                    } else if iterations >= settings.max_iterations {
                        TunerState::Done(StageOutcome::MaxIterations)
                    } else {
                        iterations += 1;
                        visited.push(next.ns().to_bits());
                        ctx.period = next;
                        TunerState::RunStage(RunMode::Rerun)
                    }
                }
            },
            TunerState::Done(outcome) => break outcome,
        };
    };

    Ok(StageResult {
        outcome,
        period: ctx.period,
        iterations,
        final_slack,
        detail,
    })
}
