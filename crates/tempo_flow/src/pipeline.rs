//! The two-stage flow: tune synthesis, tune place-and-route, collect
//! post-route reports.

use std::path::Path;

use serde::Serialize;

use tempo_common::{ClockPeriod, StageKind};
use tempo_config::{resolve_aux_reports, resolve_stage, ProjectConfig};
use tempo_reports::{read_area_report, read_hold_slack, read_power_report, PowerReport};
use tempo_tune::{tune_stage, StageContext, StageResult, TuneSettings};

use crate::error::FlowError;
use crate::runner::MakeRunner;

/// Overrides applied on top of the project configuration for one flow run.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlowOptions {
    /// Starting clock period; defaults to `flow.initial_period`.
    pub initial_period: Option<ClockPeriod>,
    /// Iteration budget per stage; defaults to `flow.max_iterations`.
    pub max_iterations: Option<u32>,
    /// Suppress progress output on stderr.
    pub quiet: bool,
}

/// Post-route report values, collected best-effort for display.
///
/// A missing or unreadable report leaves its field empty; these values
/// never feed back into tuning, so absence is not an error.
#[derive(Clone, Debug, Serialize)]
pub struct AuxReports {
    /// Raw hold slack text from the post-route hold report.
    pub hold_slack: Option<String>,
    /// Total area of the top module (µm²).
    pub area: Option<f64>,
    /// Power summary lines.
    pub power: PowerReport,
}

/// The result of a full flow run.
#[derive(Clone, Debug, Serialize)]
pub struct FlowSummary {
    /// Synthesis tuning result.
    pub synthesis: StageResult,
    /// Place-and-route tuning result; absent when synthesis's tool failed.
    pub par: Option<StageResult>,
    /// Post-route reports; absent when place-and-route's tool failed.
    pub reports: Option<AuxReports>,
}

impl FlowSummary {
    /// The final clock period the flow settled on.
    pub fn final_period(&self) -> ClockPeriod {
        self.par
            .as_ref()
            .map(|r| r.period)
            .unwrap_or(self.synthesis.period)
    }
}

/// Tunes a single stage to timing closure.
///
/// Resolves the stage's commands and report paths, prepares the constraint
/// directory, and drives the tuning loop against the external toolchain.
pub fn run_stage(
    project_dir: &Path,
    config: &ProjectConfig,
    kind: StageKind,
    period: ClockPeriod,
    opts: &FlowOptions,
) -> Result<StageResult, FlowError> {
    let stage = resolve_stage(config, kind);
    let constraints_path = project_dir.join(&config.flow.constraints);
    if let Some(parent) = constraints_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut ctx = StageContext {
        stage: kind,
        period,
        constraints_path,
        report_path: project_dir.join(&stage.report),
    };
    let settings = TuneSettings {
        max_iterations: opts.max_iterations.unwrap_or(config.flow.max_iterations),
    };
    let mut runner = MakeRunner::new(project_dir, &stage, opts.quiet);

    if !opts.quiet {
        eprintln!("{kind}: tuning from {period}");
    }
    let result = tune_stage(&mut runner, &mut ctx, &settings)?;
    if !opts.quiet {
        eprintln!(
            "{kind}: {} at {} after {} rerun(s)",
            result.outcome, result.period, result.iterations
        );
    }
    Ok(result)
}

/// Runs the full flow: synthesis tuning, then place-and-route tuning seeded
/// with the synthesis period, then post-route report collection.
///
/// A synthesis tool failure stops the flow; every other synthesis outcome
/// carries its best-effort period into place-and-route.
pub fn run_flow(
    project_dir: &Path,
    config: &ProjectConfig,
    opts: &FlowOptions,
) -> Result<FlowSummary, FlowError> {
    let start = opts
        .initial_period
        .unwrap_or(ClockPeriod::from_ns(config.flow.initial_period));

    let synthesis = run_stage(project_dir, config, StageKind::Synthesis, start, opts)?;
    if !synthesis.outcome.allows_next_stage() {
        return Ok(FlowSummary {
            synthesis,
            par: None,
            reports: None,
        });
    }

    let par = run_stage(
        project_dir,
        config,
        StageKind::PlaceAndRoute,
        synthesis.period,
        opts,
    )?;
    let reports = par
        .outcome
        .allows_next_stage()
        .then(|| collect_aux_reports(project_dir, config));

    Ok(FlowSummary {
        synthesis,
        par: Some(par),
        reports,
    })
}

/// Collects the post-route hold, area, and power reports.
pub fn collect_aux_reports(project_dir: &Path, config: &ProjectConfig) -> AuxReports {
    let paths = resolve_aux_reports(config);
    AuxReports {
        hold_slack: read_hold_slack(&project_dir.join(&paths.hold))
            .ok()
            .flatten(),
        area: read_area_report(
            &project_dir.join(&paths.area),
            &config.project.top_module,
        )
        .ok()
        .flatten(),
        power: read_power_report(&project_dir.join(&paths.power)).unwrap_or_default(),
    }
}
