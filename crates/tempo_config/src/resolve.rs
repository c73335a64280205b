//! Stage resolution: merging per-stage overrides with top-module-derived
//! defaults.

use crate::types::ProjectConfig;
use tempo_common::StageKind;

/// A fully-resolved stage: commands and report paths with all defaults
/// applied. Paths are relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStage {
    /// Which stage this is.
    pub kind: StageKind,
    /// Command for the initial run.
    pub run: String,
    /// Commands for a rerun, executed in order.
    pub rerun: Vec<String>,
    /// Setup timing report path.
    pub report: String,
    /// Gzipped reports to decompress after each run.
    pub compressed: Vec<String>,
}

/// Auxiliary post-route report paths, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuxReportPaths {
    /// Hold timing report.
    pub hold: String,
    /// Area report.
    pub area: String,
    /// Power report.
    pub power: String,
}

/// Resolves the commands and report paths for a stage.
///
/// Defaults match a Hammer-style `make` project: `make syn`/`make redo-syn`
/// for synthesis and `make par` (rerun preceded by `make clean-build`) for
/// place-and-route, with report paths derived from the top module name.
pub fn resolve_stage(config: &ProjectConfig, kind: StageKind) -> ResolvedStage {
    let top = &config.project.top_module;
    let over = match kind {
        StageKind::Synthesis => &config.synthesis,
        StageKind::PlaceAndRoute => &config.par,
    };

    let (run, rerun, report, compressed) = match kind {
        StageKind::Synthesis => (
            "make syn".to_string(),
            vec!["make redo-syn".to_string()],
            "build/syn-rundir/reports/final_time_ss_100C_1v60.setup_view.rpt".to_string(),
            Vec::new(),
        ),
        StageKind::PlaceAndRoute => {
            let report = par_setup_report(top);
            let compressed = vec![
                format!("{report}.gz"),
                format!("{}.gz", par_hold_report(top)),
            ];
            (
                "make par".to_string(),
                vec!["make clean-build".to_string(), "make par".to_string()],
                report,
                compressed,
            )
        }
    };

    ResolvedStage {
        kind,
        run: over.run.clone().unwrap_or(run),
        rerun: over.rerun.clone().unwrap_or(rerun),
        report: over.report.clone().unwrap_or(report),
        compressed: over.compressed.clone().unwrap_or(compressed),
    }
}

/// Resolves the auxiliary post-route report paths.
pub fn resolve_aux_reports(config: &ProjectConfig) -> AuxReportPaths {
    let top = &config.project.top_module;
    AuxReportPaths {
        hold: config
            .reports
            .hold
            .clone()
            .unwrap_or_else(|| par_hold_report(top)),
        area: config
            .reports
            .area
            .clone()
            .unwrap_or_else(|| format!("build/par-rundir/{top}_area.rpt")),
        power: config
            .reports
            .power
            .clone()
            .unwrap_or_else(|| format!("build/par-rundir/{top}_power.rpt")),
    }
}

fn par_setup_report(top: &str) -> String {
    format!("build/par-rundir/timingReports/{top}_postRoute_all.tarpt")
}

fn par_hold_report(top: &str) -> String {
    format!("build/par-rundir/timingReports/{top}_postRoute_all_hold.tarpt")
}
