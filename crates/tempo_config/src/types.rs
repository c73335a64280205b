//! Configuration types deserialized from `tempo.toml`.

use serde::Deserialize;

/// The top-level project configuration parsed from `tempo.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    /// Core project metadata (name, top module).
    pub project: ProjectMeta,
    /// Tuning loop settings (initial period, iteration budget).
    #[serde(default)]
    pub flow: FlowConfig,
    /// Synthesis stage overrides (commands, report path).
    #[serde(default)]
    pub synthesis: StageOverride,
    /// Place-and-route stage overrides (commands, report paths).
    #[serde(default)]
    pub par: StageOverride,
    /// Auxiliary post-route report path overrides.
    #[serde(default)]
    pub reports: ReportsConfig,
}

/// Core project metadata required in every `tempo.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectMeta {
    /// The project name.
    pub name: String,
    /// The top-level module name, used to derive default report paths.
    pub top_module: String,
}

/// Tuning loop settings.
#[derive(Debug, Deserialize)]
pub struct FlowConfig {
    /// Starting clock period for synthesis, in nanoseconds. Must be > 0.
    #[serde(default = "default_initial_period")]
    pub initial_period: f64,
    /// Maximum tuning iterations per stage before giving up. Must be > 0.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
    /// Path of the constraint file the toolchain reads, relative to the
    /// project root.
    #[serde(default = "default_constraints_path")]
    pub constraints: String,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            initial_period: default_initial_period(),
            max_iterations: default_max_iterations(),
            constraints: default_constraints_path(),
        }
    }
}

fn default_initial_period() -> f64 {
    8.0
}

fn default_max_iterations() -> u32 {
    25
}

fn default_constraints_path() -> String {
    "cfg/constraints.tcl".to_string()
}

/// Per-stage overrides. Any field left out falls back to a default derived
/// from the top module name.
#[derive(Debug, Default, Deserialize)]
pub struct StageOverride {
    /// Command for the initial stage run (e.g. `"make syn"`).
    pub run: Option<String>,
    /// Commands for a rerun, executed in order (e.g. `["make clean-build",
    /// "make par"]`).
    pub rerun: Option<Vec<String>>,
    /// Path of the setup timing report, relative to the project root.
    pub report: Option<String>,
    /// Gzipped report files to decompress after each run.
    pub compressed: Option<Vec<String>>,
}

/// Auxiliary post-route report path overrides (display only).
#[derive(Debug, Default, Deserialize)]
pub struct ReportsConfig {
    /// Hold timing report path.
    pub hold: Option<String>,
    /// Area report path.
    pub area: Option<String>,
    /// Power report path.
    pub power: Option<String>,
}
