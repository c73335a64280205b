//! Project configuration for the tempo flow driver.
//!
//! Loads and validates `tempo.toml`: project metadata, the initial clock
//! period and iteration budget, and per-stage tool commands and report
//! paths. Everything beyond the project name and top module has defaults
//! matching a Hammer-style `make` project.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use resolve::{resolve_aux_reports, resolve_stage, AuxReportPaths, ResolvedStage};
pub use types::{FlowConfig, ProjectConfig, ProjectMeta, ReportsConfig, StageOverride};
