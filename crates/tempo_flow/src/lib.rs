//! Flow orchestration: stage command execution and the two-stage pipeline.
//!
//! [`MakeRunner`] invokes the configured toolchain commands and unpacks
//! gzipped reports; [`run_flow`] chains synthesis tuning, place-and-route
//! tuning, and post-route report collection into one run.

#![warn(missing_docs)]

mod error;
mod pipeline;
mod runner;

pub use error::FlowError;
pub use pipeline::{
    collect_aux_reports, run_flow, run_stage, AuxReports, FlowOptions, FlowSummary,
};
pub use runner::MakeRunner;
