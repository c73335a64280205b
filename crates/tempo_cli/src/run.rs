//! `tempo run` — the full timing-closure flow.
//!
//! Loads `tempo.toml`, tunes synthesis from the initial period, tunes
//! place-and-route from the synthesis result, collects the post-route
//! reports, and prints a summary.

use tempo_common::ClockPeriod;
use tempo_flow::{run_flow, AuxReports, FlowOptions, FlowSummary};
use tempo_tune::{StageOutcome, StageResult};

use crate::project::resolve_project_root;
use crate::{GlobalArgs, ReportFormat, RunArgs};

/// Runs the `tempo run` command.
///
/// Returns exit code 0 when both stages converge, 1 otherwise.
pub fn run(args: &RunArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project_dir = resolve_project_root(global)?;
    let config = tempo_config::load_config(&project_dir)?;

    if !global.quiet {
        eprintln!(
            "   Tuning {} (top module {})",
            config.project.name, config.project.top_module
        );
    }

    let initial_period = args
        .initial_period
        .as_deref()
        .map(str::parse::<ClockPeriod>)
        .transpose()?;
    let opts = FlowOptions {
        initial_period,
        max_iterations: args.max_iterations,
        quiet: global.quiet,
    };

    let summary = run_flow(&project_dir, &config, &opts)?;

    match args.format {
        ReportFormat::Text => print_summary(&summary),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    let converged = summary.synthesis.outcome == StageOutcome::Converged
        && summary
            .par
            .as_ref()
            .is_some_and(|r| r.outcome == StageOutcome::Converged);
    Ok(if converged { 0 } else { 1 })
}

/// Prints the human-readable flow summary to stdout.
fn print_summary(summary: &FlowSummary) {
    print_stage("Synthesis", &summary.synthesis);
    match &summary.par {
        Some(result) => print_stage("Place-and-Route", result),
        None => println!("Place-and-Route: skipped"),
    }

    let period = summary.final_period();
    println!("Final period: {period} ({:.2} MHz)", period.frequency_mhz());

    if let Some(reports) = &summary.reports {
        print_reports(reports);
    }
}

pub(crate) fn print_stage(name: &str, result: &StageResult) {
    println!(
        "{name}: {} at {} after {} rerun(s)",
        result.outcome, result.period, result.iterations
    );
    if let Some(reading) = &result.final_slack {
        println!("  setup slack: {}", reading.raw);
    }
    if let Some(detail) = &result.detail {
        println!("  {detail}");
    }
}

pub(crate) fn print_reports(reports: &AuxReports) {
    if let Some(hold) = &reports.hold_slack {
        println!("Hold slack: {hold}");
    }
    if let Some(area) = reports.area {
        println!("Area: {area} um^2");
    }
    if let Some(total) = &reports.power.total {
        println!("Total power: {total} mW");
    }
}
