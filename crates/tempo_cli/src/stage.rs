//! `tempo syn` / `tempo par` — tune a single stage.
//!
//! Useful when one stage already closed timing and only the other needs
//! reruns; `tempo par --period 7.5ns` seeds place-and-route directly.

use tempo_common::{ClockPeriod, StageKind};
use tempo_flow::{run_stage, FlowOptions};
use tempo_tune::StageOutcome;

use crate::project::resolve_project_root;
use crate::{GlobalArgs, ReportFormat, StageArgs};

/// Runs the `tempo syn` or `tempo par` command.
///
/// Returns exit code 0 when the stage converges, 1 otherwise.
pub fn run(
    kind: StageKind,
    args: &StageArgs,
    global: &GlobalArgs,
) -> Result<i32, Box<dyn std::error::Error>> {
    let project_dir = resolve_project_root(global)?;
    let config = tempo_config::load_config(&project_dir)?;

    let period = match &args.period {
        Some(text) => text.parse::<ClockPeriod>()?,
        None => ClockPeriod::from_ns(config.flow.initial_period),
    };
    let opts = FlowOptions {
        initial_period: None,
        max_iterations: args.max_iterations,
        quiet: global.quiet,
    };

    let result = run_stage(&project_dir, &config, kind, period, &opts)?;

    match args.format {
        ReportFormat::Text => crate::run::print_stage(&kind.to_string(), &result),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    Ok(if result.outcome == StageOutcome::Converged {
        0
    } else {
        1
    })
}
