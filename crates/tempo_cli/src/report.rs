//! `tempo report` — print the post-route report summary.

use tempo_flow::collect_aux_reports;

use crate::project::resolve_project_root;
use crate::{GlobalArgs, ReportArgs, ReportFormat};

/// Runs the `tempo report` command.
///
/// Reads whatever post-route reports exist and prints them; missing
/// reports are simply omitted.
pub fn run(args: &ReportArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project_dir = resolve_project_root(global)?;
    let config = tempo_config::load_config(&project_dir)?;

    let reports = collect_aux_reports(&project_dir, &config);

    match args.format {
        ReportFormat::Text => {
            if reports.hold_slack.is_none() && reports.area.is_none() && reports.power.is_empty() {
                println!("no post-route reports found");
            } else {
                crate::run::print_reports(&reports);
            }
        }
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }

    Ok(0)
}
