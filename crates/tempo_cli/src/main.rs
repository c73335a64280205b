//! Tempo CLI — the command-line driver for timing-closure tuning.
//!
//! Provides `tempo run` for the full synthesis + place-and-route flow,
//! `tempo syn` and `tempo par` for tuning a single stage, and
//! `tempo report` for printing the post-route report summary.

#![warn(missing_docs)]

mod project;
mod report;
mod run;
mod stage;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// Tempo — a clock-period tuning driver for timing closure.
#[derive(Parser, Debug)]
#[command(name = "tempo", version, about = "Tempo timing-closure driver")]
pub struct Cli {
    /// Suppress all output except errors and results.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a custom `tempo.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the full flow: synthesis tuning, then place-and-route tuning.
    Run(RunArgs),
    /// Tune the synthesis stage only.
    Syn(StageArgs),
    /// Tune the place-and-route stage only.
    Par(StageArgs),
    /// Print the post-route report summary (hold, area, power).
    Report(ReportArgs),
}

/// Arguments for the `tempo run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Starting clock period (e.g. "8ns"); overrides `flow.initial_period`.
    #[arg(long)]
    pub initial_period: Option<String>,

    /// Iteration budget per stage; overrides `flow.max_iterations`.
    #[arg(long)]
    pub max_iterations: Option<u32>,

    /// Output format for the flow summary.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `tempo syn` and `tempo par` subcommands.
#[derive(Parser, Debug)]
pub struct StageArgs {
    /// Starting clock period (e.g. "8ns"); overrides `flow.initial_period`.
    #[arg(long)]
    pub period: Option<String>,

    /// Iteration budget; overrides `flow.max_iterations`.
    #[arg(long)]
    pub max_iterations: Option<u32>,

    /// Output format for the stage result.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `tempo report` subcommand.
#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Output format for the report summary.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Result output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress progress output.
    pub quiet: bool,
    /// Whether to print verbose information.
    pub verbose: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Run(ref args) => run::run(args, &global),
        Command::Syn(ref args) => stage::run(tempo_common::StageKind::Synthesis, args, &global),
        Command::Par(ref args) => stage::run(tempo_common::StageKind::PlaceAndRoute, args, &global),
        Command::Report(ref args) => report::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
