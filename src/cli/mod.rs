pub mod init;
pub mod plan;
pub mod schema;
pub mod tui;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::Config;
use crate::planner::PlanRequest;

#[derive(Parser)]
#[command(name = "weekplan")]
#[command(
    author,
    version,
    about = "Seven-day running schedule from a weekly total and two run caps"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute and print a weekly plan
    Plan(PlanArgs),

    /// Adjust the inputs interactively and watch the plan update
    Tui(TuiArgs),

    /// Write a default config file
    Init(InitArgs),

    /// Print JSON Schema for config validation
    Schema,
}

/// The three allocation inputs, each overriding the config file
#[derive(Args, Clone, Default)]
pub struct VolumeArgs {
    /// Total weekly distance
    #[arg(short, long, env = "WEEKPLAN_WEEKLY_TOTAL")]
    pub weekly_total: Option<f64>,

    /// Cap on Sunday's long run
    #[arg(long)]
    pub max_long_run: Option<f64>,

    /// Cap on Wednesday's medium-long run
    #[arg(long)]
    pub max_midweek_run: Option<f64>,
}

impl VolumeArgs {
    /// Apply CLI overrides on top of the config values
    pub fn request(&self, config: &Config) -> PlanRequest {
        PlanRequest::new(
            self.weekly_total.unwrap_or(config.weekly_total),
            self.max_long_run.unwrap_or(config.max_long_run),
            self.max_midweek_run.unwrap_or(config.max_midweek_run),
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

#[derive(Parser, Clone)]
pub struct PlanArgs {
    /// Path to config file
    #[arg(short, long, default_value = "weekplan.yaml")]
    pub config: PathBuf,

    #[command(flatten)]
    pub volume: VolumeArgs,

    /// Override the distance unit label
    #[arg(long)]
    pub unit: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Leave out the advisory notes
    #[arg(long)]
    pub no_notes: bool,

    /// Also write Markdown + JSON reports under this directory
    #[arg(long)]
    pub report_dir: Option<PathBuf>,
}

#[derive(Parser, Clone)]
pub struct TuiArgs {
    /// Path to config file
    #[arg(short, long, default_value = "weekplan.yaml")]
    pub config: PathBuf,

    #[command(flatten)]
    pub volume: VolumeArgs,
}

#[derive(Parser, Clone)]
pub struct InitArgs {
    /// Where to write the config
    #[arg(short, long, default_value = "weekplan.yaml")]
    pub config: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
