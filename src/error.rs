use std::path::PathBuf;
use thiserror::Error;

use crate::planner::Weekday;

/// Any failure of a plan-producing operation
#[derive(Error, Debug)]
pub enum WeekplanError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Plan error: {0}")]
    Plan(#[from] PlanError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Distance unit label must not be empty")]
    EmptyUnit,

    #[error("Invalid plan inputs: {0}")]
    Request(#[from] PlanError),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    #[error("{field} must be a finite number between 0 and {max} (got {value})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        max: f64,
    },

    #[error("Weekly total must be greater than zero")]
    ZeroWeeklyTotal,

    #[error(
        "Cannot reconcile a {target}-unit week: {day} would be left with {distance} units \
         (the fixed quality sessions need more volume than the week provides)"
    )]
    Unreconcilable {
        target: i64,
        day: Weekday,
        distance: i64,
    },
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create output directory: {0}")]
    CreateDir(std::io::Error),

    #[error("Failed to write report: {0}")]
    WriteReport(std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
