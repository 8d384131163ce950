use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Label printed after every distance (e.g. "mi", "km")
    #[serde(default = "default_unit")]
    pub unit: String,

    #[serde(default = "default_weekly_total")]
    pub weekly_total: f64,

    #[serde(default = "default_max_long_run")]
    pub max_long_run: f64,

    #[serde(default = "default_max_midweek_run")]
    pub max_midweek_run: f64,

    /// Where `plan --report-dir` and the TUI write reports
    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,

    /// Include advisory notes in rendered plans
    #[serde(default = "default_true")]
    pub notes: bool,
}
