use std::path::PathBuf;

pub fn default_version() -> u32 {
    1
}

pub fn default_unit() -> String {
    "mi".to_string()
}

pub fn default_weekly_total() -> f64 {
    50.0
}

pub fn default_max_long_run() -> f64 {
    16.0
}

pub fn default_max_midweek_run() -> f64 {
    12.0
}

pub fn default_report_dir() -> PathBuf {
    PathBuf::from("reports")
}

pub fn default_true() -> bool {
    true
}
