mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use crate::planner::PlanRequest;
use defaults::*;
use std::path::Path;
use tracing::info;

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            unit: default_unit(),
            weekly_total: default_weekly_total(),
            max_long_run: default_max_long_run(),
            max_midweek_run: default_max_midweek_run(),
            report_dir: default_report_dir(),
            notes: default_true(),
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load config if the file exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            info!("Loading config from {:?}", path);
            Self::load(path)
        } else {
            info!("No config found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.unit.trim().is_empty() {
            return Err(ConfigError::EmptyUnit);
        }
        self.request().validate()?;
        Ok(())
    }

    /// The allocation request described by this config
    pub fn request(&self) -> PlanRequest {
        PlanRequest::new(self.weekly_total, self.max_long_run, self.max_midweek_run)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}
