//! TUI command - launches the interactive terminal UI

use anyhow::Result;

use super::TuiArgs;
use crate::config::Config;
use crate::error::WeekplanError;
use crate::tui::{run_tui, TuiConfig};

pub fn execute(args: TuiArgs) -> Result<()> {
    let config = tui_config(&args)?;
    run_tui(config)
}

/// Resolve the starting state. The config file must be valid; flag
/// overrides are not checked here since the TUI shows allocation errors live.
fn tui_config(args: &TuiArgs) -> Result<TuiConfig, WeekplanError> {
    let config = Config::load_or_default(&args.config)?;
    config.validate()?;

    Ok(TuiConfig {
        request: args.volume.request(&config),
        unit: config.unit,
        report_dir: config.report_dir,
        notes: config.notes,
    })
}
