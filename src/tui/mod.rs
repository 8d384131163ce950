//! TUI module for weekplan
//!
//! Interactive version of the `plan` command:
//! - Three slider inputs (weekly total, long run cap, midweek cap)
//! - The seven day cards, recomputed on every change
//! - Statistics and advisory notes for the current week

mod app;
mod views;
mod widgets;

pub use app::{run_tui, TuiConfig};
