//! Fixed heuristic table for the weekly allocation.
//!
//! Shares are fractions of the weekly total; distances are in the caller's
//! unit. None of these are configurable.

/// Long run target share of the week
pub const LONG_RUN_SHARE: f64 = 0.25;

/// Long run floor; wins over the caller's cap
pub const LONG_RUN_FLOOR_SHARE: f64 = 0.15;

/// Medium-long run share, capped by the caller, no floor
pub const MIDWEEK_SHARE: f64 = 0.15;

/// Combined Tuesday + Friday quality share
pub const QUALITY_SHARE: f64 = 0.20;

/// Warm-up plus cool-down carried by every quality session
pub const QUALITY_OVERHEAD: f64 = 4.0;

/// Minimum single quality session (and AM threshold session)
pub const MIN_QUALITY_SESSION: f64 = 8.0;

/// PM threshold session minimum, relative to [`MIN_QUALITY_SESSION`]
pub const PM_MIN_FACTOR: f64 = 0.75;

/// Share of a converted quality day's base done as long reps in the AM
pub const AM_THRESHOLD_SHARE: f64 = 0.65;

/// Share done as short reps in the PM
pub const PM_THRESHOLD_SHARE: f64 = 0.35;

/// Weekly total at which quality days convert to double threshold
pub const DOUBLE_THRESHOLD_AT: f64 = 85.0;

/// Distance of a shakeout added by the threshold table
pub const SHAKEOUT_DISTANCE: f64 = 4.0;

pub const MONDAY_DOUBLE_AT: f64 = 65.0;
pub const THURSDAY_DOUBLE_AT: f64 = 75.0;
/// Only applies when quality days are not already converted
pub const TUESDAY_DOUBLE_AT: f64 = 85.0;
pub const SATURDAY_DOUBLE_AT: f64 = 100.0;

/// Longest single easy run before the excess spills into a shakeout
pub const MAX_SINGLE_EASY_RUN: f64 = 8.0;

/// Sanity bound on the weekly total so integer reconciliation cannot overflow
pub const MAX_WEEKLY_TOTAL: f64 = 1_000_000.0;
