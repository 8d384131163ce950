//! Volume allocation: long run, midweek anchor and quality sessions

use tracing::debug;

use super::rules::*;
use super::types::{DayVolumes, PlanRequest};

/// Fixed-day volumes decided before any easy running is placed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeSplit {
    pub weekly_total: f64,
    pub long_run: f64,
    pub midweek: f64,
    /// Per quality day, before warm-up/cool-down overhead
    pub quality_base: f64,
    pub double_threshold: bool,
    /// Primary is the single session or the AM threshold; secondary is the PM threshold
    pub tuesday: DayVolumes<f64>,
    pub friday: DayVolumes<f64>,
}

pub fn split_volume(request: &PlanRequest) -> VolumeSplit {
    let total = request.weekly_total;

    let mut long_run = (total * LONG_RUN_SHARE).min(request.max_long_run);
    let floor = total * LONG_RUN_FLOOR_SHARE;
    if long_run < floor {
        debug!(
            "Long run cap {} is below the {}% floor, raising to {:.2}",
            request.max_long_run,
            LONG_RUN_FLOOR_SHARE * 100.0,
            floor
        );
        long_run = floor;
    }

    let midweek = (total * MIDWEEK_SHARE).min(request.max_midweek_run);

    let quality_base = total * QUALITY_SHARE / 2.0;
    let double_threshold = total >= DOUBLE_THRESHOLD_AT;
    let quality_day = quality_sessions(quality_base, double_threshold);

    let split = VolumeSplit {
        weekly_total: total,
        long_run,
        midweek,
        quality_base,
        double_threshold,
        tuesday: quality_day,
        friday: quality_day,
    };

    debug!(
        "Volume split: long={:.2} midweek={:.2} quality_base={:.2} double_threshold={}",
        split.long_run, split.midweek, split.quality_base, split.double_threshold
    );

    split
}

fn quality_sessions(base: f64, double_threshold: bool) -> DayVolumes<f64> {
    if double_threshold {
        let am = MIN_QUALITY_SESSION.max(base * AM_THRESHOLD_SHARE + QUALITY_OVERHEAD);
        let pm = (MIN_QUALITY_SESSION * PM_MIN_FACTOR)
            .max(base * PM_THRESHOLD_SHARE + QUALITY_OVERHEAD);
        DayVolumes::double(am, pm)
    } else {
        DayVolumes::single(MIN_QUALITY_SESSION.max(base + QUALITY_OVERHEAD))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_long_run_uses_share_under_cap() {
        let split = split_volume(&PlanRequest::new(40.0, 12.0, 8.0));
        assert!(approx(split.long_run, 10.0));
        assert!(approx(split.midweek, 6.0));
    }

    #[test]
    fn test_long_run_cap_applies_above_floor() {
        let split = split_volume(&PlanRequest::new(90.0, 22.0, 14.0));
        assert!(approx(split.long_run, 22.0));
    }

    #[test]
    fn test_long_run_floor_overrides_cap() {
        let split = split_volume(&PlanRequest::new(84.0, 5.0, 3.0));
        assert!(approx(split.long_run, 84.0 * 0.15));
        // Midweek has no floor
        assert!(approx(split.midweek, 3.0));
    }

    #[test]
    fn test_single_quality_session_below_threshold() {
        let split = split_volume(&PlanRequest::new(84.0, 20.0, 12.0));
        assert!(!split.double_threshold);
        assert!(approx(split.tuesday.primary, 8.4 + 4.0));
        assert_eq!(split.tuesday.secondary, None);
        assert_eq!(split.tuesday, split.friday);
    }

    #[test]
    fn test_quality_session_minimum() {
        let split = split_volume(&PlanRequest::new(20.0, 10.0, 10.0));
        assert!(approx(split.tuesday.primary, 8.0));
    }

    #[test]
    fn test_double_threshold_conversion() {
        let split = split_volume(&PlanRequest::new(90.0, 22.0, 14.0));
        assert!(split.double_threshold);
        assert!(approx(split.tuesday.primary, 9.0 * 0.65 + 4.0));
        assert!(approx(split.tuesday.secondary.unwrap(), 9.0 * 0.35 + 4.0));
        assert_eq!(split.tuesday, split.friday);
    }

    #[test]
    fn test_double_threshold_minimums() {
        // Not reachable through the 85 threshold, but the minimums still hold
        let day = quality_sessions(1.0, true);
        assert!(approx(day.primary, 8.0));
        assert!(approx(day.secondary.unwrap(), 6.0));
    }
}
