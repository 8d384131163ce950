//! Weekly allocation: a fixed heuristic table turned into a seven-day plan
//!
//! The allocation runs as four pure phases, each producing an immutable
//! intermediate record:
//! 1. `volume`: long run, midweek anchor, quality sessions, double-threshold decision
//! 2. `doubles`: shakeouts from the volume table, easy-day share, single-run overflow
//! 3. `reconcile`: half-up rounding and correction to the exact weekly total
//! 4. `assemble`: labels, descriptions, day totals and aggregate figures
//!
//! Every successful call returns a week whose segments sum to the rounded
//! weekly total. Combinations that would need a negative session are
//! rejected instead.

pub mod assemble;
pub mod doubles;
pub mod reconcile;
pub mod rules;
pub mod types;
pub mod volume;

pub use reconcile::round_half_up;
pub use types::{DayPlan, PlanRequest, RunSegment, SessionType, Theme, WeeklyPlan, Weekday};

use crate::error::PlanError;
use tracing::debug;

/// Allocate a week for the given request
pub fn allocate(request: &PlanRequest) -> Result<WeeklyPlan, PlanError> {
    request.validate()?;

    let split = volume::split_volume(request);
    let draft = doubles::plan_doubles(&split);
    let rounded = reconcile::reconcile(&draft, request.weekly_total)?;
    let plan = assemble::assemble(&rounded);

    debug!(
        "Allocated {} units over {} sessions ({} doubles)",
        plan.weekly_total,
        plan.session_count(),
        plan.doubles_count
    );

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day_totals(plan: &WeeklyPlan) -> Vec<u64> {
        plan.days.iter().map(|d| d.total).collect()
    }

    fn assert_invariants(request: &PlanRequest, plan: &WeeklyPlan) {
        let target = round_half_up(request.weekly_total) as u64;
        assert_eq!(plan.days.len(), 7, "{:?}", request);
        assert_eq!(plan.weekly_total, target, "{:?}", request);
        assert_eq!(plan.distance_sum(), target, "{:?}", request);
        assert_eq!(
            plan.total_quality_distance + plan.total_aerobic_distance,
            target,
            "{:?}",
            request
        );
        assert_eq!(
            7 + plan.doubles_count as usize,
            plan.session_count(),
            "{:?}",
            request
        );
        for (day, expected) in plan.days.iter().zip(Weekday::ALL) {
            assert_eq!(day.day, expected);
            assert!((1..=2).contains(&day.runs.len()), "{:?}", request);
            assert_eq!(
                day.total,
                day.runs.iter().map(|r| r.distance).sum::<u64>()
            );
        }
        let floor = round_half_up(request.weekly_total * 0.15) as u64;
        assert!(
            plan.day(Weekday::Sunday).total >= floor,
            "long run below floor for {:?}",
            request
        );
    }

    #[test]
    fn test_easy_week() {
        let plan = allocate(&PlanRequest::new(40.0, 12.0, 8.0)).unwrap();
        assert_eq!(day_totals(&plan), vec![3, 8, 6, 3, 8, 2, 10]);
        assert_eq!(plan.doubles_count, 0);
        assert_eq!(plan.total_quality_distance, 16);
        assert_eq!(plan.total_aerobic_distance, 24);
        assert!(!plan.double_threshold);
        assert_eq!(plan.session_count(), 7);
    }

    #[test]
    fn test_double_threshold_week() {
        let plan = allocate(&PlanRequest::new(90.0, 22.0, 14.0)).unwrap();
        assert!(plan.double_threshold);
        assert_eq!(day_totals(&plan), vec![8, 17, 14, 8, 17, 4, 22]);
        assert_eq!(plan.doubles_count, 4);
        assert_eq!(plan.total_quality_distance, 34);
        assert_eq!(plan.session_count(), 11);

        let tuesday: Vec<u64> = plan
            .day(Weekday::Tuesday)
            .runs
            .iter()
            .map(|r| r.distance)
            .collect();
        assert_eq!(tuesday, vec![10, 7]);
        assert_eq!(plan.day(Weekday::Monday).runs[0].name, "AM Shakeout");
    }

    #[test]
    fn test_tight_caps_week() {
        let plan = allocate(&PlanRequest::new(84.0, 5.0, 3.0)).unwrap();
        assert!(!plan.double_threshold);
        assert_eq!(day_totals(&plan), vec![16, 12, 3, 16, 12, 12, 13]);
        assert_eq!(plan.doubles_count, 3);

        // Long run floor wins over the 5-unit cap
        assert_eq!(plan.day(Weekday::Sunday).total, 13);
        for day in [Weekday::Monday, Weekday::Thursday, Weekday::Saturday] {
            let runs = &plan.day(day).runs;
            assert_eq!(runs.len(), 2);
            assert_eq!(runs[1].distance, 8);
            assert_eq!(runs[1].name, "PM Easy");
        }
    }

    #[test]
    fn test_zero_total_rejected() {
        assert_eq!(
            allocate(&PlanRequest::new(0.0, 12.0, 8.0)),
            Err(PlanError::ZeroWeeklyTotal)
        );
    }

    #[test]
    fn test_week_too_small_for_quality_minimums() {
        let err = allocate(&PlanRequest::new(10.0, 4.0, 4.0)).unwrap_err();
        assert!(matches!(err, PlanError::Unreconcilable { target: 10, .. }));
    }

    #[test]
    fn test_invariants_across_integer_grid() {
        for total in 27..=200 {
            for long in (0..=40).step_by(2) {
                for mid in (0..=40).step_by(2) {
                    let request = PlanRequest::new(total as f64, long as f64, mid as f64);
                    let plan = allocate(&request)
                        .unwrap_or_else(|e| panic!("{:?} failed: {}", request, e));
                    assert_invariants(&request, &plan);
                }
            }
        }
    }

    #[test]
    fn test_invariants_for_fractional_inputs() {
        for quarter in 120..800 {
            let total = quarter as f64 / 4.0;
            for long in [0.0, 2.5, 9.75, 18.0, 33.3] {
                for mid in [0.0, 4.2, 11.5, 26.0] {
                    let request = PlanRequest::new(total, long, mid);
                    let plan = allocate(&request)
                        .unwrap_or_else(|e| panic!("{:?} failed: {}", request, e));
                    assert_invariants(&request, &plan);
                }
            }
        }
    }

    #[test]
    fn test_huge_caps_are_no_ops() {
        let capped = allocate(&PlanRequest::new(60.0, 1e9, 1e9)).unwrap();
        let uncapped = allocate(&PlanRequest::new(60.0, 15.0, 9.0)).unwrap();
        assert_eq!(capped, uncapped);
    }

    #[test]
    fn test_allocation_is_deterministic() {
        let request = PlanRequest::new(73.0, 18.0, 11.0);
        assert_eq!(allocate(&request), allocate(&request));
    }

    #[test]
    fn test_small_weeks_never_emit_negative_sessions() {
        for total in 1..27 {
            match allocate(&PlanRequest::new(total as f64, 10.0, 10.0)) {
                Ok(plan) => assert_eq!(plan.distance_sum(), total),
                Err(e) => assert!(matches!(e, PlanError::Unreconcilable { .. })),
            }
        }
    }
}
