use serde::{Deserialize, Serialize};

use crate::planner::{round_half_up, WeeklyPlan};

/// Aggregate figures shown alongside a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanStats {
    pub weekly_total: u64,
    pub quality_distance: u64,
    pub aerobic_distance: u64,
    /// Share of the week run as Tuesday/Friday quality, rounded half-up
    pub quality_percentage: u32,
    pub aerobic_percentage: u32,
    /// Runs per week
    pub session_frequency: u32,
    pub double_threshold: bool,
}

impl PlanStats {
    pub fn from_plan(plan: &WeeklyPlan) -> Self {
        // A WeeklyPlan always has a non-zero total
        let share = plan.total_quality_distance as f64 / plan.weekly_total as f64 * 100.0;
        let quality_percentage = round_half_up(share).clamp(0, 100) as u32;

        Self {
            weekly_total: plan.weekly_total,
            quality_distance: plan.total_quality_distance,
            aerobic_distance: plan.total_aerobic_distance,
            quality_percentage,
            aerobic_percentage: 100 - quality_percentage,
            session_frequency: 7 + plan.doubles_count,
            double_threshold: plan.double_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{allocate, PlanRequest};

    fn stats(total: f64, long: f64, mid: f64) -> PlanStats {
        PlanStats::from_plan(&allocate(&PlanRequest::new(total, long, mid)).unwrap())
    }

    #[test]
    fn test_easy_week_shares() {
        let stats = stats(40.0, 12.0, 8.0);
        assert_eq!(stats.quality_percentage, 40);
        assert_eq!(stats.aerobic_percentage, 60);
        assert_eq!(stats.session_frequency, 7);
        assert_eq!(stats.quality_distance, 16);
    }

    #[test]
    fn test_double_threshold_week_shares() {
        let stats = stats(90.0, 22.0, 14.0);
        assert_eq!(stats.quality_percentage, 38);
        assert_eq!(stats.aerobic_percentage, 62);
        assert_eq!(stats.session_frequency, 11);
        assert!(stats.double_threshold);
    }

    #[test]
    fn test_frequency_matches_session_count() {
        for total in [30.0, 66.0, 84.0, 120.0, 180.0] {
            let plan = allocate(&PlanRequest::new(total, 20.0, 14.0)).unwrap();
            let stats = PlanStats::from_plan(&plan);
            assert_eq!(stats.session_frequency as usize, plan.session_count());
            assert_eq!(stats.quality_percentage + stats.aerobic_percentage, 100);
        }
    }
}
