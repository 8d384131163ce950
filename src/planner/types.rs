//! Request, intermediate and output records for the weekly allocation pipeline

use serde::{Deserialize, Serialize};

use super::rules::MAX_WEEKLY_TOTAL;
use crate::error::PlanError;

/// The three inputs to an allocation. Distances are in whatever unit the
/// caller works in; only the rule thresholds assume miles-scale numbers.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PlanRequest {
    /// Total weekly distance to allocate
    pub weekly_total: f64,

    /// Upper bound on Sunday's long run (the 15% floor still wins)
    pub max_long_run: f64,

    /// Upper bound on Wednesday's medium-long run
    pub max_midweek_run: f64,
}

impl PlanRequest {
    pub fn new(weekly_total: f64, max_long_run: f64, max_midweek_run: f64) -> Self {
        Self {
            weekly_total,
            max_long_run,
            max_midweek_run,
        }
    }

    /// Check the preconditions of the allocator.
    ///
    /// A weekly total that rounds to zero is rejected: every split would be
    /// zero and the quality share would be a division by zero.
    pub fn validate(&self) -> Result<(), PlanError> {
        check_field("weekly_total", self.weekly_total, MAX_WEEKLY_TOTAL)?;
        check_field("max_long_run", self.max_long_run, f64::MAX)?;
        check_field("max_midweek_run", self.max_midweek_run, f64::MAX)?;

        if super::reconcile::round_half_up(self.weekly_total) == 0 {
            return Err(PlanError::ZeroWeeklyTotal);
        }
        Ok(())
    }
}

fn check_field(field: &'static str, value: f64, max: f64) -> Result<(), PlanError> {
    if value.is_finite() && (0.0..=max).contains(&value) {
        Ok(())
    } else {
        Err(PlanError::InvalidInput { field, value, max })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Calendar order, Monday first
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn short(self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
            Weekday::Sunday => "Sun",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{}", name)
    }
}

/// Category label of a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum SessionType {
    EasySpeed,
    Workout,
    MedLong,
    EasyHills,
    LongRun,
}

impl std::fmt::Display for SessionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionType::EasySpeed => write!(f, "Easy + Speed"),
            SessionType::Workout => write!(f, "Workout"),
            SessionType::MedLong => write!(f, "Med-Long"),
            SessionType::EasyHills => write!(f, "Easy + Hills"),
            SessionType::LongRun => write!(f, "Long Run"),
        }
    }
}

/// Styling classifier handed through to whatever renders the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Easy,
    Quality,
    Moderate,
    Long,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Easy => write!(f, "easy"),
            Theme::Quality => write!(f, "quality"),
            Theme::Moderate => write!(f, "moderate"),
            Theme::Long => write!(f, "long"),
        }
    }
}

/// One training session within a day
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RunSegment {
    pub name: String,
    pub distance: u64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DayPlan {
    pub day: Weekday,
    pub session_type: SessionType,
    pub theme: Theme,
    pub runs: Vec<RunSegment>,
    pub total: u64,
}

/// A complete week. Only produced by [`super::allocate`], which guarantees
/// that the segments sum to `weekly_total`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WeeklyPlan {
    pub days: Vec<DayPlan>,

    /// The requested total rounded half-up
    pub weekly_total: u64,

    /// Tuesday and Friday run as AM/PM threshold doubles
    pub double_threshold: bool,

    /// Sessions beyond one per day
    pub doubles_count: u32,

    /// Tuesday + Friday day totals
    pub total_quality_distance: u64,

    pub total_aerobic_distance: u64,
}

impl WeeklyPlan {
    pub fn day(&self, day: Weekday) -> &DayPlan {
        &self.days[day.index()]
    }

    /// Number of run segments across the week
    pub fn session_count(&self) -> usize {
        self.days.iter().map(|d| d.runs.len()).sum()
    }

    pub fn distance_sum(&self) -> u64 {
        self.days
            .iter()
            .flat_map(|d| d.runs.iter())
            .map(|r| r.distance)
            .sum()
    }
}

/// Primary distance of a day plus its optional second session.
///
/// For easy days the second session is an AM shakeout that precedes the
/// primary run. For converted quality days it is the PM threshold session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DayVolumes<T> {
    pub primary: T,
    pub secondary: Option<T>,
}

impl<T> DayVolumes<T> {
    pub fn single(primary: T) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    pub fn double(primary: T, secondary: T) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
        }
    }
}

/// Seven days of volumes indexed by [`Weekday`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekVolumes<T> {
    pub days: [DayVolumes<T>; 7],
}

impl<T> WeekVolumes<T> {
    pub fn get(&self, day: Weekday) -> &DayVolumes<T> {
        &self.days[day.index()]
    }

    pub fn get_mut(&mut self, day: Weekday) -> &mut DayVolumes<T> {
        &mut self.days[day.index()]
    }

    /// Every distance in the week, primary before secondary per day
    pub fn iter_distances(&self) -> impl Iterator<Item = &T> {
        self.days
            .iter()
            .flat_map(|d| std::iter::once(&d.primary).chain(d.secondary.iter()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_practical_inputs() {
        assert!(PlanRequest::new(50.0, 16.0, 12.0).validate().is_ok());
        assert!(PlanRequest::new(0.5, 0.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_total() {
        assert_eq!(
            PlanRequest::new(0.0, 12.0, 8.0).validate(),
            Err(PlanError::ZeroWeeklyTotal)
        );
        assert_eq!(
            PlanRequest::new(0.4, 12.0, 8.0).validate(),
            Err(PlanError::ZeroWeeklyTotal)
        );
    }

    #[test]
    fn test_validate_rejects_bad_numbers() {
        let err = PlanRequest::new(f64::NAN, 12.0, 8.0).validate().unwrap_err();
        assert!(matches!(
            err,
            PlanError::InvalidInput {
                field: "weekly_total",
                ..
            }
        ));

        let err = PlanRequest::new(50.0, -1.0, 8.0).validate().unwrap_err();
        assert!(matches!(
            err,
            PlanError::InvalidInput {
                field: "max_long_run",
                ..
            }
        ));

        let err = PlanRequest::new(50.0, 12.0, f64::INFINITY)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            PlanError::InvalidInput {
                field: "max_midweek_run",
                ..
            }
        ));

        assert!(PlanRequest::new(MAX_WEEKLY_TOTAL + 1.0, 12.0, 8.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_weekday_order() {
        for (i, day) in Weekday::ALL.iter().enumerate() {
            assert_eq!(day.index(), i);
        }
        assert_eq!(Weekday::Saturday.to_string(), "Saturday");
        assert_eq!(Weekday::Sunday.short(), "Sun");
    }

    #[test]
    fn test_iter_distances_includes_secondaries() {
        let mut week = WeekVolumes {
            days: [DayVolumes::single(1); 7],
        };
        *week.get_mut(Weekday::Monday) = DayVolumes::double(2, 3);
        let all: Vec<i64> = week.iter_distances().copied().collect();
        assert_eq!(all.len(), 8);
        assert_eq!(&all[..2], &[2, 3]);
    }
}
