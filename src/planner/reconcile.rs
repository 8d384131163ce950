//! Integer rounding and exact-total correction

use tracing::{debug, warn};

use super::doubles::WeekDraft;
use super::types::{DayVolumes, WeekVolumes, Weekday};
use crate::error::PlanError;

/// Week with every session rounded and the total corrected
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedWeek {
    pub volumes: WeekVolumes<u64>,
    pub weekly_total: u64,
    pub double_threshold: bool,
    pub doubles_count: u32,
}

/// Round to the nearest integer, halves towards positive infinity
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

pub fn reconcile(draft: &WeekDraft, weekly_total: f64) -> Result<RoundedWeek, PlanError> {
    let target = round_half_up(weekly_total);

    let mut rounded = WeekVolumes {
        days: draft.volumes.days.map(|day| DayVolumes {
            primary: round_half_up(day.primary),
            secondary: day.secondary.map(round_half_up),
        }),
    };

    let assigned: i64 = rounded.iter_distances().sum();
    let diff = target - assigned;

    if diff != 0 {
        debug!("Rounding left {} units unassigned, correcting Saturday", diff);
        let saturday = &mut rounded.get_mut(Weekday::Saturday).primary;
        *saturday += diff;

        if *saturday < 0 {
            let remainder = *saturday;
            *saturday = 0;
            warn!(
                "Saturday cannot absorb the correction, moving {} onto Monday",
                remainder
            );
            rounded.get_mut(Weekday::Monday).primary += remainder;
        }
    }

    let volumes = to_unsigned(&rounded, target)?;

    Ok(RoundedWeek {
        volumes,
        weekly_total: target as u64,
        double_threshold: draft.double_threshold,
        doubles_count: draft.doubles_count,
    })
}

/// Reject any session the two-step correction could not bring back to zero
fn to_unsigned(week: &WeekVolumes<i64>, target: i64) -> Result<WeekVolumes<u64>, PlanError> {
    let mut out = WeekVolumes {
        days: [DayVolumes::single(0u64); 7],
    };

    for day in Weekday::ALL {
        let volumes = week.get(day);
        let convert = |distance: i64| {
            u64::try_from(distance).map_err(|_| PlanError::Unreconcilable {
                target,
                day,
                distance,
            })
        };
        *out.get_mut(day) = DayVolumes {
            primary: convert(volumes.primary)?,
            secondary: volumes.secondary.map(convert).transpose()?,
        };
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(days: [DayVolumes<f64>; 7]) -> WeekDraft {
        WeekDraft {
            volumes: WeekVolumes { days },
            double_threshold: false,
            doubles_count: days.iter().filter(|d| d.secondary.is_some()).count() as u32,
        }
    }

    fn flat(week: &RoundedWeek) -> Vec<u64> {
        week.volumes.iter_distances().copied().collect()
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(13.5), 14);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
    }

    #[test]
    fn test_no_correction_when_rounding_balances() {
        let week = reconcile(&draft([DayVolumes::single(5.0); 7]), 35.0).unwrap();
        assert_eq!(flat(&week), vec![5; 7]);
        assert_eq!(week.weekly_total, 35);
    }

    #[test]
    fn test_surplus_is_taken_from_saturday() {
        let third = 8.0 / 3.0;
        let days = [
            DayVolumes::single(third),
            DayVolumes::single(8.0),
            DayVolumes::single(6.0),
            DayVolumes::single(third),
            DayVolumes::single(8.0),
            DayVolumes::single(third),
            DayVolumes::single(10.0),
        ];
        let week = reconcile(&draft(days), 40.0).unwrap();
        assert_eq!(flat(&week), vec![3, 8, 6, 3, 8, 2, 10]);
    }

    #[test]
    fn test_saturday_correction_targets_primary_not_shakeout() {
        let mut days = [DayVolumes::single(1.0); 7];
        days[Weekday::Saturday.index()] = DayVolumes::double(2.4, 4.0);
        let week = reconcile(&draft(days), 13.0).unwrap();
        let saturday = week.volumes.get(Weekday::Saturday);
        assert_eq!(saturday.secondary, Some(4));
        assert_eq!(saturday.primary, 3);
    }

    #[test]
    fn test_negative_remainder_moves_to_monday() {
        let mut days = [DayVolumes::single(2.0); 7];
        days[Weekday::Saturday.index()] = DayVolumes::single(1.0);
        // Rounded sum 13, target 10: Saturday absorbs 1, Monday the other 2
        let week = reconcile(&draft(days), 10.0).unwrap();
        assert_eq!(week.volumes.get(Weekday::Saturday).primary, 0);
        assert_eq!(week.volumes.get(Weekday::Monday).primary, 0);
        assert_eq!(flat(&week).iter().sum::<u64>(), 10);
    }

    #[test]
    fn test_unabsorbable_correction_is_rejected() {
        let days = [
            DayVolumes::single(-3.3),
            DayVolumes::single(8.0),
            DayVolumes::single(1.5),
            DayVolumes::single(-3.3),
            DayVolumes::single(8.0),
            DayVolumes::single(-3.3),
            DayVolumes::single(2.5),
        ];
        let err = reconcile(&draft(days), 10.0).unwrap_err();
        assert!(matches!(
            err,
            PlanError::Unreconcilable {
                target: 10,
                day: Weekday::Monday,
                ..
            }
        ));
    }
}
