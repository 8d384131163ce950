//! Secondary sessions: the weekly-volume doubles table, easy-day share and
//! single-run overflow.

use tracing::debug;

use super::rules::*;
use super::types::{DayVolumes, WeekVolumes, Weekday};
use super::volume::VolumeSplit;

/// Unrounded week with every session placed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekDraft {
    pub volumes: WeekVolumes<f64>,
    pub double_threshold: bool,
    pub doubles_count: u32,
}

const EASY_DAYS: [Weekday; 3] = [Weekday::Monday, Weekday::Thursday, Weekday::Saturday];

/// Shakeouts granted by the threshold table, in table order
fn table_shakeouts(total: f64, double_threshold: bool) -> [(Weekday, bool); 4] {
    [
        (Weekday::Monday, total >= MONDAY_DOUBLE_AT),
        (Weekday::Thursday, total >= THURSDAY_DOUBLE_AT),
        (
            Weekday::Tuesday,
            total >= TUESDAY_DOUBLE_AT && !double_threshold,
        ),
        (Weekday::Saturday, total >= SATURDAY_DOUBLE_AT),
    ]
}

pub fn plan_doubles(split: &VolumeSplit) -> WeekDraft {
    let mut doubles_count = 0;
    let mut shakeouts = [None::<f64>; 7];

    for (day, granted) in table_shakeouts(split.weekly_total, split.double_threshold) {
        if granted {
            shakeouts[day.index()] = Some(SHAKEOUT_DISTANCE);
            doubles_count += 1;
        }
    }

    if split.double_threshold {
        // PM threshold sessions on Tuesday and Friday
        doubles_count += 2;
    }

    // Subtraction order is fixed so results are reproducible to the last bit
    let mut remaining = split.weekly_total - split.long_run - split.midweek;
    for quality in [&split.tuesday, &split.friday] {
        remaining -= quality.primary;
        remaining -= quality.secondary.unwrap_or(0.0);
    }
    for day in [
        Weekday::Monday,
        Weekday::Thursday,
        Weekday::Tuesday,
        Weekday::Saturday,
    ] {
        remaining -= shakeouts[day.index()].unwrap_or(0.0);
    }

    let easy_share = remaining / 3.0;
    debug!(
        "Remaining easy volume {:.2} ({:.2} per easy day), {} table doubles",
        remaining, easy_share, doubles_count
    );

    let mut volumes = WeekVolumes {
        days: [DayVolumes::single(0.0); 7],
    };
    *volumes.get_mut(Weekday::Tuesday) =
        quality_day(split.tuesday, shakeouts[Weekday::Tuesday.index()]);
    *volumes.get_mut(Weekday::Wednesday) = DayVolumes::single(split.midweek);
    *volumes.get_mut(Weekday::Friday) = split.friday;
    *volumes.get_mut(Weekday::Sunday) = DayVolumes::single(split.long_run);

    for day in EASY_DAYS {
        let (easy, shakeout) = cap_single_run(easy_share, shakeouts[day.index()]);
        if shakeout.is_some() && shakeouts[day.index()].is_none() {
            debug!(
                "{} easy run exceeds {} units, adding a shakeout",
                day, MAX_SINGLE_EASY_RUN
            );
            doubles_count += 1;
        }
        *volumes.get_mut(day) = DayVolumes {
            primary: easy,
            secondary: shakeout,
        };
    }

    WeekDraft {
        volumes,
        double_threshold: split.double_threshold,
        doubles_count,
    }
}

/// A converted quality day already carries its PM session; otherwise the
/// table shakeout (if any) becomes the secondary.
fn quality_day(sessions: DayVolumes<f64>, shakeout: Option<f64>) -> DayVolumes<f64> {
    match sessions.secondary {
        Some(_) => sessions,
        None => DayVolumes {
            primary: sessions.primary,
            secondary: shakeout,
        },
    }
}

/// Clamp an easy run to the single-run cap, moving the excess into the
/// shakeout.
fn cap_single_run(easy: f64, shakeout: Option<f64>) -> (f64, Option<f64>) {
    if easy > MAX_SINGLE_EASY_RUN {
        let excess = easy - MAX_SINGLE_EASY_RUN;
        (MAX_SINGLE_EASY_RUN, Some(shakeout.unwrap_or(0.0) + excess))
    } else {
        (easy, shakeout)
    }
}
