//! Turn reconciled volumes into the labelled weekly plan

use super::reconcile::RoundedWeek;
use super::types::{DayPlan, DayVolumes, RunSegment, SessionType, Theme, WeeklyPlan, Weekday};

const SHAKEOUT: (&str, &str) = ("AM Shakeout", "Very relaxed, aerobic density");
const AM_THRESHOLD: (&str, &str) = ("AM Threshold", "2mi w/u, longer reps (>1k), 2mi c/d.");
const PM_THRESHOLD: (&str, &str) = ("PM Threshold", "2mi w/u, shorter reps (≤1k), 2mi c/d.");

/// Fixed labelling of one weekday
struct DayTemplate {
    session_type: SessionType,
    theme: Theme,
    /// Name and description of the day's main session when it is not a
    /// converted threshold day
    primary: (&'static str, &'static str),
}

fn template(day: Weekday) -> DayTemplate {
    let (session_type, theme, primary) = match day {
        Weekday::Monday => (
            SessionType::EasySpeed,
            Theme::Easy,
            ("Easy Run", "Conversational pace + 4-6x Strides for economy"),
        ),
        Weekday::Tuesday => (
            SessionType::Workout,
            Theme::Quality,
            (
                "Threshold Session",
                "2mi w/u, Cruise intervals or tempo, 2mi c/d.",
            ),
        ),
        Weekday::Wednesday => (
            SessionType::MedLong,
            Theme::Moderate,
            (
                "Midweek Anchor",
                "HR Capped. Not within 24h of hardest session if possible.",
            ),
        ),
        Weekday::Thursday => (
            SessionType::EasySpeed,
            Theme::Easy,
            ("Easy Run", "Recovery focused + 4-6x Strides for economy"),
        ),
        Weekday::Friday => (
            SessionType::Workout,
            Theme::Quality,
            ("Speed / CV", "2mi w/u, CV pacing, 2mi c/d."),
        ),
        Weekday::Saturday => (
            SessionType::EasyHills,
            Theme::Easy,
            ("Easy Run", "Conversational pace + Short Hill Sprints"),
        ),
        Weekday::Sunday => (
            SessionType::LongRun,
            Theme::Long,
            (
                "Aerobic Anchor",
                "Every other week: add light stimulus (last 20min steady / CV insertions).",
            ),
        ),
    };

    DayTemplate {
        session_type,
        theme,
        primary,
    }
}

fn segment((name, description): (&str, &str), distance: u64) -> RunSegment {
    RunSegment {
        name: name.to_string(),
        distance,
        description: description.to_string(),
    }
}

fn day_runs(day: Weekday, volumes: &DayVolumes<u64>, double_threshold: bool) -> Vec<RunSegment> {
    let template = template(day);
    let quality_day = matches!(day, Weekday::Tuesday | Weekday::Friday);

    match volumes.secondary {
        Some(pm) if quality_day && double_threshold => vec![
            segment(AM_THRESHOLD, volumes.primary),
            segment(PM_THRESHOLD, pm),
        ],
        Some(shakeout) => {
            let (name, description) = template.primary;
            // Easy runs following a shakeout become the PM run of the day
            let name = if name == "Easy Run" { "PM Easy" } else { name };
            vec![
                segment(SHAKEOUT, shakeout),
                segment((name, description), volumes.primary),
            ]
        }
        None => vec![segment(template.primary, volumes.primary)],
    }
}

pub fn assemble(week: &RoundedWeek) -> WeeklyPlan {
    let days: Vec<DayPlan> = Weekday::ALL
        .iter()
        .map(|&day| {
            let template = template(day);
            let runs = day_runs(day, week.volumes.get(day), week.double_threshold);
            let total = runs.iter().map(|r| r.distance).sum();
            DayPlan {
                day,
                session_type: template.session_type,
                theme: template.theme,
                runs,
                total,
            }
        })
        .collect();

    let total_quality_distance =
        days[Weekday::Tuesday.index()].total + days[Weekday::Friday.index()].total;
    // Quality days carry fixed minimums, so at low totals they can exceed the week
    let total_aerobic_distance = week.weekly_total.saturating_sub(total_quality_distance);

    WeeklyPlan {
        days,
        weekly_total: week.weekly_total,
        double_threshold: week.double_threshold,
        doubles_count: week.doubles_count,
        total_quality_distance,
        total_aerobic_distance,
    }
}
