//! Fixed coaching notes selected from the computed week

use serde::{Deserialize, Serialize};

use crate::planner::rules::DOUBLE_THRESHOLD_AT;
use crate::planner::{PlanRequest, WeeklyPlan, Weekday};

/// Long-run cap below this share of the week is called out as tight
const TIGHT_LONG_RUN_SHARE: f64 = 0.2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub body: String,
}

impl Note {
    fn new(title: &str, body: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            body: body.into(),
        }
    }
}

pub fn advisory_notes(request: &PlanRequest, plan: &WeeklyPlan, unit: &str) -> Vec<Note> {
    let mut notes = vec![Note::new(
        "80-90% Aerobic Rule",
        "Quality is strictly capped at ≤ 20% to prevent gray-zone burnout.",
    )];

    if plan.double_threshold {
        notes.push(Note::new(
            "Double Threshold Logic",
            format!(
                "At {} {}/week (≥ {}), Tuesday and Friday convert to Double Threshold. \
                 AM reps > 1k, PM reps ≤ 1k. Combined lactate volume capped.",
                plan.weekly_total, unit, DOUBLE_THRESHOLD_AT
            ),
        ));
    }

    notes.push(Note::new(
        "Neuromuscular Economy",
        "Strides included 2x weekly (Mon/Thu). Short Hill Sprints 1x weekly (Saturday). \
         If no fast running for 10+ days, insert economy work.",
    ));

    notes.push(Note::new(
        "Medium Long Run (12-15%)",
        format!(
            "The {} {} MLR on Wednesday should be HR-capped and ideally not within 24h \
             of your hardest session.",
            plan.day(Weekday::Wednesday).total,
            unit
        ),
    ));

    if request.max_long_run < request.weekly_total * TIGHT_LONG_RUN_SHARE {
        notes.push(Note::new(
            "Long Run Anchor",
            format!(
                "You've capped your long run tightly ({} {}). This is safe, though standard \
                 is 20-25%. Every other week, add a light stimulus (e.g., last 20min steady).",
                request.max_long_run, unit
            ),
        ));
    }

    notes.push(Note::new(
        "Hard Day Spacing",
        "Ensure a minimum of 48 hours between VO2 or Race-pace sessions. \
         AM/PM Double Threshold counts as ONE stress day.",
    ));

    notes.push(Note::new(
        "Mileage Progression Rule",
        "Non-negotiable: Increase mileage ≤ 8-10% weekly. Take an 85-90% deload every \
         4th week. Long run increases ≤ 2 per week.",
    ));

    notes
}
