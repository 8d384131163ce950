use crate::planner::WeeklyPlan;

use super::notes::Note;
use super::summary::PlanStats;

/// Plain-text schedule for the terminal
pub fn render_text(plan: &WeeklyPlan, stats: &PlanStats, notes: &[Note], unit: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Week: {} {} · Aerobic {}% · Quality {}% · {} runs/week{}\n\n",
        plan.weekly_total,
        unit,
        stats.aerobic_percentage,
        stats.quality_percentage,
        stats.session_frequency,
        if plan.double_threshold {
            " · double threshold"
        } else {
            ""
        }
    ));

    for day in &plan.days {
        out.push_str(&format!(
            "{:<10} {:<13} {:>4} {}\n",
            day.day.to_string(),
            day.session_type.to_string(),
            day.total,
            unit
        ));
        for run in &day.runs {
            out.push_str(&format!(
                "    {:>4} {:<3} {:<18} {}\n",
                run.distance, unit, run.name, run.description
            ));
        }
    }

    if !notes.is_empty() {
        out.push_str("\nNotes:\n");
        for note in notes {
            out.push_str(&format!("  - {}: {}\n", note.title, note.body));
        }
    }

    out
}

pub fn render_markdown(
    plan: &WeeklyPlan,
    stats: &PlanStats,
    notes: &[Note],
    unit: &str,
) -> String {
    let mut md = String::new();

    md.push_str(&format!("# Weekly Plan: {} {}\n\n", plan.weekly_total, unit));

    md.push_str("| Metric | Value |\n");
    md.push_str("|--------|-------|\n");
    md.push_str(&format!("| Aerobic | {}% |\n", stats.aerobic_percentage));
    md.push_str(&format!("| Quality | {}% |\n", stats.quality_percentage));
    md.push_str(&format!("| Runs per week | {} |\n", stats.session_frequency));
    md.push_str(&format!(
        "| Double threshold | {} |\n\n",
        if plan.double_threshold { "yes" } else { "no" }
    ));

    md.push_str("## Schedule\n\n");
    md.push_str("| Day | Type | Session | Distance | Notes |\n");
    md.push_str("|-----|------|---------|----------|-------|\n");

    for day in &plan.days {
        for (i, run) in day.runs.iter().enumerate() {
            let (day_cell, type_cell) = if i == 0 {
                (day.day.to_string(), day.session_type.to_string())
            } else {
                (String::new(), String::new())
            };
            md.push_str(&format!(
                "| {} | {} | {} | {} {} | {} |\n",
                day_cell, type_cell, run.name, run.distance, unit, run.description
            ));
        }
        md.push_str(&format!(
            "| | | **Day total** | **{} {}** | |\n",
            day.total, unit
        ));
    }

    if !notes.is_empty() {
        md.push_str("\n## Notes\n\n");
        for note in notes {
            md.push_str(&format!("- **{}:** {}\n", note.title, note.body));
        }
    }

    md
}
