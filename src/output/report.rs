use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::OutputError;
use crate::planner::{PlanRequest, WeeklyPlan};

use super::notes::{advisory_notes, Note};
use super::render::render_markdown;
use super::summary::PlanStats;

/// Everything written for one computed week
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanReport {
    pub generated_at: String,
    pub unit: String,
    pub request: PlanRequest,
    pub plan: WeeklyPlan,
    pub stats: PlanStats,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<Note>,
}

impl PlanReport {
    pub fn new(request: PlanRequest, plan: WeeklyPlan, unit: &str, with_notes: bool) -> Self {
        let stats = PlanStats::from_plan(&plan);
        let notes = if with_notes {
            advisory_notes(&request, &plan, unit)
        } else {
            Vec::new()
        };

        Self {
            generated_at: Utc::now().to_rfc3339(),
            unit: unit.to_string(),
            request,
            plan,
            stats,
            notes,
        }
    }

    pub fn to_json(&self) -> Result<String, OutputError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_markdown(&self) -> String {
        render_markdown(&self.plan, &self.stats, &self.notes, &self.unit)
    }
}

/// Write the report as Markdown and JSON under `report_dir/YYYY-MM-DD/`.
/// Returns the Markdown path.
pub fn write_report(report_dir: &Path, report: &PlanReport) -> Result<PathBuf, OutputError> {
    let date_str = Local::now().format("%Y-%m-%d").to_string();
    let dir = report_dir.join(date_str);
    fs::create_dir_all(&dir).map_err(OutputError::CreateDir)?;

    let stem = format!("plan-{}", report.plan.weekly_total);

    let md_path = dir.join(format!("{}.md", stem));
    fs::write(&md_path, report.to_markdown()).map_err(OutputError::WriteReport)?;

    let json_path = dir.join(format!("{}.json", stem));
    fs::write(&json_path, report.to_json()?).map_err(OutputError::WriteReport)?;

    info!("Report written to {:?}", md_path);
    Ok(md_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::allocate;

    fn report(with_notes: bool) -> PlanReport {
        let request = PlanRequest::new(40.0, 12.0, 8.0);
        let plan = allocate(&request).unwrap();
        PlanReport::new(request, plan, "mi", with_notes)
    }

    #[test]
    fn test_write_report_creates_markdown_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let report = report(true);

        let md_path = write_report(dir.path(), &report).unwrap();
        assert_eq!(md_path.file_name().unwrap(), "plan-40.md");
        assert!(md_path.exists());

        let json_path = md_path.with_extension("json");
        let parsed: PlanReport =
            serde_json::from_str(&fs::read_to_string(json_path).unwrap()).unwrap();
        assert_eq!(parsed.plan, report.plan);
        assert_eq!(parsed.stats.quality_percentage, 40);
        assert_eq!(parsed.notes.len(), 5);
    }

    #[test]
    fn test_notes_omitted_from_json_when_disabled() {
        let json = report(false).to_json().unwrap();
        assert!(!json.contains("\"notes\""));
        assert!(json.contains("\"weekly_total\": 40"));
    }
}
