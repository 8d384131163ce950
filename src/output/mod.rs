//! Presentation of a computed week: statistics, advisory notes, rendering
//! and report files.

pub mod notes;
pub mod render;
pub mod report;
pub mod summary;

pub use notes::{advisory_notes, Note};
pub use render::{render_markdown, render_text};
pub use report::{write_report, PlanReport};
pub use summary::PlanStats;
