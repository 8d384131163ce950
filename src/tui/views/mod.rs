mod week;

pub use week::{draw_notes, draw_stats, draw_week};
