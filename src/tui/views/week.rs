//! Week view - one card per day plus statistics and notes panels

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::output::{Note, PlanStats};
use crate::planner::{DayPlan, WeeklyPlan};
use crate::tui::widgets::{theme_color, themed_block, COLOR_ACCENT, COLOR_PANEL};

/// Draw the seven day cards side by side
pub fn draw_week(frame: &mut Frame<'_>, area: Rect, plan: &WeeklyPlan, unit: &str) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 7); 7].as_ref())
        .split(area);

    for (day, column) in plan.days.iter().zip(columns.iter()) {
        draw_day_card(frame, *column, day, unit);
    }
}

fn draw_day_card(frame: &mut Frame<'_>, area: Rect, day: &DayPlan, unit: &str) {
    let color = theme_color(day.theme);
    let mut lines = vec![
        Line::styled(
            day.session_type.to_string(),
            Style::default().fg(color).add_modifier(Modifier::ITALIC),
        ),
        Line::from(""),
    ];

    for run in &day.runs {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} {}", run.distance, unit),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(run.name.clone(), Style::default().fg(color)),
        ]));
        lines.push(Line::styled(
            run.description.clone(),
            Style::default().fg(COLOR_ACCENT),
        ));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::raw("Day total "),
        Span::styled(
            format!("{} {}", day.total, unit),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(themed_block(day.day.to_string(), color))
        .style(Style::default().bg(COLOR_PANEL).fg(Color::White))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

pub fn draw_stats(frame: &mut Frame<'_>, area: Rect, stats: &PlanStats) {
    let line = Line::from(vec![
        Span::styled("Aerobic ", Style::default().fg(COLOR_ACCENT)),
        Span::styled(
            format!("{}%", stats.aerobic_percentage),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Quality ", Style::default().fg(COLOR_ACCENT)),
        Span::styled(
            format!("{}%", stats.quality_percentage),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Runs/week ", Style::default().fg(COLOR_ACCENT)),
        Span::styled(
            stats.session_frequency.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);

    let paragraph = Paragraph::new(line)
        .block(themed_block("Stats", COLOR_ACCENT))
        .style(Style::default().bg(COLOR_PANEL).fg(Color::White));
    frame.render_widget(paragraph, area);
}

pub fn draw_notes(frame: &mut Frame<'_>, area: Rect, notes: &[Note]) {
    let lines: Vec<Line> = notes
        .iter()
        .map(|note| {
            Line::from(vec![
                Span::styled(
                    format!("{}: ", note.title),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(note.body.clone()),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(themed_block("Notes", COLOR_ACCENT))
        .style(Style::default().bg(COLOR_PANEL).fg(Color::White))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
