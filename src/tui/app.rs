//! Main TUI application state and event loop

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::{Frame, Terminal};

use crate::error::{PlanError, WeekplanError};
use crate::output::{write_report, PlanReport};
use crate::planner::{allocate, PlanRequest, WeeklyPlan};

use super::views::{draw_notes, draw_stats, draw_week};
use super::widgets::{
    copy_to_clipboard, draw_slider, draw_status_bar, themed_block, StatusTone, COLOR_BG,
};

const SMALL_STEP: f64 = 1.0;
const BIG_STEP: f64 = 5.0;

/// Configuration for launching the TUI
#[derive(Clone)]
pub struct TuiConfig {
    /// Starting inputs
    pub request: PlanRequest,

    /// Distance unit label
    pub unit: String,

    /// Where `w` writes reports
    pub report_dir: PathBuf,

    /// Show the advisory notes panel
    pub notes: bool,
}

/// Which input the arrow keys adjust
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub enum Field {
    #[default]
    WeeklyTotal,
    MaxLongRun,
    MaxMidweekRun,
}

impl Field {
    const ALL: [Field; 3] = [Field::WeeklyTotal, Field::MaxLongRun, Field::MaxMidweekRun];

    fn label(self) -> &'static str {
        match self {
            Field::WeeklyTotal => "Weekly total",
            Field::MaxLongRun => "Long run cap",
            Field::MaxMidweekRun => "Midweek cap",
        }
    }

    /// Slider upper bound
    fn max(self) -> f64 {
        match self {
            Field::WeeklyTotal => 200.0,
            Field::MaxLongRun => 40.0,
            Field::MaxMidweekRun => 30.0,
        }
    }

    fn next(self) -> Self {
        match self {
            Field::WeeklyTotal => Field::MaxLongRun,
            Field::MaxLongRun => Field::MaxMidweekRun,
            Field::MaxMidweekRun => Field::WeeklyTotal,
        }
    }

    fn prev(self) -> Self {
        self.next().next()
    }
}

/// Main application state
pub struct App {
    request: PlanRequest,
    focus: Field,

    /// Result of the last allocation; replaced on every input change
    plan: Result<PlanReport, PlanError>,

    unit: String,
    report_dir: PathBuf,
    notes: bool,

    /// Status message and tone
    status_message: String,
    status_tone: StatusTone,
}

impl App {
    fn new(config: TuiConfig) -> Self {
        let mut app = Self {
            request: config.request,
            focus: Field::default(),
            plan: Err(PlanError::ZeroWeeklyTotal),
            unit: config.unit,
            report_dir: config.report_dir,
            notes: config.notes,
            status_message: "Adjust with ←/→, 'q' to quit".to_string(),
            status_tone: StatusTone::Info,
        };
        app.recompute();
        app
    }

    fn set_status<S: Into<String>>(&mut self, message: S, tone: StatusTone) {
        self.status_message = message.into();
        self.status_tone = tone;
    }

    fn value(&self, field: Field) -> f64 {
        match field {
            Field::WeeklyTotal => self.request.weekly_total,
            Field::MaxLongRun => self.request.max_long_run,
            Field::MaxMidweekRun => self.request.max_midweek_run,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut f64 {
        match field {
            Field::WeeklyTotal => &mut self.request.weekly_total,
            Field::MaxLongRun => &mut self.request.max_long_run,
            Field::MaxMidweekRun => &mut self.request.max_midweek_run,
        }
    }

    fn recompute(&mut self) {
        self.plan = allocate(&self.request)
            .map(|plan| PlanReport::new(self.request, plan, &self.unit, self.notes));

        match &self.plan {
            Ok(_) => {
                if self.status_tone == StatusTone::Error {
                    self.set_status("Plan updated", StatusTone::Info);
                }
            }
            Err(e) => {
                let message = e.to_string();
                self.set_status(message, StatusTone::Error);
            }
        }
    }

    fn adjust(&mut self, delta: f64) {
        let field = self.focus;
        let value = self.value_mut(field);
        *value = (*value + delta).round().clamp(0.0, field.max());
        self.recompute();
    }

    fn current_plan(&self) -> Option<&WeeklyPlan> {
        self.plan.as_ref().ok().map(|report| &report.plan)
    }

    fn copy_plan(&mut self) {
        let json = match &self.plan {
            Ok(report) => report.to_json(),
            Err(_) => {
                self.set_status("No plan to copy", StatusTone::Warning);
                return;
            }
        };

        match json.map_err(anyhow::Error::from).and_then(|j| copy_to_clipboard(&j)) {
            Ok(()) => self.set_status("Copied plan JSON to clipboard", StatusTone::Success),
            Err(e) => self.set_status(format!("Copy failed: {}", e), StatusTone::Error),
        }
    }

    fn save_report(&self) -> Result<PathBuf, WeekplanError> {
        let report = self.plan.as_ref().map_err(|e| e.clone())?;
        Ok(write_report(&self.report_dir, report)?)
    }

    fn handle_save(&mut self) {
        match self.save_report() {
            Ok(path) => self.set_status(
                format!("Report written to {}", path.display()),
                StatusTone::Success,
            ),
            Err(e) => self.set_status(format!("Save failed: {}", e), StatusTone::Error),
        }
    }

    fn state_line(&self) -> String {
        match self.current_plan() {
            Some(plan) => format!(
                "Focus: {} · Week: {} {} · Sessions: {} · Double threshold: {}",
                self.focus.label(),
                plan.weekly_total,
                self.unit,
                plan.session_count(),
                if plan.double_threshold { "on" } else { "off" }
            ),
            None => format!("Focus: {} · No plan", self.focus.label()),
        }
    }

    fn help_line(&self) -> &'static str {
        "Keys: Tab/j/k field · h/l ←/→ adjust · H/L ±5 · y copy · w write report · q quit"
    }
}

/// Run the TUI with the given configuration
pub fn run_tui(config: TuiConfig) -> Result<()> {
    let mut app = App::new(config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, &mut app);

    cleanup_terminal(terminal)?;
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| draw_ui(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,

                    // Field focus
                    KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => {
                        app.focus = app.focus.next();
                    }
                    KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => {
                        app.focus = app.focus.prev();
                    }

                    // Adjust the focused input
                    KeyCode::Right | KeyCode::Char('l') => app.adjust(SMALL_STEP),
                    KeyCode::Left | KeyCode::Char('h') => app.adjust(-SMALL_STEP),
                    KeyCode::PageUp | KeyCode::Char('L') => app.adjust(BIG_STEP),
                    KeyCode::PageDown | KeyCode::Char('H') => app.adjust(-BIG_STEP),

                    KeyCode::Char('y') => app.copy_plan(),
                    KeyCode::Char('w') => app.handle_save(),

                    _ => {}
                }
            }
        }
    }

    Ok(())
}

fn draw_ui(frame: &mut Frame<'_>, app: &App) {
    // Background
    frame.render_widget(
        Block::default().style(Style::default().bg(COLOR_BG)),
        frame.size(),
    );

    // Layout: inputs + stats, week, notes, status bar
    let notes_height = if app.notes { 9 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(12),
                Constraint::Length(notes_height),
                Constraint::Length(5),
            ]
            .as_ref(),
        )
        .split(frame.size());

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4].as_ref())
        .split(chunks[0]);

    for (field, area) in Field::ALL.iter().zip(header.iter()) {
        draw_slider(
            frame,
            *area,
            field.label(),
            app.value(*field),
            field.max(),
            &app.unit,
            app.focus == *field,
        );
    }

    match &app.plan {
        Ok(report) => {
            draw_stats(frame, header[3], &report.stats);
            draw_week(frame, chunks[1], &report.plan, &app.unit);
            if app.notes {
                draw_notes(frame, chunks[2], &report.notes);
            }
        }
        Err(e) => {
            let paragraph = Paragraph::new(e.to_string())
                .block(themed_block("No plan", StatusTone::Error.color()))
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, chunks[1]);
        }
    }

    draw_status_bar(
        frame,
        chunks[3],
        &app.status_message,
        app.status_tone,
        &app.state_line(),
        app.help_line(),
    );
}

fn cleanup_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
