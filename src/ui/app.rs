//! Main TUI application state and logic

use crate::parse::Subject;
use crate::report::Report;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Bits,
    Report,
}

impl FocusedPane {
    /// Move focus to the other pane
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Bits => FocusedPane::Report,
            FocusedPane::Report => FocusedPane::Bits,
        }
    }
}

/// The main application state
pub struct App {
    /// The subject being inspected
    pub subject: Subject,

    /// All reports built for the subject
    pub reports: Vec<Report>,

    /// Index of the report shown in the report pane
    pub selected_report: usize,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Report pane scroll offset
    pub report_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app for a subject and its reports
    pub fn new(subject: Subject, reports: Vec<Report>) -> Self {
        App {
            subject,
            reports,
            selected_report: 0,
            focused_pane: FocusedPane::Report,
            report_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Bits pane on top, report below, status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        super::panes::render_bits_pane(
            frame,
            chunks[0],
            &self.subject,
            self.focused_pane == FocusedPane::Bits,
        );

        super::panes::render_report_pane(
            frame,
            chunks[1],
            self.reports.get(self.selected_report),
            self.selected_report,
            self.reports.len(),
            self.focused_pane == FocusedPane::Report,
            &mut self.report_scroll,
        );

        super::panes::render_status_bar(
            frame,
            chunks[2],
            &self.status_message,
            self.selected_report,
            self.reports.len(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.select_prev_report();
            }
            KeyCode::Right => {
                self.select_next_report();
            }
            // Number keys jump straight to a report
            KeyCode::Char(c @ '1'..='9') => {
                let index = c.to_digit(10).unwrap() as usize - 1;
                if index < self.reports.len() {
                    self.selected_report = index;
                    self.report_scroll = 0;
                    self.status_message =
                        format!("Viewing: {}", self.reports[index].title);
                }
            }
            KeyCode::Up => {
                if self.focused_pane == FocusedPane::Report {
                    self.report_scroll = self.report_scroll.saturating_sub(1);
                }
            }
            KeyCode::Down => {
                if self.focused_pane == FocusedPane::Report {
                    self.report_scroll = self.report_scroll.saturating_add(1);
                }
            }
            _ => {}
        }
    }

    /// Select the previous report, wrapping around
    fn select_prev_report(&mut self) {
        if self.reports.is_empty() {
            return;
        }
        self.selected_report = if self.selected_report == 0 {
            self.reports.len() - 1
        } else {
            self.selected_report - 1
        };
        self.report_scroll = 0;
        self.status_message = format!("Viewing: {}", self.reports[self.selected_report].title);
    }

    /// Select the next report, wrapping around
    fn select_next_report(&mut self) {
        if self.reports.is_empty() {
            return;
        }
        self.selected_report = (self.selected_report + 1) % self.reports.len();
        self.report_scroll = 0;
        self.status_message = format!("Viewing: {}", self.reports[self.selected_report].title);
    }
}
