//! Main TUI application state and logic

use crate::convert::{self, Category, ConversionTable, LengthUnit};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;

/// Longest input the value field accepts
const MAX_INPUT_LEN: usize = 24;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Nav,
    Input,
    FromUnit,
    ToUnit,
}

impl FocusedPane {
    /// Move focus to the next pane (nav -> input -> from -> to)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Nav => FocusedPane::Input,
            FocusedPane::Input => FocusedPane::FromUnit,
            FocusedPane::FromUnit => FocusedPane::ToUnit,
            FocusedPane::ToUnit => FocusedPane::Nav,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Nav => FocusedPane::ToUnit,
            FocusedPane::Input => FocusedPane::Nav,
            FocusedPane::FromUnit => FocusedPane::Input,
            FocusedPane::ToUnit => FocusedPane::FromUnit,
        }
    }
}

/// The main application state
///
/// The displayed result is never stored: every frame recomputes it from
/// (input, from_unit, to_unit) via [`App::display_result`], so stale
/// displays cannot outlive a state change.
pub struct App {
    /// Currently selected category
    pub category: Category,

    /// Raw text typed into the value field
    pub input: String,

    /// Source unit selector
    pub from_unit: LengthUnit,

    /// Target unit selector
    pub to_unit: LengthUnit,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Factor table for the length category
    table: ConversionTable,
}

impl App {
    /// Create a new app starting on the given category
    pub fn new(category: Category) -> Self {
        App {
            category,
            input: String::new(),
            from_unit: LengthUnit::Meter,
            to_unit: LengthUnit::Meter,
            focused_pane: FocusedPane::Nav,
            should_quit: false,
            status_message: String::from("Ready!"),
            table: ConversionTable::length(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// The display string for the current state.
    ///
    /// Blank or malformed input yields `"0.00"`; everything else runs
    /// through the conversion engine and its formatting policy.
    pub fn display_result(&self) -> String {
        convert::display(&self.input, self.from_unit, self.to_unit, &self.table)
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Category bar on top, converter section in the middle, status bar at bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        super::panes::render_nav_bar(
            frame,
            chunks[0],
            self.category,
            self.focused_pane == FocusedPane::Nav,
        );

        if self.category.is_available() {
            let result = self.display_result();
            super::panes::render_converter_pane(
                frame,
                chunks[1],
                &self.input,
                self.from_unit,
                self.to_unit,
                &result,
                self.focused_pane,
            );
        } else {
            super::panes::render_placeholder_pane(frame, chunks[1], self.category);
        }

        super::panes::render_status_bar(
            frame,
            chunks[2],
            &self.status_message,
            self.category.is_available(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.clear();
            }
            KeyCode::Tab => {
                // Placeholder categories have no converter panes to focus
                if self.category.is_available() {
                    self.focused_pane = self.focused_pane.next();
                }
            }
            KeyCode::BackTab => {
                if self.category.is_available() {
                    self.focused_pane = self.focused_pane.prev();
                }
            }
            KeyCode::Left => {
                if self.focused_pane == FocusedPane::Nav {
                    self.select_category(self.category.prev());
                }
            }
            KeyCode::Right => {
                if self.focused_pane == FocusedPane::Nav {
                    self.select_category(self.category.next());
                }
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::FromUnit => {
                    self.from_unit = self.from_unit.prev();
                    self.status_message = format!("From: {}", self.from_unit.label());
                }
                FocusedPane::ToUnit => {
                    self.to_unit = self.to_unit.prev();
                    self.status_message = format!("To: {}", self.to_unit.label());
                }
                _ => {}
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::FromUnit => {
                    self.from_unit = self.from_unit.next();
                    self.status_message = format!("From: {}", self.from_unit.label());
                }
                FocusedPane::ToUnit => {
                    self.to_unit = self.to_unit.next();
                    self.status_message = format!("To: {}", self.to_unit.label());
                }
                _ => {}
            },
            KeyCode::Backspace => {
                if self.focused_pane == FocusedPane::Input {
                    self.input.pop();
                }
            }
            KeyCode::Char(ch) => {
                if self.focused_pane == FocusedPane::Input
                    && self.category.is_available()
                    && (ch.is_ascii_digit() || ch == '.' || ch == '-' || ch == '+')
                    && self.input.len() < MAX_INPUT_LEN
                {
                    self.input.push(ch);
                }
            }
            _ => {}
        }
    }

    /// Switch category, dropping converter focus for placeholder categories
    fn select_category(&mut self, category: Category) {
        self.category = category;
        if !category.is_available() {
            self.focused_pane = FocusedPane::Nav;
        }
        self.status_message = format!("Category: {}", category.title());
    }

    /// Reset the converter: empty input, default unit pair, "0.00" display
    fn clear(&mut self) {
        self.input.clear();
        self.from_unit = LengthUnit::Meter;
        self.to_unit = LengthUnit::Meter;
        self.status_message = String::from("Cleared");
    }
}
