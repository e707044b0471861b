//! Create screen — name and dimensions for a new puzzle.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::puzzle::validate_name;
use crate::tui::screen::{Screen, ScreenTransition};

/// Largest grid side the studio will create.
pub const MAX_GRID_SIDE: usize = 20;

/// Form field with input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Rows,
    Cols,
}

/// State for the new-puzzle form.
#[derive(Debug, Getters)]
pub struct CreateScreen {
    name_input: String,
    rows_input: String,
    cols_input: String,
    #[getter(skip)]
    focus: Field,
    error_message: Option<String>,
}

impl CreateScreen {
    /// Creates the form with default dimensions pre-filled.
    #[instrument]
    pub fn new(default_rows: usize, default_cols: usize) -> Self {
        debug!(default_rows, default_cols, "Initializing CreateScreen");
        Self {
            name_input: String::new(),
            rows_input: default_rows.to_string(),
            cols_input: default_cols.to_string(),
            focus: Field::Name,
            error_message: None,
        }
    }

    fn focus_next(&mut self) {
        self.focus = match self.focus {
            Field::Name => Field::Rows,
            Field::Rows => Field::Cols,
            Field::Cols => Field::Name,
        };
    }

    fn focus_previous(&mut self) {
        self.focus = match self.focus {
            Field::Name => Field::Cols,
            Field::Rows => Field::Name,
            Field::Cols => Field::Rows,
        };
    }

    fn focused_input(&mut self) -> &mut String {
        match self.focus {
            Field::Name => &mut self.name_input,
            Field::Rows => &mut self.rows_input,
            Field::Cols => &mut self.cols_input,
        }
    }

    fn parse_side(input: &str, label: &str) -> Result<usize, String> {
        let value: usize = input
            .trim()
            .parse()
            .map_err(|_| format!("{} must be a number", label))?;
        if value == 0 || value > MAX_GRID_SIDE {
            return Err(format!("{} must be between 1 and {}", label, MAX_GRID_SIDE));
        }
        Ok(value)
    }

    /// Validates the form, returning the blank-editor transition on success.
    #[instrument(skip(self))]
    fn submit(&mut self) -> ScreenTransition {
        let name = self.name_input.trim().to_string();
        if let Err(e) = validate_name(&name) {
            self.error_message = Some(e.to_string());
            return ScreenTransition::Stay;
        }
        let rows = match Self::parse_side(&self.rows_input, "Rows") {
            Ok(v) => v,
            Err(e) => {
                self.error_message = Some(e);
                return ScreenTransition::Stay;
            }
        };
        let cols = match Self::parse_side(&self.cols_input, "Columns") {
            Ok(v) => v,
            Err(e) => {
                self.error_message = Some(e);
                return ScreenTransition::Stay;
            }
        };

        info!(name = %name, rows, cols, "New puzzle form accepted");
        self.error_message = None;
        ScreenTransition::OpenBlankEditor { name, rows, cols }
    }

    fn render_field(&self, frame: &mut Frame, area: ratatui::layout::Rect, field: Field) {
        let (title, value) = match field {
            Field::Name => ("Name", self.name_input.as_str()),
            Field::Rows => ("Rows", self.rows_input.as_str()),
            Field::Cols => ("Columns", self.cols_input.as_str()),
        };
        let style = if self.focus == field {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let widget = Paragraph::new(value)
            .style(style)
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(widget, area);
    }
}

impl Screen for CreateScreen {
    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title = Paragraph::new("New Puzzle")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        self.render_field(frame, chunks[1], Field::Name);
        self.render_field(frame, chunks[2], Field::Rows);
        self.render_field(frame, chunks[3], Field::Cols);

        let error_text = self.error_message.as_deref().unwrap_or("");
        let error = Paragraph::new(error_text)
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(error, chunks[4]);

        let help = Paragraph::new("Tab: Next field | Enter: Open editor | Esc: Back")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[6]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                ScreenTransition::Stay
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_previous();
                ScreenTransition::Stay
            }
            KeyCode::Char(c) => {
                // Dimension fields only take digits.
                if self.focus == Field::Name || c.is_ascii_digit() {
                    self.focused_input().push(c);
                }
                ScreenTransition::Stay
            }
            KeyCode::Backspace => {
                self.focused_input().pop();
                ScreenTransition::Stay
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => ScreenTransition::GoToBrowse,
            _ => ScreenTransition::Stay,
        }
    }
}
