//! Browse screen — list, search, and open puzzles.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::tui::screen::{Screen, ScreenTransition};

/// State for the browse screen.
///
/// Shows the stored puzzle list, an input field for clue search, and the
/// search matches when a search is active.
#[derive(Debug, Getters)]
pub struct BrowseScreen {
    names: Vec<String>,
    matches: Option<Vec<String>>,
    list_state: ListState,
    search_input: String,
    input_mode: bool,
    status_message: Option<String>,
}

impl BrowseScreen {
    /// Creates a browse screen over the fetched puzzle names.
    #[instrument(skip(names))]
    pub fn new(names: Vec<String>) -> Self {
        Self::with_status(names, None)
    }

    /// Creates a browse screen with an initial status message.
    #[instrument(skip(names, status_message))]
    pub fn with_status(names: Vec<String>, status_message: Option<String>) -> Self {
        debug!(count = names.len(), "Initializing BrowseScreen");
        let mut list_state = ListState::default();
        if !names.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            names,
            matches: None,
            list_state,
            search_input: String::new(),
            input_mode: false,
            status_message,
        }
    }

    /// The names currently shown: search matches when active, else all.
    fn visible(&self) -> &[String] {
        self.matches.as_deref().unwrap_or(&self.names)
    }

    /// Replaces the visible list with clue search matches.
    #[instrument(skip(self, matches))]
    pub fn show_matches(&mut self, clue: &str, matches: Vec<String>) {
        info!(clue = %clue, count = matches.len(), "Showing search matches");
        self.status_message = Some(format!("{} match(es) for clue '{}'", matches.len(), clue));
        self.matches = Some(matches);
        self.list_state = ListState::default();
        if !self.visible().is_empty() {
            self.list_state.select(Some(0));
        }
    }

    /// Sets the status line.
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    fn select_previous(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => len - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn selected_name(&self) -> Option<String> {
        self.list_state
            .selected()
            .and_then(|i| self.visible().get(i))
            .cloned()
    }
}

impl Screen for BrowseScreen {
    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title = Paragraph::new("Nonogram Studio")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let list_title = if self.matches.is_some() {
            "Matches"
        } else {
            "Puzzles"
        };
        let items: Vec<ListItem> = self
            .visible()
            .iter()
            .map(|name| ListItem::new(name.as_str()))
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(list_title))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        let mut list_state = self.list_state.clone();
        frame.render_stateful_widget(list, chunks[1], &mut list_state);

        let input_title = if self.input_mode {
            "Clue search, e.g. 1,2,3 (Enter to search, Esc to cancel)"
        } else {
            "Press '/' to search by clue"
        };
        let input_style = if self.input_mode {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let input = Paragraph::new(self.search_input.as_str())
            .style(input_style)
            .block(Block::default().borders(Borders::ALL).title(input_title));
        frame.render_widget(input, chunks[2]);

        let status_text = self.status_message.as_deref().unwrap_or("");
        let status = Paragraph::new(status_text)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        frame.render_widget(status, chunks[3]);

        let help_text = if self.input_mode {
            "Type clue | Enter: Search | Esc: Cancel"
        } else {
            "↑↓: Select | Enter: Play | e: Edit | n: New | /: Search | Esc: Clear | r: Reload | q: Quit"
        };
        let help = Paragraph::new(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[4]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        if self.input_mode {
            return match key.code {
                KeyCode::Char(c) => {
                    self.search_input.push(c);
                    ScreenTransition::Stay
                }
                KeyCode::Backspace => {
                    self.search_input.pop();
                    ScreenTransition::Stay
                }
                KeyCode::Enter => {
                    self.input_mode = false;
                    let clue = std::mem::take(&mut self.search_input);
                    ScreenTransition::Search { clue }
                }
                KeyCode::Esc => {
                    self.input_mode = false;
                    self.search_input.clear();
                    ScreenTransition::Stay
                }
                _ => ScreenTransition::Stay,
            };
        }

        match key.code {
            KeyCode::Up => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyCode::Enter => match self.selected_name() {
                Some(name) => ScreenTransition::OpenPlay { name },
                None => ScreenTransition::Stay,
            },
            KeyCode::Char('e') | KeyCode::Char('E') => match self.selected_name() {
                Some(name) => ScreenTransition::OpenEdit { name },
                None => ScreenTransition::Stay,
            },
            KeyCode::Char('n') | KeyCode::Char('N') => ScreenTransition::GoToCreate,
            KeyCode::Char('/') => {
                self.input_mode = true;
                ScreenTransition::Stay
            }
            KeyCode::Esc => {
                if self.matches.take().is_some() {
                    self.status_message = None;
                    self.list_state = ListState::default();
                    if !self.names.is_empty() {
                        self.list_state.select(Some(0));
                    }
                }
                ScreenTransition::Stay
            }
            KeyCode::Char('r') | KeyCode::Char('R') => ScreenTransition::GoToBrowse,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
