//! Play screen — solve a puzzle on a tri-state grid.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::puzzle::{PlayGrid, Puzzle, ToggleInput, is_solved};
use crate::tui::board::play_board_lines;
use crate::tui::screen::{Screen, ScreenTransition};

/// State for the play screen.
///
/// Owns the player's grid; the solved flag is recomputed after every
/// toggle rather than derived lazily.
#[derive(Debug, Getters)]
pub struct PlayScreen {
    puzzle: Puzzle,
    play: PlayGrid,
    cursor: (usize, usize),
    solved: bool,
    status_message: String,
}

impl PlayScreen {
    /// Starts a fresh play session for the puzzle.
    #[instrument(skip(puzzle), fields(name = %puzzle.name()))]
    pub fn new(puzzle: Puzzle) -> Self {
        info!(name = %puzzle.name(), "Starting play session");
        let play = PlayGrid::for_solution(puzzle.board());
        let solved = is_solved(puzzle.board(), &play);
        Self {
            puzzle,
            play,
            cursor: (0, 0),
            solved,
            status_message: "Good luck!".to_string(),
        }
    }

    fn move_cursor(&mut self, key: KeyCode) {
        let (rows, cols) = (self.play.row_count(), self.play.col_count());
        if rows == 0 || cols == 0 {
            return;
        }
        let (r, c) = self.cursor;
        self.cursor = match key {
            KeyCode::Up => (r.saturating_sub(1), c),
            KeyCode::Down => ((r + 1).min(rows - 1), c),
            KeyCode::Left => (r, c.saturating_sub(1)),
            KeyCode::Right => (r, (c + 1).min(cols - 1)),
            _ => (r, c),
        };
    }

    /// Applies one toggle at the cursor and refreshes the solved flag.
    #[instrument(skip(self))]
    fn toggle(&mut self, input: ToggleInput) {
        let (r, c) = self.cursor;
        match self.play.toggle(r, c, input) {
            Ok(state) => {
                debug!(row = r, col = c, new_state = ?state, "Cell toggled");
                self.solved = is_solved(self.puzzle.board(), &self.play);
                self.status_message = if self.solved {
                    format!("Solved {}!", self.puzzle.name())
                } else {
                    String::new()
                };
            }
            Err(e) => {
                // Cursor movement is clamped, so this only fires on a
                // zero-size board.
                self.status_message = e.to_string();
            }
        }
    }
}

impl Screen for PlayScreen {
    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title = Paragraph::new(format!("Playing: {}", self.puzzle.name()))
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let lines = play_board_lines(self.puzzle.descriptors(), &self.play, self.cursor);
        let board = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(board, chunks[1]);

        let status_style = if self.solved {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let status = Paragraph::new(self.status_message.as_str())
            .style(status_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        frame.render_widget(status, chunks[2]);

        let help = Paragraph::new("↑↓←→: Move | Space: Fill | x: Mark | r: Reset | Esc: Back | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.move_cursor(key.code);
                ScreenTransition::Stay
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.toggle(ToggleInput::Primary);
                ScreenTransition::Stay
            }
            KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Char('m') | KeyCode::Char('M') => {
                self.toggle(ToggleInput::Secondary);
                ScreenTransition::Stay
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.play.reset();
                self.solved = is_solved(self.puzzle.board(), &self.play);
                self.status_message = "Board cleared".to_string();
                ScreenTransition::Stay
            }
            KeyCode::Esc => ScreenTransition::GoToBrowse,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
