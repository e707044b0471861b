//! Edit screen — modify a puzzle's boolean board with live clues.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument};

use crate::puzzle::{DescriptorSet, EditGrid, Puzzle};
use crate::tui::board::edit_board_lines;
use crate::tui::screen::{Screen, ScreenTransition};

/// State for the edit screen.
///
/// Descriptors are recomputed after every write to the grid, so the clue
/// display always reflects the board as drawn.
#[derive(Debug, Getters)]
pub struct EditScreen {
    name: String,
    grid: EditGrid,
    descriptors: DescriptorSet,
    cursor: (usize, usize),
    dirty: bool,
    overwrite: bool,
    status_message: String,
}

impl EditScreen {
    /// Opens an existing puzzle in the editor.
    #[instrument(skip(puzzle), fields(name = %puzzle.name()))]
    pub fn for_puzzle(puzzle: Puzzle) -> Self {
        info!(name = %puzzle.name(), "Opening puzzle in editor");
        let grid = EditGrid::from_solution(puzzle.board());
        let descriptors = DescriptorSet::compute(&grid);
        Self {
            name: puzzle.name().clone(),
            grid,
            descriptors,
            cursor: (0, 0),
            dirty: false,
            overwrite: true,
            status_message: String::new(),
        }
    }

    /// Opens a blank editor for a brand-new puzzle.
    #[instrument]
    pub fn blank(name: String, rows: usize, cols: usize) -> Self {
        info!(name = %name, rows, cols, "Opening blank editor");
        let grid = EditGrid::blank(rows, cols);
        let descriptors = DescriptorSet::compute(&grid);
        Self {
            name,
            grid,
            descriptors,
            cursor: (0, 0),
            dirty: false,
            overwrite: false,
            status_message: String::new(),
        }
    }

    /// Marks the last save as persisted; later saves become updates.
    #[instrument(skip(self))]
    pub fn mark_saved(&mut self) {
        self.dirty = false;
        self.overwrite = true;
        self.status_message = format!("Saved '{}'", self.name);
    }

    /// Shows a failed-save message without losing the board.
    pub fn set_error(&mut self, message: String) {
        self.status_message = message;
    }

    fn move_cursor(&mut self, key: KeyCode) {
        let (rows, cols) = (self.grid.row_count(), self.grid.col_count());
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

    /// Flips the cell under the cursor and recomputes the clues.
    #[instrument(skip(self))]
    fn toggle(&mut self) {
        let (r, c) = self.cursor;
        match self.grid.toggle(r, c) {
            Ok(filled) => {
                debug!(row = r, col = c, filled, "Cell toggled");
                self.descriptors = DescriptorSet::compute(&self.grid);
                self.dirty = true;
                self.status_message = String::new();
            }
            Err(e) => {
                self.status_message = e.to_string();
            }
        }
    }
}

impl Screen for EditScreen {
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

        let marker = if self.dirty { " *" } else { "" };
        let title = Paragraph::new(format!("Editing: {}{}", self.name, marker))
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let lines = edit_board_lines(&self.descriptors, &self.grid, self.cursor);
        let board = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(board, chunks[1]);

        let status = Paragraph::new(self.status_message.as_str())
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        frame.render_widget(status, chunks[2]);

        let help = Paragraph::new("↑↓←→: Move | Space: Toggle | s: Save | Esc: Back | q: Quit")
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
                self.toggle();
                ScreenTransition::Stay
            }
            KeyCode::Char('s') | KeyCode::Char('S') => ScreenTransition::SavePuzzle {
                name: self.name.clone(),
                cells: self.grid.cells().to_vec(),
                overwrite: self.overwrite,
            },
            KeyCode::Esc => ScreenTransition::GoToBrowse,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
