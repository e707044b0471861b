//! Screen trait and transition type for the studio state machine.

use crossterm::event::KeyEvent;
use ratatui::Frame;

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`StudioController`](crate::StudioController) state machine. Transitions
/// that need the REST API are executed by the controller, keeping the
/// screens free of I/O.
#[derive(Debug, Clone)]
pub enum ScreenTransition {
    /// Stay on the current screen — no state change.
    Stay,
    /// Reload the puzzle list and return to the browse screen.
    GoToBrowse,
    /// Run a clue search and show the matches on the browse screen.
    Search {
        /// Raw clue query as typed, e.g. `"1,2,3"`.
        clue: String,
    },
    /// Fetch a puzzle and open it in play mode.
    OpenPlay {
        /// Name of the puzzle to play.
        name: String,
    },
    /// Fetch a puzzle and open it in the editor.
    OpenEdit {
        /// Name of the puzzle to edit.
        name: String,
    },
    /// Navigate to the new-puzzle form.
    GoToCreate,
    /// Open a blank editor for a brand-new puzzle.
    OpenBlankEditor {
        /// Validated puzzle name.
        name: String,
        /// Grid height.
        rows: usize,
        /// Grid width.
        cols: usize,
    },
    /// Persist the editor's board through the API.
    SavePuzzle {
        /// Puzzle name.
        name: String,
        /// Board cells, row-major.
        cells: Vec<Vec<bool>>,
        /// Whether to update an existing puzzle instead of creating one.
        overwrite: bool,
    },
    /// Exit the studio cleanly.
    Quit,
}

/// Trait implemented by each screen in the studio state machine.
///
/// Each screen owns its own state, renders its UI, and handles key events.
/// The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition;
}
