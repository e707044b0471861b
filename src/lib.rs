//! Nonogram Studio library - puzzle core, store, API, and TUI
//!
//! # Architecture
//!
//! - **Puzzle core**: pure grid/clue logic - descriptor derivation and the
//!   cell state machine
//! - **Store**: SQLite-backed puzzle repository with clue search
//! - **Server**: REST API over the store
//! - **Client**: typed HTTP client for the API
//! - **TUI**: browse/play/edit/create screens over the client
//!
//! # Example
//!
//! ```
//! use nonogram_studio::{DescriptorSet, SolutionGrid};
//!
//! let grid = SolutionGrid::new(vec![vec![true, true, false, true]]).unwrap();
//! let clues = DescriptorSet::compute(&grid);
//! assert_eq!(clues.rows(), &vec![vec![2, 1]]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod client;
mod config;
mod db;
mod import;
mod puzzle;
mod server;
mod tui;

// Crate-level exports - CLI definition
pub mod cli;

// Crate-level exports - puzzle core
pub use puzzle::{
    CellState, DescriptorSet, EditGrid, FilledGrid, GridError, MAX_NAME_LEN, NameError, PlayGrid,
    Puzzle, SolutionGrid, ToggleInput, is_solved, parse_clue_query, validate_name,
};

// Crate-level exports - puzzle store
pub use db::{DbError, MIGRATIONS, NewPuzzleRow, PuzzleRepository, PuzzleRow};

// Crate-level exports - REST API
pub use server::{
    ApiError, AppState, CreatePuzzleRequest, PuzzleList, SearchMatches, UpdatePuzzleRequest,
    build_router, serve,
};

// Crate-level exports - HTTP client
pub use client::PuzzleClient;

// Crate-level exports - import
pub use import::{ImportError, ImportReport, import_library};

// Crate-level exports - configuration
pub use config::{ConfigError, StudioConfig};

// Crate-level exports - TUI
pub use tui::{
    BrowseScreen, CreateScreen, EditScreen, MAX_GRID_SIDE, PlayScreen, Screen, ScreenTransition,
    StudioController, run_tui,
};
