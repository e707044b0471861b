//! Database persistence layer for the puzzle store.

mod error;
mod models;
mod repository;
mod schema;

pub use error::DbError;
pub use models::{NewPuzzleRow, PuzzleRow};
pub use repository::{MIGRATIONS, PuzzleRepository};
