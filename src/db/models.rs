//! Database models for stored puzzles.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;
use tracing::instrument;

use crate::db::{DbError, schema};
use crate::puzzle::{DescriptorSet, Puzzle, SolutionGrid};

/// Stored puzzle database model.
///
/// Board and descriptors live as JSON text columns; the board column is the
/// source of truth and descriptors are kept alongside it for clue search.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::puzzles)]
pub struct PuzzleRow {
    id: i32,
    name: String,
    board: String,
    descriptors: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl PuzzleRow {
    /// Rehydrates the domain puzzle from this row.
    ///
    /// Descriptors are rederived from the stored board, so the derivation
    /// invariant holds even if the stored descriptor column drifted.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] when the stored board is not valid grid JSON or
    /// the stored name no longer passes validation.
    #[instrument(skip(self), fields(name = %self.name))]
    pub fn to_puzzle(&self) -> Result<Puzzle, DbError> {
        let cells: Vec<Vec<bool>> = serde_json::from_str(&self.board)?;
        let grid = SolutionGrid::new(cells)
            .map_err(|e| DbError::new(format!("Stored board for '{}': {}", self.name, e)))?;
        Puzzle::new(self.name.clone(), grid)
            .map_err(|e| DbError::new(format!("Stored name '{}': {}", self.name, e)))
    }

    /// Parses the stored descriptor column.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] when the column is not valid descriptor JSON.
    pub fn parse_descriptors(&self) -> Result<DescriptorSet, DbError> {
        Ok(serde_json::from_str(&self.descriptors)?)
    }
}

/// Insertable puzzle model for creating new rows.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = schema::puzzles)]
pub struct NewPuzzleRow {
    name: String,
    board: String,
    descriptors: String,
}

impl NewPuzzleRow {
    /// Serializes a domain puzzle into an insertable row.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if serialization fails.
    #[instrument(skip(puzzle), fields(name = %puzzle.name()))]
    pub fn from_puzzle(puzzle: &Puzzle) -> Result<Self, DbError> {
        Ok(Self::new(
            puzzle.name().clone(),
            serde_json::to_string(puzzle.board())?,
            serde_json::to_string(puzzle.descriptors())?,
        ))
    }
}
