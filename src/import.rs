//! JSON puzzle library import.
//!
//! Reads the studio's interchange format: a JSON object keyed by puzzle
//! name, each value carrying a row-major boolean `board`. Descriptors in
//! the file are ignored and rederived from the board on import.

use std::collections::BTreeMap;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::db::PuzzleRepository;
use crate::puzzle::{Puzzle, SolutionGrid};

/// Import failure.
#[derive(Debug, Clone, Display, Error)]
#[display("Import error: {}", message)]
pub struct ImportError {
    /// Error message.
    pub message: String,
}

impl ImportError {
    /// Creates a new import error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<crate::db::DbError> for ImportError {
    fn from(err: crate::db::DbError) -> Self {
        Self::new(err.message)
    }
}

/// One entry of the interchange file. Extra keys (stored descriptors) are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
struct ImportEntry {
    board: Vec<Vec<bool>>,
}

/// Outcome of an import run.
#[derive(Debug, Clone, Default, Getters)]
pub struct ImportReport {
    /// Names newly added to the store.
    imported: Vec<String>,
    /// Names skipped: already stored, or carrying an invalid name/board.
    skipped: Vec<String>,
}

/// Imports every puzzle in `json` into the repository.
///
/// Entries whose name is already stored are left untouched; entries with
/// an invalid name or a ragged board are skipped with a warning rather
/// than aborting the rest of the file.
///
/// # Errors
///
/// Returns [`ImportError`] when the file is not valid JSON or the store
/// itself fails.
#[instrument(skip(repository, json))]
pub fn import_library(repository: &PuzzleRepository, json: &str) -> Result<ImportReport, ImportError> {
    let entries: BTreeMap<String, ImportEntry> = serde_json::from_str(json)
        .map_err(|e| ImportError::new(format!("Invalid library JSON: {}", e)))?;

    info!(count = entries.len(), "Importing puzzle library");
    let mut report = ImportReport::default();

    for (name, entry) in entries {
        let board = match SolutionGrid::new(entry.board) {
            Ok(board) => board,
            Err(e) => {
                warn!(name = %name, error = %e, "Skipping entry with invalid board");
                report.skipped.push(name);
                continue;
            }
        };
        let puzzle = match Puzzle::new(name.clone(), board) {
            Ok(puzzle) => puzzle,
            Err(e) => {
                warn!(name = %name, error = %e, "Skipping entry with invalid name");
                report.skipped.push(name);
                continue;
            }
        };

        if repository.get_by_name(puzzle.name())?.is_some() {
            info!(name = %puzzle.name(), "Already stored, skipping");
            report.skipped.push(name);
            continue;
        }

        repository.create(&puzzle)?;
        info!(name = %puzzle.name(), "Imported");
        report.imported.push(name);
    }

    info!(
        imported = report.imported.len(),
        skipped = report.skipped.len(),
        "Import complete"
    );
    Ok(report)
}
