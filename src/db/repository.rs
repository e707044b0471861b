//! Database repository for the puzzle store.

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument, warn};

use crate::db::{DbError, NewPuzzleRow, PuzzleRow, schema};
use crate::puzzle::Puzzle;

/// Embedded schema migrations, applied via [`PuzzleRepository::run_migrations`].
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Database repository for puzzle storage and search.
#[derive(Debug, Clone)]
pub struct PuzzleRepository {
    db_path: String,
}

impl PuzzleRepository {
    /// Creates a new repository connected to the database at the given path.
    ///
    /// Use `":memory:"` for an in-memory database (useful for tests).
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn new(db_path: String) -> Self {
        info!(path = %db_path, "Creating PuzzleRepository");
        Self { db_path }
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| DbError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }

    /// Applies any pending schema migrations.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a migration fails.
    #[instrument(skip(self))]
    pub fn run_migrations(&self) -> Result<(), DbError> {
        debug!("Running pending migrations");
        let mut conn = self.connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DbError::new(format!("Migration failed: {}", e)))?;
        info!(count = applied.len(), "Migrations applied");
        Ok(())
    }

    /// Lists all stored puzzle names, ordered alphabetically.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn list_names(&self) -> Result<Vec<String>, DbError> {
        debug!("Listing puzzle names");
        let mut conn = self.connection()?;

        let names = schema::puzzles::table
            .select(schema::puzzles::name)
            .order(schema::puzzles::name.asc())
            .load::<String>(&mut conn)?;

        info!(count = names.len(), "Puzzle names loaded");
        Ok(names)
    }

    /// Gets a puzzle by name. Returns `None` if not found.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs or the stored row
    /// fails to parse.
    #[instrument(skip(self))]
    pub fn get_by_name(&self, name: &str) -> Result<Option<Puzzle>, DbError> {
        debug!(name = %name, "Looking up puzzle by name");
        let mut conn = self.connection()?;

        let row = schema::puzzles::table
            .filter(schema::puzzles::name.eq(name))
            .select(PuzzleRow::as_select())
            .first::<PuzzleRow>(&mut conn)
            .optional()?;

        match row {
            Some(row) => {
                debug!(puzzle_id = row.id(), "Puzzle found");
                Ok(Some(row.to_puzzle()?))
            }
            None => {
                debug!("Puzzle not found");
                Ok(None)
            }
        }
    }

    /// Persists a new puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the name is already taken or a database
    /// error occurs.
    #[instrument(skip(self, puzzle), fields(name = %puzzle.name()))]
    pub fn create(&self, puzzle: &Puzzle) -> Result<Puzzle, DbError> {
        debug!("Creating puzzle");
        let mut conn = self.connection()?;

        let new_row = NewPuzzleRow::from_puzzle(puzzle)?;

        let row = diesel::insert_into(schema::puzzles::table)
            .values(&new_row)
            .returning(PuzzleRow::as_returning())
            .get_result(&mut conn)?;

        info!(puzzle_id = row.id(), name = %row.name(), "Puzzle created");
        row.to_puzzle()
    }

    /// Replaces the stored board (and descriptors) for an existing puzzle.
    ///
    /// Returns `false` when no puzzle with that name exists; the store is
    /// unchanged in that case.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self, puzzle), fields(name = %puzzle.name()))]
    pub fn update(&self, puzzle: &Puzzle) -> Result<bool, DbError> {
        debug!("Updating puzzle");
        let mut conn = self.connection()?;

        let board = serde_json::to_string(puzzle.board())?;
        let descriptors = serde_json::to_string(puzzle.descriptors())?;

        let affected = diesel::update(
            schema::puzzles::table.filter(schema::puzzles::name.eq(puzzle.name())),
        )
        .set((
            schema::puzzles::board.eq(board),
            schema::puzzles::descriptors.eq(descriptors),
            schema::puzzles::updated_at.eq(diesel::dsl::now),
        ))
        .execute(&mut conn)?;

        if affected > 0 {
            info!(name = %puzzle.name(), "Puzzle updated");
        } else {
            debug!(name = %puzzle.name(), "No puzzle to update");
        }
        Ok(affected > 0)
    }

    /// Finds names of puzzles where any row or column clue equals `clue`.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs. Rows whose stored
    /// descriptors fail to parse are skipped with a warning rather than
    /// failing the whole search.
    #[instrument(skip(self))]
    pub fn search_by_clue(&self, clue: &[u32]) -> Result<Vec<String>, DbError> {
        debug!(clue = ?clue, "Searching puzzles by clue");
        let mut conn = self.connection()?;

        let rows = schema::puzzles::table
            .select(PuzzleRow::as_select())
            .order(schema::puzzles::name.asc())
            .load::<PuzzleRow>(&mut conn)?;

        let mut matches = Vec::new();
        for row in &rows {
            match row.parse_descriptors() {
                Ok(descriptors) => {
                    if descriptors.matches_clue(clue) {
                        matches.push(row.name().clone());
                    }
                }
                Err(e) => {
                    warn!(name = %row.name(), error = %e, "Skipping row with unreadable descriptors");
                }
            }
        }

        info!(clue = ?clue, count = matches.len(), "Clue search complete");
        Ok(matches)
    }
}
