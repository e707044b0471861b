//! Rectangular grid types backing the solution, editor, and play surfaces.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::cell::{CellState, ToggleInput};

/// Errors raised by grid construction and cell addressing.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// Row lengths differ, so the input is not a rectangular grid.
    #[display("row {} has {} cells, expected {}", row, found, expected)]
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A cell address falls outside the grid.
    #[display("cell ({}, {}) is outside the {}x{} grid", row, col, rows, cols)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Grid height.
        rows: usize,
        /// Grid width.
        cols: usize,
    },
}

/// Read access to a rectangular grid of filled/unfilled cells.
///
/// Both boolean grid flavors implement this, so descriptor calculation is
/// written once against the trait rather than per grid type.
pub trait FilledGrid {
    /// Number of rows.
    fn row_count(&self) -> usize;
    /// Number of columns.
    fn col_count(&self) -> usize;
    /// Whether the cell at `(row, col)` is filled. Callers stay in bounds.
    fn filled(&self, row: usize, col: usize) -> bool;
}

fn check_rectangular(cells: &[Vec<bool>]) -> Result<(), GridError> {
    let expected = cells.first().map(Vec::len).unwrap_or(0);
    for (row, line) in cells.iter().enumerate() {
        if line.len() != expected {
            return Err(GridError::Ragged {
                row,
                expected,
                found: line.len(),
            });
        }
    }
    Ok(())
}

/// Immutable boolean grid holding a puzzle's ground truth.
///
/// Rectangularity is enforced at construction; every instance is a
/// well-formed grid from then on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<bool>>", into = "Vec<Vec<bool>>")]
pub struct SolutionGrid {
    cells: Vec<Vec<bool>>,
}

impl SolutionGrid {
    /// Creates a solution grid from row-major cells.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Ragged`] if row lengths differ.
    pub fn new(cells: Vec<Vec<bool>>) -> Result<Self, GridError> {
        check_rectangular(&cells)?;
        Ok(Self { cells })
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns.
    pub fn col_count(&self) -> usize {
        self.cells.first().map(Vec::len).unwrap_or(0)
    }

    /// The cell at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Rows in row-major order.
    pub fn cells(&self) -> &[Vec<bool>] {
        &self.cells
    }
}

impl TryFrom<Vec<Vec<bool>>> for SolutionGrid {
    type Error = GridError;

    fn try_from(cells: Vec<Vec<bool>>) -> Result<Self, Self::Error> {
        Self::new(cells)
    }
}

impl From<SolutionGrid> for Vec<Vec<bool>> {
    fn from(grid: SolutionGrid) -> Self {
        grid.cells
    }
}

impl FilledGrid for SolutionGrid {
    fn row_count(&self) -> usize {
        self.row_count()
    }

    fn col_count(&self) -> usize {
        self.col_count()
    }

    fn filled(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }
}

/// Mutable boolean grid for the editor and create flows.
///
/// Cells carry a plain two-state toggle; there is no secondary input
/// channel in edit mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<bool>>", into = "Vec<Vec<bool>>")]
pub struct EditGrid {
    cells: Vec<Vec<bool>>,
}

impl EditGrid {
    /// Creates an all-blank grid of the given dimensions.
    pub fn blank(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![vec![false; cols]; rows],
        }
    }

    /// Creates an edit grid initialized from an existing solution.
    pub fn from_solution(solution: &SolutionGrid) -> Self {
        Self {
            cells: solution.cells().to_vec(),
        }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns.
    pub fn col_count(&self) -> usize {
        self.cells.first().map(Vec::len).unwrap_or(0)
    }

    /// The cell at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Flips the cell at `(row, col)` and returns its new value.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] without touching the grid when
    /// the address falls outside it.
    #[instrument(skip(self))]
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        let (rows, cols) = (self.row_count(), self.col_count());
        let cell = self
            .cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(GridError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            })?;
        *cell = !*cell;
        Ok(*cell)
    }

    /// Rows in row-major order.
    pub fn cells(&self) -> &[Vec<bool>] {
        &self.cells
    }

    /// Freezes the editor state into an immutable solution grid.
    pub fn into_solution(self) -> SolutionGrid {
        // Blank/from_solution construction keeps the grid rectangular.
        SolutionGrid { cells: self.cells }
    }
}

impl TryFrom<Vec<Vec<bool>>> for EditGrid {
    type Error = GridError;

    fn try_from(cells: Vec<Vec<bool>>) -> Result<Self, Self::Error> {
        check_rectangular(&cells)?;
        Ok(Self { cells })
    }
}

impl From<EditGrid> for Vec<Vec<bool>> {
    fn from(grid: EditGrid) -> Self {
        grid.cells
    }
}

impl FilledGrid for EditGrid {
    fn row_count(&self) -> usize {
        self.row_count()
    }

    fn col_count(&self) -> usize {
        self.col_count()
    }

    fn filled(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }
}

/// Tri-state grid the player manipulates while solving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayGrid {
    cells: Vec<Vec<CellState>>,
}

impl PlayGrid {
    /// Creates an all-empty play grid of the given dimensions.
    pub fn blank(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![vec![CellState::Empty; cols]; rows],
        }
    }

    /// Creates an all-empty play grid matching a solution's dimensions.
    pub fn for_solution(solution: &SolutionGrid) -> Self {
        Self::blank(solution.row_count(), solution.col_count())
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns.
    pub fn col_count(&self) -> usize {
        self.cells.first().map(Vec::len).unwrap_or(0)
    }

    /// The cell at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<CellState> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Applies one toggle at `(row, col)` and returns the new cell state.
    ///
    /// Only the addressed cell changes. See [`CellState::toggled`] for the
    /// transition table.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] without touching the grid when
    /// the address falls outside it.
    #[instrument(skip(self))]
    pub fn toggle(
        &mut self,
        row: usize,
        col: usize,
        input: ToggleInput,
    ) -> Result<CellState, GridError> {
        let (rows, cols) = (self.row_count(), self.col_count());
        let cell = self
            .cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(GridError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            })?;
        *cell = cell.toggled(input);
        Ok(*cell)
    }

    /// Clears every cell back to `Empty`.
    pub fn reset(&mut self) {
        for row in &mut self.cells {
            row.fill(CellState::Empty);
        }
    }

    /// Rows in row-major order.
    pub fn cells(&self) -> &[Vec<CellState>] {
        &self.cells
    }
}

/// Whether `play` solves `solution`.
///
/// Grids of unequal dimensions never match. A cell counts as correct when
/// the solution is filled there and the player filled it, or the solution
/// is blank there and the player did anything but fill it; marks are never
/// an obstacle on blank cells.
pub fn is_solved(solution: &SolutionGrid, play: &PlayGrid) -> bool {
    if solution.row_count() != play.row_count() || solution.col_count() != play.col_count() {
        return false;
    }
    for (solution_row, play_row) in solution.cells().iter().zip(play.cells()) {
        for (&want, &have) in solution_row.iter().zip(play_row) {
            if want != have.is_filled() {
                return false;
            }
        }
    }
    true
}
