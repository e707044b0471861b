//! Run-length clue derivation from a boolean grid.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::grid::FilledGrid;

/// Row and column clues for a puzzle.
///
/// One run-length list per row and per column. A line without any filled
/// cells carries the single sentinel `[0]`, so an empty list always means
/// "not computed" rather than "no runs".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct DescriptorSet {
    rows: Vec<Vec<u32>>,
    columns: Vec<Vec<u32>>,
}

impl DescriptorSet {
    /// Derives the full descriptor set from a grid.
    ///
    /// A grid with zero rows or zero-length rows yields empty row and
    /// column lists; that case is distinct from a positive-size grid with
    /// no filled cells, which yields `[0]` per line.
    #[instrument(skip(grid), fields(rows = grid.row_count(), cols = grid.col_count()))]
    pub fn compute<G: FilledGrid>(grid: &G) -> Self {
        let (rows, cols) = (grid.row_count(), grid.col_count());
        if rows == 0 || cols == 0 {
            return Self::default();
        }

        let row_clues = (0..rows)
            .map(|r| line_runs((0..cols).map(|c| grid.filled(r, c))))
            .collect();
        let col_clues = (0..cols)
            .map(|c| line_runs((0..rows).map(|r| grid.filled(r, c))))
            .collect();

        Self {
            rows: row_clues,
            columns: col_clues,
        }
    }

    /// Whether any single row or column clue list equals `clue`.
    pub fn matches_clue(&self, clue: &[u32]) -> bool {
        self.rows
            .iter()
            .chain(self.columns.iter())
            .any(|line| line == clue)
    }
}

/// Scans one line of cells into its run-length clue list.
fn line_runs(cells: impl Iterator<Item = bool>) -> Vec<u32> {
    let mut runs = Vec::new();
    let mut count = 0u32;
    for filled in cells {
        if filled {
            count += 1;
        } else if count > 0 {
            runs.push(count);
            count = 0;
        }
    }
    // A run touching the end of the line still counts.
    if count > 0 {
        runs.push(count);
    }
    if runs.is_empty() {
        runs.push(0);
    }
    runs
}

/// Parses a clue query such as `"1,2 3"` into run lengths.
///
/// Accepts comma- or space-separated non-negative integers. Returns `None`
/// when any token fails to parse or the query holds no tokens at all;
/// search treats that as "matches nothing" rather than an error.
pub fn parse_clue_query(query: &str) -> Option<Vec<u32>> {
    let tokens: Vec<&str> = query
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.is_empty() {
        return None;
    }
    tokens.iter().map(|t| t.parse().ok()).collect()
}
