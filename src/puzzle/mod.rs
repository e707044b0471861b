//! Puzzle core: grids, clue derivation, and the cell state machine.

mod cell;
mod descriptors;
mod grid;
mod types;

pub use cell::{CellState, ToggleInput};
pub use descriptors::{DescriptorSet, parse_clue_query};
pub use grid::{EditGrid, FilledGrid, GridError, PlayGrid, SolutionGrid, is_solved};
pub use types::{MAX_NAME_LEN, NameError, Puzzle, validate_name};
