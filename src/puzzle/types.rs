//! Core domain types for puzzles.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::descriptors::DescriptorSet;
use super::grid::SolutionGrid;

/// Longest accepted puzzle name.
pub const MAX_NAME_LEN: usize = 64;

/// Errors raised by puzzle name validation.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum NameError {
    /// Name is empty after trimming.
    #[display("puzzle name cannot be empty")]
    Empty,
    /// Name exceeds [`MAX_NAME_LEN`] characters.
    #[display("puzzle name is {} characters, maximum is {}", len, max)]
    TooLong {
        /// Observed length.
        len: usize,
        /// Permitted maximum.
        max: usize,
    },
    /// Name contains a character outside the accepted set.
    #[display("puzzle name contains invalid character {:?}", ch)]
    InvalidChar {
        /// First offending character.
        ch: char,
    },
}

/// Validates a human-readable puzzle name.
///
/// Names are trimmed, non-empty, at most [`MAX_NAME_LEN`] characters, and
/// limited to ASCII alphanumerics, spaces, underscores, and hyphens.
#[instrument]
pub fn validate_name(name: &str) -> Result<(), NameError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(NameError::TooLong {
            len: name.chars().count(),
            max: MAX_NAME_LEN,
        });
    }
    if let Some(ch) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-')))
    {
        return Err(NameError::InvalidChar { ch });
    }
    Ok(())
}

/// A named puzzle: solution board plus its derived clues.
///
/// Descriptors are redundant with the board and always recomputed at
/// construction, so `descriptors == DescriptorSet::compute(board)` holds
/// for every instance built through [`Puzzle::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Puzzle {
    name: String,
    board: SolutionGrid,
    descriptors: DescriptorSet,
}

impl Puzzle {
    /// Creates a puzzle, validating the name and deriving descriptors.
    ///
    /// # Errors
    ///
    /// Returns [`NameError`] when the name breaks the naming rules.
    #[instrument(skip_all)]
    pub fn new(name: impl Into<String>, board: SolutionGrid) -> Result<Self, NameError> {
        let name = name.into();
        validate_name(&name)?;
        let descriptors = DescriptorSet::compute(&board);
        Ok(Self {
            name: name.trim().to_string(),
            board,
            descriptors,
        })
    }
}
