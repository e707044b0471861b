//! Cell states and the toggle transition rules for play mode.

use serde::{Deserialize, Serialize};

/// State of a single cell on a play grid.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    /// Untouched cell.
    #[default]
    Empty,
    /// Cell the player believes is part of the picture.
    Filled,
    /// Cell the player has ruled out.
    Marked,
}

/// Input channel driving a play-mode toggle.
///
/// Primary is the fill action (left click, space bar); secondary is the
/// rule-out action (right click, mark key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToggleInput {
    /// Fill toggle.
    Primary,
    /// Mark toggle.
    Secondary,
}

impl CellState {
    /// Returns the state reached by applying `input` to this cell.
    ///
    /// Primary toggles between `Empty` and `Filled`; secondary toggles
    /// between `Empty` and `Marked`. Either input collapses the opposite
    /// non-empty state back to `Empty`.
    pub fn toggled(self, input: ToggleInput) -> Self {
        match (input, self) {
            (ToggleInput::Primary, CellState::Empty) => CellState::Filled,
            (ToggleInput::Primary, _) => CellState::Empty,
            (ToggleInput::Secondary, CellState::Empty) => CellState::Marked,
            (ToggleInput::Secondary, _) => CellState::Empty,
        }
    }

    /// Whether the player has this cell filled in.
    pub fn is_filled(self) -> bool {
        self == CellState::Filled
    }
}
