use serde::{Deserialize, Serialize};

/// One square of the board, mutated in place by the engine.
///
/// `adjacent_mines` is only meaningful for non-mine cells and only after
/// the mines of the session have been placed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    pub adjacent_mines: u8,
}

impl Cell {
    /// A cell the flood fill may still enter.
    pub const fn is_hidden(&self) -> bool {
        !self.is_revealed && !self.is_flagged
    }
}
