#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod types;

/// Board dimensions and mine budget for one game.
///
/// Play normally happens on one of [`GameConfig::PRESETS`], selected by
/// index and cycled by the frontend, but any configuration satisfying
/// `mines < rows * cols` is accepted by [`Game::new`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    /// The fixed difficulty ladder, in cycling order.
    pub const PRESETS: [GameConfig; 3] = [
        GameConfig::new(9, 9, 10),
        GameConfig::new(16, 16, 40),
        GameConfig::new(22, 22, 99),
    ];

    pub const fn new(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    /// Number of non-mine cells, the count that has to be revealed to win.
    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_follow_the_difficulty_ladder() {
        let [beginner, intermediate, expert] = GameConfig::PRESETS;

        assert_eq!(beginner, GameConfig::new(9, 9, 10));
        assert_eq!(intermediate, GameConfig::new(16, 16, 40));
        assert_eq!(expert, GameConfig::new(22, 22, 99));
    }

    #[test]
    fn safe_cells_is_total_minus_mines() {
        let config = GameConfig::new(9, 9, 10);

        assert_eq!(config.total_cells(), 81);
        assert_eq!(config.safe_cells(), 71);
    }
}
