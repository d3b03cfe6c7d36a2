use alloc::collections::VecDeque;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// One minesweeper session: the board plus everything needed to continue
/// it after deserialization.
///
/// Mines are not placed at construction time. The first [`Game::reveal`]
/// picks the layout, keeping a 3x3 zone around the clicked cell clear, so
/// the first click can never lose.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    board: Array2<Cell>,
    revealed_count: CellCount,
    flagged_count: CellCount,
    status: GameStatus,
    mines_placed: bool,
    triggered_mine: Option<Coord2>,
    seed: u64,
}

impl Game {
    /// Starts a session with an all-hidden board. Fails when the mine
    /// budget cannot fit the board at all; the tighter safe-zone check
    /// happens on the first reveal.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        if config.rows == 0 || config.cols == 0 || config.mines >= config.total_cells() {
            return Err(GameError::TooManyMines);
        }

        Ok(Self {
            config,
            board: Array2::default(config.size().to_nd_index()),
            revealed_count: 0,
            flagged_count: 0,
            status: GameStatus::InProgress,
            mines_placed: false,
            triggered_mine: None,
            seed,
        })
    }

    /// Builds a board with an explicit mine layout, adjacency already
    /// computed. Deterministic counterpart of the first-reveal placement,
    /// for tests and fixtures. Duplicate coordinates count as one mine.
    pub fn with_mines(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::TooManyMines);
        }

        let mut board: Array2<Cell> = Array2::default(size.to_nd_index());
        let mut mines: CellCount = 0;
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            let cell = &mut board[coords.to_nd_index()];
            if !cell.is_mine {
                cell.is_mine = true;
                mines += 1;
            }
        }

        let config = GameConfig::new(size.0, size.1, mines);
        if config.mines >= config.total_cells() {
            return Err(GameError::TooManyMines);
        }

        let mut game = Self {
            config,
            board,
            revealed_count: 0,
            flagged_count: 0,
            status: GameStatus::InProgress,
            mines_placed: true,
            triggered_mine: None,
            seed: 0,
        };
        game.compute_adjacency();
        Ok(game)
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// True until the first reveal of the session has placed the mines.
    pub fn is_first_move(&self) -> bool {
        !self.mines_placed
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines
    }

    /// Mine counter for the header: mines minus flags, may go negative.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.config.mines) - i32::from(self.flagged_count)
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.board[coords.to_nd_index()]
    }

    /// The mine that ended a lost session.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Checks the internal consistency of a session, for use on
    /// deserialized state before trusting it. The board shape is checked
    /// against the config and every counter the engine maintains
    /// incrementally is recomputed from the cells.
    pub fn validate(&self) -> Result<()> {
        if self.config.rows == 0
            || self.config.cols == 0
            || self.config.mines >= self.config.total_cells()
        {
            return Err(GameError::TooManyMines);
        }

        let size = self.config.size();
        if self.board.dim() != (usize::from(size.0), usize::from(size.1)) {
            return Err(GameError::InvalidBoardShape);
        }

        let mut mines: CellCount = 0;
        let mut revealed: CellCount = 0;
        let mut flagged: CellCount = 0;
        for cell in self.board.iter() {
            if cell.is_mine {
                mines += 1;
            }
            if cell.is_revealed && !cell.is_mine {
                revealed += 1;
            }
            if cell.is_flagged {
                flagged += 1;
            }
        }

        let expected_mines = if self.mines_placed { self.config.mines } else { 0 };
        if mines != expected_mines
            || revealed != self.revealed_count
            || flagged != self.flagged_count
        {
            return Err(GameError::InvalidBoardShape);
        }

        if !self.mines_placed && (self.status.is_finished() || revealed != 0) {
            return Err(GameError::InvalidBoardShape);
        }

        match self.status {
            GameStatus::Lost => {
                let Some(coords) = self.triggered_mine else {
                    return Err(GameError::InvalidBoardShape);
                };
                let coords = self.validate_coords(coords)?;
                if !self.board[coords.to_nd_index()].is_mine {
                    return Err(GameError::InvalidBoardShape);
                }
            }
            GameStatus::Won if revealed != self.config.safe_cells() => {
                return Err(GameError::InvalidBoardShape);
            }
            _ if self.triggered_mine.is_some() => {
                return Err(GameError::InvalidBoardShape);
            }
            _ => {}
        }

        Ok(())
    }

    /// Reveals a cell. No-op when the session is finished, the cell is
    /// flagged, or the cell is already revealed. The first reveal of a
    /// session places the mines with this cell as the safe-zone center.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;

        if self.status.is_finished() || !self.board[coords.to_nd_index()].is_hidden() {
            return Ok(RevealOutcome::NoChange);
        }

        if !self.mines_placed {
            self.place_mines(coords)?;
        }

        if self.board[coords.to_nd_index()].is_mine {
            self.board[coords.to_nd_index()].is_revealed = true;
            self.triggered_mine = Some(coords);
            self.status = GameStatus::Lost;
            self.reveal_all();
            return Ok(RevealOutcome::HitMine);
        }

        self.flood_reveal(coords);

        if self.revealed_count == self.config.safe_cells() {
            self.status = GameStatus::Won;
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    /// Flips the flag on a hidden cell. No-op when the session is
    /// finished or the cell is revealed. Flags are allowed before the
    /// first reveal; they never affect win or loss evaluation.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;

        if self.status.is_finished() || self.board[coords.to_nd_index()].is_revealed {
            return Ok(MarkOutcome::NoChange);
        }

        let cell = &mut self.board[coords.to_nd_index()];
        cell.is_flagged = !cell.is_flagged;
        if cell.is_flagged {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
        Ok(MarkOutcome::Changed)
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.config.rows && coords.1 < self.config.cols {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    fn place_mines(&mut self, exclude: Coord2) -> Result<()> {
        let mask = RandomMineGenerator::new(self.seed, exclude).generate(self.config)?;
        for (index, &is_mine) in mask.indexed_iter() {
            self.board[index].is_mine = is_mine;
        }
        self.compute_adjacency();
        self.mines_placed = true;
        Ok(())
    }

    fn compute_adjacency(&mut self) {
        let bounds = self.size();
        for row in 0..bounds.0 {
            for col in 0..bounds.1 {
                let coords = (row, col);
                if self.board[coords.to_nd_index()].is_mine {
                    continue;
                }
                let count = neighbors(coords, bounds)
                    .filter(|&pos| self.board[pos.to_nd_index()].is_mine)
                    .count() as u8;
                self.board[coords.to_nd_index()].adjacent_mines = count;
            }
        }
    }

    /// Iterative flood fill over the zero-adjacency region containing
    /// `start`, including its nonzero border. `start` must be a hidden
    /// non-mine cell.
    fn flood_reveal(&mut self, start: Coord2) {
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            let cell = self.board[coords.to_nd_index()];
            if !cell.is_hidden() || cell.is_mine {
                continue;
            }

            self.board[coords.to_nd_index()].is_revealed = true;
            self.revealed_count += 1;

            if cell.adjacent_mines == 0 {
                to_visit.extend(self.board.iter_neighbors(coords));
            }
        }
    }

    /// Discloses the whole board after a loss. Flags are kept as-is; the
    /// reveal overrides them for display only.
    fn reveal_all(&mut self) {
        for cell in self.board.iter_mut() {
            cell.is_revealed = true;
        }
        self.revealed_count = self.config.safe_cells();
    }
}
