use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Out-of-bounds coordinate. All call sites derive coordinates from
    /// board bounds, so hitting this is a caller bug, not a user action.
    #[error("coordinates outside the board")]
    InvalidCoords,
    /// The mine budget does not leave enough eligible cells, either for
    /// the board as a whole or once the first-click safe zone is removed.
    #[error("mine count does not fit the board")]
    TooManyMines,
    /// A session whose board, counters, or status disagree with each
    /// other. Only reachable through tampered or corrupt serialized
    /// state.
    #[error("board state does not match its declared config")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
