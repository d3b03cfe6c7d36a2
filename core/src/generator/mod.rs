use crate::*;
use ndarray::Array2;

pub use random::*;

mod random;

/// Produces the mine mask for a fresh board.
///
/// Generation happens once per session, on the first reveal, so the
/// strategy can take the first-clicked cell into account.
pub trait MineGenerator {
    fn generate(self, config: GameConfig) -> Result<Array2<bool>>;
}
