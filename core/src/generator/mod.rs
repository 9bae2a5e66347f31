use crate::*;
pub use random::*;

mod random;

/// Places mines for a game once the first cell to open is known.
pub trait MinefieldGenerator {
    /// Must place exactly `config.mines()` mines, none of them on `start` or
    /// its neighbors.
    fn generate(&mut self, config: GameConfig, start: Coord2) -> Minefield;
}
