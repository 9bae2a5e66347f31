use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Read model of a game for the UI layer: status, counters and what each
/// cell should look like.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: GameState,
    pub elapsed_secs: u32,
    pub mines_left: i32,
    pub size: Coord2,
    pub triggered_mine: Option<Coord2>,
    pub cells: Array2<Tile>,
}

impl Snapshot {
    pub fn from_game<G: MinefieldGenerator>(game: &Game<G>) -> Self {
        Self {
            state: game.state(),
            elapsed_secs: game.elapsed_secs(),
            mines_left: game.mines_left(),
            size: game.size(),
            triggered_mine: game.triggered_mine(),
            cells: game.grid().clone(),
        }
    }

    pub fn cell(&self, coords: Coord2) -> Option<Tile> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        let cols = usize::from(self.size.1).max(1);
        self.cells.as_slice().unwrap_or_default().chunks(cols)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl<G: MinefieldGenerator> From<&Game<G>> for Snapshot {
    fn from(game: &Game<G>) -> Self {
        Self::from_game(game)
    }
}
