use serde::{Deserialize, Serialize};

/// Player-visible state of a cell as tracked by the engine.
///
/// A cell is either hidden, flagged or revealed, never more than one of them,
/// which keeps the flagged and revealed sets disjoint by construction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Hidden,
    Flagged,
    /// Revealed safe cell with its adjacent mine count
    Open(u8),
    /// Revealed mine, only ever seen once the game is lost
    Mine,
}

impl Tile {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Open(_) | Self::Mine)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }

    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}
