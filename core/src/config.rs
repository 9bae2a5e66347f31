use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Cells kept free of mines around the first click, the click itself included.
pub const SAFE_AREA: CellCount = 9;

/// Board dimensions and mine count for one game.
///
/// Only valid configurations can be constructed, either through
/// [`GameConfig::new`] or by deserializing, which runs the same checks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig", into = "RawGameConfig")]
pub struct GameConfig {
    size: Coord2,
    mines: CellCount,
}

impl GameConfig {
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::EmptyBoard);
        }
        if mines == 0 {
            return Err(GameError::NoMines);
        }
        let total_cells = mult(rows, cols);
        if total_cells <= SAFE_AREA || mines >= total_cells - SAFE_AREA {
            return Err(GameError::TooManyMines);
        }
        Ok(Self {
            size: (rows, cols),
            mines,
        })
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.size.0 && coords.1 < self.size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Difficulty::default().config()
    }
}

#[derive(Serialize, Deserialize)]
struct RawGameConfig {
    rows: Coord,
    cols: Coord,
    mines: CellCount,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = GameError;

    fn try_from(raw: RawGameConfig) -> Result<Self> {
        Self::new(raw.rows, raw.cols, raw.mines)
    }
}

impl From<GameConfig> for RawGameConfig {
    fn from(config: GameConfig) -> Self {
        Self {
            rows: config.rows(),
            cols: config.cols(),
            mines: config.mines(),
        }
    }
}

/// Named board presets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 9x9 with 10 mines
    Easy,
    /// 16x16 with 40 mines
    #[default]
    Medium,
    /// 16 rows by 30 columns with 99 mines
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn config(self) -> GameConfig {
        use Difficulty::*;
        let (size, mines) = match self {
            Easy => ((9, 9), 10),
            Medium => ((16, 16), 40),
            Hard => ((16, 30), 99),
        };
        GameConfig { size, mines }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl From<Difficulty> for GameConfig {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.config()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(GameError::UnknownDifficulty)
    }
}
