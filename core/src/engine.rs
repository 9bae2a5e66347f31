use std::collections::VecDeque;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - NotStarted -> InProgress
/// - NotStarted -> Won (first click clears the board)
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// No cell revealed yet, mines not placed
    #[default]
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
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

/// Result of a reveal: what happened, the state afterwards and every cell
/// whose visible tile changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealReport {
    pub outcome: RevealOutcome,
    pub state: GameState,
    pub changed: Vec<Coord2>,
}

impl RevealReport {
    fn unchanged(state: GameState) -> Self {
        Self {
            outcome: RevealOutcome::NoChange,
            state,
            changed: Vec::new(),
        }
    }
}

/// One game from the first click to win or loss.
///
/// Mines are placed lazily on the first reveal, so the clicked cell and its
/// neighbors are always safe. Moves on a finished game are ignored.
#[derive(Clone, Debug)]
pub struct Game<G = RandomMinefieldGenerator> {
    config: GameConfig,
    generator: G,
    minefield: Option<Minefield>,
    grid: Array2<Tile>,
    revealed_count: CellCount,
    flagged_count: CellCount,
    state: GameState,
    triggered_mine: Option<Coord2>,
    stopwatch: Stopwatch,
}

impl Game<RandomMinefieldGenerator> {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_generator(config, RandomMinefieldGenerator::new(seed))
    }

    /// Throws away the current game and starts a fresh one with `config`.
    pub fn initialize(&mut self, config: GameConfig, seed: u64) {
        *self = Self::new(config, seed);
    }

    /// Fresh game with the same configuration.
    pub fn restart(&mut self, seed: u64) {
        self.initialize(self.config, seed);
    }
}

impl<G: MinefieldGenerator> Game<G> {
    pub fn with_generator(config: GameConfig, generator: G) -> Self {
        log::debug!(
            "new game {}x{} with {} mines",
            config.rows(),
            config.cols(),
            config.mines()
        );
        Self {
            config,
            generator,
            minefield: None,
            grid: Array2::default(config.size().to_nd_index()),
            revealed_count: 0,
            flagged_count: 0,
            state: GameState::NotStarted,
            triggered_mine: None,
            stopwatch: Stopwatch::new(),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_final()
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines()
    }

    /// How many mines have not been flagged yet, negative when over-flagged
    pub fn mines_left(&self) -> i32 {
        i32::from(self.config.mines()) - i32::from(self.flagged_count)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.stopwatch.elapsed_secs()
    }

    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    pub fn tile_at(&self, coords: Coord2) -> Result<Tile> {
        let coords = self.config.validate_coords(coords)?;
        Ok(self.grid[coords.to_nd_index()])
    }

    pub(crate) fn grid(&self) -> &Array2<Tile> {
        &self.grid
    }

    /// Mine layout, `None` until the first reveal.
    pub fn minefield(&self) -> Option<&Minefield> {
        self.minefield.as_ref()
    }

    /// The mine that ended the game, if it was lost.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use MarkOutcome::*;
        use Tile::*;

        let coords = self.config.validate_coords(coords)?;
        if self.state.is_final() {
            return Ok(NoChange);
        }

        let tile = &mut self.grid[coords.to_nd_index()];
        Ok(match *tile {
            Hidden => {
                *tile = Flagged;
                self.flagged_count += 1;
                Changed
            }
            Flagged => {
                *tile = Hidden;
                self.flagged_count -= 1;
                Changed
            }
            Open(_) | Mine => NoChange,
        })
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealReport> {
        let coords = self.config.validate_coords(coords)?;

        if self.state.is_final() || !self.grid[coords.to_nd_index()].is_hidden() {
            return Ok(RevealReport::unchanged(self.state));
        }

        let minefield = match self.minefield.take() {
            Some(minefield) => minefield,
            None => self.start(coords),
        };
        let report = self.reveal_from(&minefield, coords);
        self.minefield = Some(minefield);
        Ok(report)
    }

    /// Places the mines around the first click and starts the clock.
    fn start(&mut self, first_click: Coord2) -> Minefield {
        let minefield = self.generator.generate(self.config, first_click);
        log::debug!("game started at {:?}", first_click);
        self.state = GameState::InProgress;
        self.stopwatch.start();
        minefield
    }

    fn reveal_from(&mut self, minefield: &Minefield, coords: Coord2) -> RevealReport {
        let mut changed = Vec::new();

        let outcome = match minefield[coords] {
            BoardCell::Mine => {
                self.grid[coords.to_nd_index()] = Tile::Mine;
                self.revealed_count += 1;
                changed.push(coords);
                self.triggered_mine = Some(coords);
                self.end_game(minefield, false, &mut changed);
                RevealOutcome::HitMine
            }
            BoardCell::Count(_) => {
                self.flood_reveal(minefield, coords, &mut changed);
                if self.revealed_count == minefield.safe_cell_count() {
                    self.end_game(minefield, true, &mut changed);
                    RevealOutcome::Won
                } else {
                    RevealOutcome::Revealed
                }
            }
        };

        RevealReport {
            outcome,
            state: self.state,
            changed,
        }
    }

    /// Opens `start`, then keeps opening neighbors of every zero cell reached.
    /// Flagged cells are left alone and every cell is opened at most once.
    fn flood_reveal(&mut self, minefield: &Minefield, start: Coord2, changed: &mut Vec<Coord2>) {
        let mut to_visit = VecDeque::from([start]);

        while let Some(visit_coords) = to_visit.pop_front() {
            let tile = &mut self.grid[visit_coords.to_nd_index()];
            if !tile.is_hidden() {
                continue;
            }
            let BoardCell::Count(count) = minefield[visit_coords] else {
                continue;
            };

            *tile = Tile::Open(count);
            self.revealed_count += 1;
            changed.push(visit_coords);
            log::trace!("Opened {:?}, mine count: {}", visit_coords, count);

            if count == 0 {
                to_visit.extend(
                    minefield
                        .iter_neighbors(visit_coords)
                        .filter(|&pos| self.grid[pos.to_nd_index()].is_hidden()),
                );
            }
        }
    }

    /// Lost: every unflagged mine is shown, flagged ones stay flagged.
    /// Won: every mine not yet flagged gets flagged.
    fn end_game(&mut self, minefield: &Minefield, won: bool, changed: &mut Vec<Coord2>) {
        self.state = if won { GameState::Won } else { GameState::Lost };
        self.stopwatch.stop();
        log::debug!(
            "game {} after {}s",
            if won { "won" } else { "lost" },
            self.stopwatch.elapsed_secs()
        );

        for &mine in minefield.mines() {
            let tile = &mut self.grid[mine.to_nd_index()];
            if !tile.is_hidden() {
                continue;
            }
            if won {
                *tile = Tile::Flagged;
                self.flagged_count += 1;
            } else {
                *tile = Tile::Mine;
                self.revealed_count += 1;
            }
            changed.push(mine);
        }
    }
}
