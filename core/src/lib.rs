//! Board engine for single-player Minesweeper.
//!
//! A [`Game`] owns all state of one round: the lazily generated
//! [`Minefield`], the player-visible [`Tile`] grid and the [`Stopwatch`].
//! The UI layer turns gestures into [`Game::reveal`] and
//! [`Game::toggle_flag`] calls and draws from a [`Snapshot`].
//!
//! ```
//! use sapper_core::*;
//!
//! let mut game = Game::new(Difficulty::Easy.config(), 42);
//! let report = game.reveal((4, 4)).unwrap();
//! assert_ne!(report.state, GameState::Lost);
//! assert_eq!(game.tile_at((4, 4)), Ok(Tile::Open(0)));
//! ```

pub use config::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use minefield::*;
pub use snapshot::*;
pub use tile::*;
pub use timer::*;
pub use types::*;

mod config;
mod engine;
mod error;
mod generator;
mod minefield;
mod snapshot;
mod tile;
mod timer;
mod types;
