use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Hidden contents of a single board position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardCell {
    Mine,
    /// Safe cell with the number of mines among its neighbors
    Count(u8),
}

impl BoardCell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

/// Mine placement for one game, with adjacency counts precomputed for every
/// safe cell. Fixed once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Minefield {
    board: Array2<BoardCell>,
    mines: Vec<Coord2>,
}

impl Minefield {
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        let mut mines = Vec::with_capacity(mine_coords.len());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            let slot = &mut mine_mask[coords.to_nd_index()];
            if !*slot {
                *slot = true;
                mines.push(coords);
            }
        }

        Ok(Self::from_parts(mine_mask, mines))
    }

    /// Builds the board from a mask whose `true` entries are exactly `mines`.
    pub(crate) fn from_parts(mine_mask: Array2<bool>, mines: Vec<Coord2>) -> Self {
        let board = Array2::from_shape_fn(mine_mask.dim(), |(row, col)| {
            let coords = (row as Coord, col as Coord);
            if mine_mask[coords.to_nd_index()] {
                BoardCell::Mine
            } else {
                BoardCell::Count(adjacent_mine_count(&mine_mask, coords))
            }
        });
        Self { board, mines }
    }

    pub fn size(&self) -> Coord2 {
        grid_size(&self.board)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mines.len() as CellCount
    }

    pub fn total_cells(&self) -> CellCount {
        self.board.len() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count()
    }

    /// Mine positions in placement order.
    pub fn mines(&self) -> &[Coord2] {
        &self.mines
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }

    /// Recounts the mines around `coords` from the board itself.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self.contains_mine(pos))
            .count() as u8
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.board.iter_neighbors(coords)
    }
}

impl Index<Coord2> for Minefield {
    type Output = BoardCell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.board[coords.to_nd_index()]
    }
}

/// Counts mines among the in-bounds neighbors of `coords` in a mine mask.
pub fn adjacent_mine_count(mine_mask: &Array2<bool>, coords: Coord2) -> u8 {
    mine_mask
        .iter_neighbors(coords)
        .filter(|&pos| mine_mask[pos.to_nd_index()])
        .count() as u8
}
