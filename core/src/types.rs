use ndarray::Array2;

/// Single coordinate axis, used for row/column indices and board dimensions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional position `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Converts the dimensions of a grid back into a `(rows, cols)` pair.
///
/// Grids are only ever allocated from a [`Coord2`] size, so the narrowing
/// cannot lose information.
pub fn grid_size<T>(grid: &Array2<T>) -> Coord2 {
    let (rows, cols) = grid.dim();
    (rows as Coord, cols as Coord)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, center: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, center: Coord2) -> NeighborIter {
        NeighborIter::new(center, grid_size(self))
    }
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (rows, cols) = bounds;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= rows {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates over the up-to-8 in-bounds neighbors of a cell, never the cell itself.
#[derive(Debug, Clone)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *DISPLACEMENTS.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), (9, 9)).collect();
        assert_eq!(neighbors, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn edge_has_five_neighbors() {
        assert_eq!(NeighborIter::new((0, 4), (9, 9)).count(), 5);
        assert_eq!(NeighborIter::new((8, 4), (9, 9)).count(), 5);
    }

    #[test]
    fn interior_has_eight_neighbors_excluding_center() {
        let neighbors: Vec<_> = NeighborIter::new((4, 4), (9, 9)).collect();
        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&(4, 4)));
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn mult_saturates() {
        assert_eq!(mult(16, 30), 480);
        assert_eq!(mult(255, 255), 65025);
    }
}
