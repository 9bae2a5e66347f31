use hashbrown::HashSet;
use ndarray::Array2;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Purely random placement that keeps the first click and its neighbors free
/// of mines.
///
/// Mines are picked by rejection sampling: a uniformly random cell is drawn
/// and kept only if it is neither excluded nor already mined. Valid configs
/// always leave more free cells than mines, so few draws are wasted.
#[derive(Clone, Debug)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(&mut self, config: GameConfig, start: Coord2) -> Minefield {
        let size = config.size();
        let (rows, cols) = size;

        let mut excluded: HashSet<Coord2> = NeighborIter::new(start, size).collect();
        excluded.insert(start);

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        let mut mines = Vec::with_capacity(config.mines().into());
        let mut attempts: u32 = 0;

        while mines.len() < usize::from(config.mines()) {
            attempts += 1;
            let coords = (rng.random_range(0..rows), rng.random_range(0..cols));
            if excluded.contains(&coords) || mine_mask[coords.to_nd_index()] {
                continue;
            }
            mine_mask[coords.to_nd_index()] = true;
            mines.push(coords);
        }

        log::debug!(
            "Placed {} mines on {}x{} around start {:?} with seed {} in {} draws",
            mines.len(),
            rows,
            cols,
            start,
            self.seed,
            attempts
        );

        // the next game generated by this instance should not repeat the layout
        self.seed = rng.next_u64();

        Minefield::from_parts(mine_mask, mines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(config: GameConfig, seed: u64, start: Coord2) -> Minefield {
        RandomMinefieldGenerator::new(seed).generate(config, start)
    }

    #[test]
    fn places_exact_mine_count() {
        for difficulty in Difficulty::ALL {
            let config = difficulty.config();
            for seed in 0..50 {
                let field = generate(config, seed, (0, 0));
                assert_eq!(field.mine_count(), config.mines());
                let masked = (0..config.rows())
                    .flat_map(|row| (0..config.cols()).map(move |col| (row, col)))
                    .filter(|&coords| field.contains_mine(coords))
                    .count();
                assert_eq!(masked, usize::from(config.mines()));
            }
        }
    }

    #[test]
    fn start_area_is_always_safe() {
        let config = Difficulty::Easy.config();
        for seed in 0..200 {
            for start in [(0, 0), (4, 4), (8, 8), (0, 5)] {
                let field = generate(config, seed, start);
                assert!(!field.contains_mine(start), "seed {seed} start {start:?}");
                for pos in NeighborIter::new(start, config.size()) {
                    assert!(!field.contains_mine(pos), "seed {seed} neighbor {pos:?}");
                }
                assert_eq!(field[start], BoardCell::Count(0));
            }
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let config = Difficulty::Medium.config();
        assert_eq!(
            generate(config, 42, (3, 7)).mines(),
            generate(config, 42, (3, 7)).mines()
        );
        assert_ne!(
            generate(config, 42, (3, 7)).mines(),
            generate(config, 43, (3, 7)).mines()
        );
    }

    #[test]
    fn reused_generator_advances_seed() {
        let config = Difficulty::Hard.config();
        let mut generator = RandomMinefieldGenerator::new(7);
        let first = generator.generate(config, (0, 0));
        assert_ne!(generator.seed(), 7);
        let second = generator.generate(config, (0, 0));
        assert_ne!(first.mines(), second.mines());
    }

    #[test]
    fn fills_tightest_valid_board() {
        // 4x4 leaves 7 free cells outside the start area, 6 is the maximum
        let config = GameConfig::new(4, 4, 6).unwrap();
        for seed in 0..20 {
            let field = generate(config, seed, (1, 1));
            assert_eq!(field.mine_count(), 6);
        }
    }
}
