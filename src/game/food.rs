use super::grid::{Cell, Grid, GridFull};
use rand::Rng;
use std::collections::HashSet;

/// Places food on free cells of the board using its own random number
/// source
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct FoodSpawner<R> {
    rng: R,
}

impl<R: Rng> FoodSpawner<R> {
    pub(super) fn new(rng: R) -> FoodSpawner<R> {
        FoodSpawner { rng }
    }

    /// Choose a cell on `grid` for a new food item, avoiding `occupied`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if every cell on the board is occupied.
    pub(super) fn spawn(&mut self, grid: &Grid, occupied: &HashSet<Cell>) -> Result<Cell, GridFull> {
        grid.random_free_cell(&mut self.rng, occupied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[test]
    fn never_spawns_on_snake() {
        let grid = Grid::for_viewport(100.0, 100.0).expect("100×100 should be a usable viewport");
        let mut spawner = FoodSpawner::new(ChaCha12Rng::seed_from_u64(RNG_SEED));
        // Everything but the bottom row is taken
        let occupied = (0..5)
            .flat_map(|c| (1..5).map(move |r| Cell::new(c * 20, r * 20)))
            .collect::<HashSet<_>>();
        for _ in 0..50 {
            let food = spawner
                .spawn(&grid, &occupied)
                .expect("board should have free cells");
            assert_eq!(food.y, 0);
            assert!(!occupied.contains(&food));
        }
    }

    #[test]
    fn same_seed_same_food() {
        let grid = Grid::for_viewport(600.0, 600.0).expect("600×600 should be a usable viewport");
        let mut a = FoodSpawner::new(ChaCha12Rng::seed_from_u64(RNG_SEED));
        let mut b = FoodSpawner::new(ChaCha12Rng::seed_from_u64(RNG_SEED));
        for _ in 0..10 {
            assert_eq!(
                a.spawn(&grid, &HashSet::new()),
                b.spawn(&grid, &HashSet::new())
            );
        }
    }
}
