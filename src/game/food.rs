use super::grid::{Cell, Grid};
use crate::consts;
use rand::{seq::IteratorRandom, Rng};
use std::collections::HashSet;
use thiserror::Error;

/// Choose a random cell of `grid` that is not in `occupied`.
///
/// Cells are first sampled blindly, which is fast while the board is mostly
/// empty.  After [`MAX_FOOD_ATTEMPTS`][consts::MAX_FOOD_ATTEMPTS] misses, a
/// cell is instead chosen uniformly from the remaining free cells, and if
/// there are none, `BoardFull` is returned.
pub(super) fn place_food<R: Rng>(
    rng: &mut R,
    grid: Grid,
    occupied: &HashSet<Cell>,
) -> Result<Cell, BoardFull> {
    if occupied.len() >= grid.cell_count() {
        return Err(BoardFull);
    }
    let b = grid.bound();
    for _ in 0..consts::MAX_FOOD_ATTEMPTS {
        let cell = Cell::new(rng.random_range(-b..=b), rng.random_range(-b..=b));
        if !occupied.contains(&cell) {
            return Ok(cell);
        }
    }
    grid.cells()
        .filter(|c| !occupied.contains(c))
        .choose(rng)
        .ok_or(BoardFull)
}

/// Returned when every cell of the grid is occupied
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("no free cell left to place food in")]
pub(crate) struct BoardFull;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[test]
    fn never_returns_occupied_cell() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let grid = Grid::default();
        for trial in 0..500 {
            // Occupy a growing, pseudo-random share of the board.
            let occupied = grid
                .cells()
                .enumerate()
                .filter(|&(i, _)| (i * 7 + trial) % 10 < trial % 10)
                .map(|(_, c)| c)
                .collect::<HashSet<_>>();
            let cell = place_food(&mut rng, grid, &occupied).unwrap();
            assert!(grid.contains(cell));
            assert!(!occupied.contains(&cell), "trial {trial}: got occupied cell {cell}");
        }
    }

    #[test]
    fn finds_last_free_cell() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let grid = Grid::default();
        let free = Cell::new(-7, 3);
        let occupied = grid
            .cells()
            .filter(|&c| c != free)
            .collect::<HashSet<_>>();
        for _ in 0..20 {
            assert_eq!(place_food(&mut rng, grid, &occupied), Ok(free));
        }
    }

    #[test]
    fn full_board() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let grid = Grid::new(5).unwrap();
        let occupied = grid.cells().collect::<HashSet<_>>();
        let before = rng.clone();
        assert_eq!(place_food(&mut rng, grid, &occupied), Err(BoardFull));
        // Gives up without drawing any random cells.
        assert_eq!(rng, before);
    }

    #[test]
    fn empty_board_covers_grid() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let grid = Grid::new(5).unwrap();
        let seen = (0..2000)
            .map(|_| place_food(&mut rng, grid, &HashSet::new()).unwrap())
            .collect::<HashSet<_>>();
        assert_eq!(seen.len(), grid.cell_count());
    }
}
