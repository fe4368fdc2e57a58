use crate::grid::{Cell, Grid};
use crate::random::RandomSource;

/// The single piece of food on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    pub cell: Cell,
}

impl Food {
    /// First placement: one unconditional draw, the snake is not consulted.
    pub fn spawn<R: RandomSource + ?Sized>(grid: &Grid, rng: &mut R) -> Self {
        Self {
            cell: grid.random_cell(rng),
        }
    }

    /// Moves the food to a random cell outside `excluded`.
    ///
    /// Returns `false` and leaves the food alone when `excluded` already
    /// covers the whole board.
    pub fn place<R: RandomSource + ?Sized>(
        &mut self,
        grid: &Grid,
        rng: &mut R,
        excluded: Option<&[Cell]>,
    ) -> bool {
        let Some(excluded) = excluded else {
            self.cell = grid.random_cell(rng);
            return true;
        };

        if board_is_full(grid, excluded) {
            return false;
        }

        loop {
            let cell = grid.random_cell(rng);
            if !excluded.contains(&cell) {
                self.cell = cell;
                return true;
            }
        }
    }
}

fn board_is_full(grid: &Grid, excluded: &[Cell]) -> bool {
    if excluded.len() < grid.area() {
        return false;
    }
    (0..grid.height)
        .flat_map(|y| (0..grid.width).map(move |x| Cell::new(x, y)))
        .all(|cell| excluded.contains(&cell))
}
