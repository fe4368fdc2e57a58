use serde::{Deserialize, Serialize};

use crate::random::RandomSource;

/// A cell on the board, in grid units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step `(dx, dy)`; y grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Whether a snake heading `self` may turn to `next`.
    ///
    /// Only a straight reversal is refused. Every turn request, from the
    /// keyboard or from code, goes through this check.
    pub fn accepts(self, next: Direction) -> bool {
        !self.is_opposite(next)
    }
}

/// Fixed-size toroidal board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        debug_assert!(width > 0 && height > 0, "grid must not be empty");
        Self { width, height }
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// Folds a cell that left the board by at most one step back onto the
    /// opposite edge, each axis on its own.
    pub fn wrap(&self, cell: Cell) -> Cell {
        Cell::new(wrap_axis(cell.x, self.width), wrap_axis(cell.y, self.height))
    }

    /// The neighbour of `cell` in `direction`, across the edge if needed.
    pub fn step(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        self.wrap(Cell::new(cell.x + dx, cell.y + dy))
    }

    pub fn random_cell<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell::new(
            rng.below(self.width as usize) as i32,
            rng.below(self.height as usize) as i32,
        )
    }

    /// Top-left pixel of `cell` for a given cell edge length.
    pub fn to_pixels(cell: Cell, cell_size: u32) -> (f32, f32) {
        (
            (cell.x * cell_size as i32) as f32,
            (cell.y * cell_size as i32) as f32,
        )
    }
}

fn wrap_axis(value: i32, extent: i32) -> i32 {
    if value < 0 {
        extent - 1
    } else if value >= extent {
        0
    } else {
        value
    }
}
