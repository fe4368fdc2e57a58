use crate::grid::{Cell, Direction, Grid};
use crate::random::RandomSource;

/// What a call to [`Snake::advance`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    Moved,
    /// The head ran into the body; `length` is the length before the reset.
    Reset { length: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Snake {
    /// Occupied cells, head first.
    body: Vec<Cell>,
    direction: Direction,
    target_length: usize,
    record: usize,
    /// Tail cell from before the last move.
    last: Option<Cell>,
}

impl Snake {
    /// A one-cell snake in the middle of the board, heading right.
    pub fn new(grid: &Grid) -> Self {
        Self::from_cells(vec![grid.center()], Direction::Right)
    }

    /// A snake occupying `body` (head first) that is already at its target
    /// length.
    pub fn from_cells(body: Vec<Cell>, direction: Direction) -> Self {
        assert!(!body.is_empty(), "snake needs at least a head");
        let target_length = body.len();
        Self {
            body,
            direction,
            target_length,
            record: target_length,
            last: None,
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// Longest length reached before any reset this session.
    pub fn record(&self) -> usize {
        self.record
    }

    /// Record as shown to the player, counting the live snake too.
    pub fn best(&self) -> usize {
        self.record.max(self.body.len())
    }

    /// The cell the tail moved off during the last step, if it is now empty.
    pub fn trailing(&self) -> Option<Cell> {
        self.last.filter(|cell| !self.body.contains(cell))
    }

    /// Turns towards `requested` unless that would reverse the snake.
    pub fn set_direction(&mut self, requested: Direction) {
        if self.direction.accepts(requested) {
            self.direction = requested;
        }
    }

    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    pub fn next_head(&self, grid: &Grid) -> Cell {
        grid.step(self.head(), self.direction)
    }

    /// Moves one cell forward, wrapping at the edges.
    ///
    /// Running into the body (the tail cell included) resets the snake, but
    /// only once it is longer than two cells.
    pub fn advance<R: RandomSource>(&mut self, grid: &Grid, rng: &mut R) -> Advance {
        let new_head = self.next_head(grid);

        if self.body.len() > 2 && self.body.contains(&new_head) {
            let length = self.body.len();
            self.record = self.record.max(length);
            self.reset(grid, rng);
            return Advance::Reset { length };
        }

        self.last = self.body.last().copied();
        self.body.insert(0, new_head);
        if self.body.len() > self.target_length {
            self.body.pop();
        }
        Advance::Moved
    }

    fn reset<R: RandomSource>(&mut self, grid: &Grid, rng: &mut R) {
        self.body.clear();
        self.body.push(grid.center());
        self.target_length = 1;
        self.direction = rng.choose(&Direction::ALL);
        self.last = None;
    }
}
