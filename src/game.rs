use log::{debug, info, warn};
use rand::rngs::StdRng;

use crate::food::Food;
use crate::grid::{Direction, Grid};
use crate::random::RandomSource;
use crate::snake::{Advance, Snake};

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    pub ate: bool,
    /// Length of the snake that crashed, if it crashed this tick.
    pub reset: Option<usize>,
}

/// The whole game state, owned by the loop.
pub struct Game<R: RandomSource = StdRng> {
    grid: Grid,
    snake: Snake,
    food: Food,
    rng: R,
}

impl<R: RandomSource> Game<R> {
    pub fn new(grid: Grid, mut rng: R) -> Self {
        let snake = Snake::new(&grid);
        let food = Food::spawn(&grid, &mut rng);
        Self::from_parts(grid, snake, food, rng)
    }

    pub fn from_parts(grid: Grid, snake: Snake, food: Food, rng: R) -> Self {
        Self {
            grid,
            snake,
            food,
            rng,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    /// Runs one tick: turn, eat, move.
    ///
    /// Eating is decided on the cell the head is about to enter, so the
    /// extra segment appears in the same tick as the food disappears.
    pub fn tick(&mut self, turn: Option<Direction>) -> TickReport {
        if let Some(direction) = turn {
            self.snake.set_direction(direction);
        }

        let ate = self.snake.next_head(&self.grid) == self.food.cell;
        if ate {
            self.snake.grow();
        }

        let reset = match self.snake.advance(&self.grid, &mut self.rng) {
            Advance::Moved => None,
            Advance::Reset { length } => {
                info!(
                    "snake crashed at length {}, record is {}",
                    length,
                    self.snake.record()
                );
                Some(length)
            }
        };

        if ate {
            debug!(
                "ate food at ({}, {}), length {}",
                self.food.cell.x,
                self.food.cell.y,
                self.snake.len()
            );
            if !self
                .food
                .place(&self.grid, &mut self.rng, Some(self.snake.cells()))
            {
                warn!("no free cell left for food");
            }
        }

        TickReport { ate, reset }
    }

    /// Window title text.
    pub fn caption(&self, title: &str, speed: u32) -> String {
        format!(
            "{} | Speed: {} | Length: {} | Record: {}",
            title,
            speed,
            self.snake.len(),
            self.snake.best()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;
    use rand::SeedableRng;

    fn game_with(snake: Snake, food: Cell) -> Game {
        Game::from_parts(
            Grid::new(32, 24),
            snake,
            Food { cell: food },
            StdRng::seed_from_u64(5),
        )
    }

    #[test]
    fn test_new_game() {
        let game = Game::new(Grid::new(32, 24), StdRng::seed_from_u64(1));
        assert_eq!(game.snake().cells(), &[Cell::new(16, 12)]);
        assert!(game.grid().contains(game.food().cell));
    }

    #[test]
    fn test_tick_without_food() {
        let mut game = game_with(Snake::new(&Grid::new(32, 24)), Cell::new(0, 0));
        let report = game.tick(None);

        assert_eq!(report, TickReport::default());
        assert_eq!(game.snake().cells(), &[Cell::new(17, 12)]);
        assert_eq!(game.food().cell, Cell::new(0, 0));
    }

    #[test]
    fn test_tick_applies_turn_first() {
        let mut game = game_with(Snake::new(&Grid::new(32, 24)), Cell::new(0, 0));
        game.tick(Some(Direction::Up));
        assert_eq!(game.snake().head(), Cell::new(16, 11));
    }

    #[test]
    fn test_eating_grows_and_moves_food() {
        let mut game = game_with(Snake::new(&Grid::new(32, 24)), Cell::new(17, 12));
        let report = game.tick(None);

        assert!(report.ate);
        assert_eq!(game.snake().target_length(), 2);
        assert_eq!(
            game.snake().cells(),
            &[Cell::new(17, 12), Cell::new(16, 12)]
        );
        assert!(!game.snake().cells().contains(&game.food().cell));
    }

    #[test]
    fn test_crash_is_reported() {
        let snake = Snake::from_cells(
            vec![
                Cell::new(5, 5),
                Cell::new(6, 5),
                Cell::new(6, 4),
                Cell::new(5, 4),
            ],
            Direction::Up,
        );
        let mut game = game_with(snake, Cell::new(0, 0));
        let report = game.tick(None);

        assert_eq!(report.reset, Some(4));
        assert_eq!(game.snake().cells(), &[Cell::new(16, 12)]);
        assert_eq!(game.snake().record(), 4);
    }

    #[test]
    fn test_caption() {
        let game = game_with(Snake::new(&Grid::new(32, 24)), Cell::new(0, 0));
        assert_eq!(
            game.caption("Snake", 20),
            "Snake | Speed: 20 | Length: 1 | Record: 1"
        );
    }
}
