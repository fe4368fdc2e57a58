//! Snake on a wraparound board.
//!
//! The library holds the game state and rules; the `toroid-snake` binary
//! wires them to a ggez window, keyboard and audio.

pub mod config;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod random;
pub mod render;
pub mod snake;

pub use config::{GameConfig, Palette, Rgb};
pub use food::Food;
pub use game::{Game, TickReport};
pub use grid::{Cell, Direction, Grid};
pub use snake::{Advance, Snake};
