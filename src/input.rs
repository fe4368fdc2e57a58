use ggez::input::keyboard::KeyCode;

use crate::grid::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Quit,
}

/// Maps a pressed key to a game command. Unbound keys give `None`.
pub fn command_for(key: KeyCode) -> Option<Command> {
    let command = match key {
        KeyCode::Up | KeyCode::W => Command::Turn(Direction::Up),
        KeyCode::Down | KeyCode::S => Command::Turn(Direction::Down),
        KeyCode::Left | KeyCode::A => Command::Turn(Direction::Left),
        KeyCode::Right | KeyCode::D => Command::Turn(Direction::Right),
        KeyCode::Escape | KeyCode::Q => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Everything the player asked for since the last tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Drained {
    pub turn: Option<Direction>,
    pub quit: bool,
}

/// Collects commands between ticks.
#[derive(Debug, Default)]
pub struct InputQueue {
    turns: Vec<Direction>,
    quit: bool,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        match command {
            Command::Turn(direction) => self.turns.push(direction),
            Command::Quit => self.quit = true,
        }
    }

    /// Empties the queue. The turn handed back is the latest one a snake
    /// heading `current` would take; reversals and same-axis repeats of the
    /// current heading are skipped.
    pub fn drain(&mut self, current: Direction) -> Drained {
        let turn = self
            .turns
            .drain(..)
            .rev()
            .find(|&next| next != current && current.accepts(next));
        Drained {
            turn,
            quit: std::mem::take(&mut self.quit),
        }
    }
}
