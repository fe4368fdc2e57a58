use ggez::audio::{self, SoundSource};
use ggez::event::EventHandler;
use ggez::graphics::{self, Color};
use ggez::input::keyboard::KeyInput;
use ggez::{Context, GameResult};
use log::info;
use rand::rngs::StdRng;

use toroid_snake::input::{command_for, InputQueue};
use toroid_snake::render::{Drawable, MeshSurface};
use toroid_snake::{Game, GameConfig};

/// Connects the game state to ggez's window, clock, keyboard and audio.
pub struct SnakeApp {
    game: Game,
    config: GameConfig,
    input: InputQueue,
    eat_sound: audio::Source,
    caption: String,
    quitting: bool,
}

impl SnakeApp {
    pub fn new(ctx: &mut Context, config: GameConfig, rng: StdRng) -> GameResult<Self> {
        let eat_sound = audio::Source::new(ctx, &config.eat_sound)?;
        let game = Game::new(config.grid(), rng);
        let caption = game.caption(&config.title, config.speed);
        ctx.gfx.set_window_title(&caption);

        Ok(SnakeApp {
            game,
            config,
            input: InputQueue::new(),
            eat_sound,
            caption,
            quitting: false,
        })
    }

    fn run_tick(&mut self, ctx: &mut Context) -> GameResult {
        let drained = self.input.drain(self.game.snake().direction());
        if drained.quit {
            info!("quit requested, record {}", self.game.snake().best());
            self.quitting = true;
            ctx.request_quit();
            return Ok(());
        }

        let report = self.game.tick(drained.turn);
        if report.ate {
            self.eat_sound.play_detached(ctx)?;
        }

        let caption = self.game.caption(&self.config.title, self.config.speed);
        if caption != self.caption {
            ctx.gfx.set_window_title(&caption);
            self.caption = caption;
        }
        Ok(())
    }
}

impl EventHandler for SnakeApp {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        while !self.quitting && ctx.time.check_update_time(self.config.speed) {
            self.run_tick(ctx)?;
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let palette = self.config.palette;
        let mut canvas = graphics::Canvas::from_frame(ctx, Color::from(palette.background));

        let mut surface = MeshSurface::new(self.config.cell_size);
        self.game.snake().draw(&mut surface, &palette)?;
        self.game.food().draw(&mut surface, &palette)?;
        let mesh = surface.into_mesh(ctx);
        canvas.draw(&mesh, graphics::DrawParam::default());

        canvas.finish(ctx)
    }

    fn key_down_event(&mut self, _ctx: &mut Context, input: KeyInput, _repeat: bool) -> GameResult {
        if let Some(command) = input.keycode.and_then(command_for) {
            self.input.push(command);
        }
        Ok(())
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> GameResult<bool> {
        info!("shutting down");
        Ok(false)
    }
}
