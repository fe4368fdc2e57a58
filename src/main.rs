use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use ggez::event;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use toroid_snake::GameConfig;

mod app;

use app::SnakeApp;

#[derive(Parser)]
#[command(name = "toroid-snake")]
#[command(version, about = "Snake on a board that wraps around at the edges")]
struct Cli {
    /// JSON config file; unset keys use the defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width in cells
    #[arg(long)]
    width: Option<u32>,

    /// Board height in cells
    #[arg(long)]
    height: Option<u32>,

    /// Cell size in pixels
    #[arg(long)]
    cell_size: Option<u32>,

    /// Ticks per second
    #[arg(long)]
    speed: Option<u32>,

    /// Seed for food placement and reset directions
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                info!("loading config from {}", path.display());
                GameConfig::load(path)?
            }
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(speed) = self.speed {
            config.speed = speed;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.game_config()?;
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(
        "starting {}x{} board at {} ticks per second",
        config.grid_width, config.grid_height, config.speed
    );

    let (width, height) = config.screen_size();
    let window_setup = ggez::conf::WindowSetup::default()
        .title(&config.title)
        .vsync(true);
    let window_mode = ggez::conf::WindowMode::default()
        .dimensions(width, height)
        .resizable(false);

    let (mut ctx, event_loop) = ggez::ContextBuilder::new("toroid_snake", "toroid_snake")
        .add_resource_path(config.resource_dir.clone())
        .window_setup(window_setup)
        .window_mode(window_mode)
        .build()
        .map_err(|e| anyhow!("failed to open the game window: {e}"))?;

    let app = SnakeApp::new(&mut ctx, config, rng)
        .map_err(|e| anyhow!("failed to set up audio: {e}"))?;
    event::run(ctx, event_loop, app)
}
