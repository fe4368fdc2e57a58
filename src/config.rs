use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use ggez::graphics::Color;
use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// An 8-bit RGB triple, written as `[r, g, b]` in config files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<Rgb> for Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        Color::from_rgb(r, g, b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    pub border: Rgb,
    pub food: Rgb,
    pub snake: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb(0, 0, 0),
            border: Rgb(93, 216, 228),
            food: Rgb(255, 0, 0),
            snake: Rgb(0, 255, 0),
        }
    }
}

/// Startup configuration. Nothing here changes once the window is open.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width in cells
    pub grid_width: u32,
    /// Board height in cells
    pub grid_height: u32,
    /// Edge length of one cell in pixels
    pub cell_size: u32,
    /// Ticks per second
    pub speed: u32,
    pub title: String,
    pub resource_dir: PathBuf,
    /// Played when the snake eats, relative to `resource_dir`
    pub eat_sound: String,
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 32,
            grid_height: 24,
            cell_size: 20,
            speed: 20,
            title: "Snake".to_string(),
            resource_dir: PathBuf::from("resources"),
            eat_sound: "/eat.wav".to_string(),
            palette: Palette::default(),
        }
    }
}

impl GameConfig {
    /// Reads a JSON config file. Keys left out keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_width == 0 || self.grid_height == 0 {
            bail!(
                "board must be at least 1x1 cells, got {}x{}",
                self.grid_width,
                self.grid_height
            );
        }
        if self.cell_size == 0 {
            bail!("cell size must be positive");
        }
        if self.speed == 0 {
            bail!("speed must be at least one tick per second");
        }
        let too_big = |cells: u32| {
            cells
                .checked_mul(self.cell_size)
                .map_or(true, |px| px > i32::MAX as u32)
        };
        if too_big(self.grid_width) || too_big(self.grid_height) {
            bail!(
                "window of {}x{} cells at {}px per cell is too large",
                self.grid_width,
                self.grid_height,
                self.cell_size
            );
        }
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width as i32, self.grid_height as i32)
    }

    /// Window size in pixels.
    pub fn screen_size(&self) -> (f32, f32) {
        (
            (self.grid_width * self.cell_size) as f32,
            (self.grid_height * self.cell_size) as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid(), Grid::new(32, 24));
        assert_eq!(config.screen_size(), (640.0, 480.0));
        assert_eq!(config.speed, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "grid_width": 10, "palette": { "food": [1, 2, 3] } }"#)
                .unwrap();
        assert_eq!(config.grid_width, 10);
        assert_eq!(config.grid_height, 24);
        assert_eq!(config.palette.food, Rgb(1, 2, 3));
        assert_eq!(config.palette.snake, Rgb(0, 255, 0));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let empty = GameConfig {
            grid_height: 0,
            ..Default::default()
        };
        assert!(empty.validate().is_err());

        let frozen = GameConfig {
            speed: 0,
            ..Default::default()
        };
        assert!(frozen.validate().is_err());

        let huge = GameConfig {
            grid_width: u32::MAX / 2,
            ..Default::default()
        };
        assert!(huge.validate().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn test_rgb_to_color() {
        let color: Color = Rgb(255, 0, 0).into();
        assert_eq!(color, Color::new(1.0, 0.0, 0.0, 1.0));
    }
}
