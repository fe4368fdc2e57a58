use ggez::graphics::{self, Color, DrawMode, MeshBuilder, Rect};
use ggez::GameResult;

use crate::config::Palette;
use crate::food::Food;
use crate::grid::{Cell, Grid};
use crate::snake::Snake;

/// Something that can paint whole grid cells.
pub trait Surface {
    fn fill_cell(&mut self, cell: Cell, color: Color) -> GameResult;

    /// One-pixel border around the cell, interior untouched.
    fn outline_cell(&mut self, cell: Cell, color: Color) -> GameResult;
}

pub trait Drawable {
    fn draw(&self, surface: &mut dyn Surface, palette: &Palette) -> GameResult;
}

fn bordered_cell(
    surface: &mut dyn Surface,
    cell: Cell,
    fill: Color,
    border: Color,
) -> GameResult {
    surface.fill_cell(cell, fill)?;
    surface.outline_cell(cell, border)
}

impl Drawable for Snake {
    fn draw(&self, surface: &mut dyn Surface, palette: &Palette) -> GameResult {
        for &cell in self.cells() {
            bordered_cell(surface, cell, palette.snake.into(), palette.border.into())?;
        }
        if let Some(cell) = self.trailing() {
            surface.fill_cell(cell, palette.background.into())?;
        }
        Ok(())
    }
}

impl Drawable for Food {
    fn draw(&self, surface: &mut dyn Surface, palette: &Palette) -> GameResult {
        bordered_cell(surface, self.cell, palette.food.into(), palette.border.into())
    }
}

/// Batches cell rectangles into a single ggez mesh.
pub struct MeshSurface {
    builder: MeshBuilder,
    cell_size: u32,
}

impl MeshSurface {
    pub fn new(cell_size: u32) -> Self {
        Self {
            builder: MeshBuilder::new(),
            cell_size,
        }
    }

    fn rect(&self, cell: Cell) -> Rect {
        let (x, y) = Grid::to_pixels(cell, self.cell_size);
        let size = self.cell_size as f32;
        Rect::new(x, y, size, size)
    }

    pub fn into_mesh(self, ctx: &mut ggez::Context) -> graphics::Mesh {
        graphics::Mesh::from_data(ctx, self.builder.build())
    }
}

impl Surface for MeshSurface {
    fn fill_cell(&mut self, cell: Cell, color: Color) -> GameResult {
        let rect = self.rect(cell);
        self.builder.rectangle(DrawMode::fill(), rect, color)?;
        Ok(())
    }

    fn outline_cell(&mut self, cell: Cell, color: Color) -> GameResult {
        let rect = self.rect(cell);
        self.builder.rectangle(DrawMode::stroke(1.0), rect, color)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Rgb;
    use crate::grid::Direction;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Debug, PartialEq)]
    enum Paint {
        Fill(Cell, Color),
        Outline(Cell, Color),
    }

    #[derive(Default)]
    struct Recording(Vec<Paint>);

    impl Surface for Recording {
        fn fill_cell(&mut self, cell: Cell, color: Color) -> GameResult {
            self.0.push(Paint::Fill(cell, color));
            Ok(())
        }

        fn outline_cell(&mut self, cell: Cell, color: Color) -> GameResult {
            self.0.push(Paint::Outline(cell, color));
            Ok(())
        }
    }

    #[test]
    fn test_food_is_bordered() {
        let palette = Palette::default();
        let mut surface = Recording::default();
        Food { cell: Cell::new(2, 3) }.draw(&mut surface, &palette).unwrap();

        assert_eq!(
            surface.0,
            vec![
                Paint::Fill(Cell::new(2, 3), Rgb(255, 0, 0).into()),
                Paint::Outline(Cell::new(2, 3), Rgb(93, 216, 228).into()),
            ]
        );
    }

    #[test]
    fn test_snake_clears_trailing_cell() {
        let grid = Grid::new(10, 10);
        let palette = Palette::default();
        let mut snake =
            Snake::from_cells(vec![Cell::new(5, 5), Cell::new(4, 5)], Direction::Right);
        snake.advance(&grid, &mut StdRng::seed_from_u64(0));

        let mut surface = Recording::default();
        snake.draw(&mut surface, &palette).unwrap();

        let fills: Vec<_> = surface
            .0
            .iter()
            .filter(|paint| matches!(paint, Paint::Fill(..)))
            .collect();
        assert_eq!(
            fills,
            vec![
                &Paint::Fill(Cell::new(6, 5), palette.snake.into()),
                &Paint::Fill(Cell::new(5, 5), palette.snake.into()),
                &Paint::Fill(Cell::new(4, 5), palette.background.into()),
            ]
        );
    }
}
