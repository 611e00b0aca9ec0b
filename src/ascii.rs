//! ASCII rendering of block grids
//!
//! Renders a grid, or a window of it, as text with one character per cell.

use std::fs::File;
use std::io::{self, Write};

use crate::block::BlockType;
use crate::grid::BlockGrid;

/// Rectangular window of a grid, in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub col: usize,
    pub row: usize,
    pub columns: usize,
    pub rows: usize,
}

impl Viewport {
    pub fn full(grid: &BlockGrid) -> Self {
        Self {
            col: 0,
            row: 0,
            columns: grid.columns(),
            rows: grid.rows(),
        }
    }

    /// Clip the viewport to the grid.
    fn clipped(&self, grid: &BlockGrid) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
        let col_end = (self.col + self.columns).min(grid.columns());
        let row_end = (self.row + self.rows).min(grid.rows());
        (self.col.min(col_end)..col_end, self.row.min(row_end)..row_end)
    }
}

/// Render a window of the grid, one line per row.
pub fn render_viewport(grid: &BlockGrid, view: &Viewport) -> String {
    let (cols, rows) = view.clipped(grid);
    let mut output = String::with_capacity((cols.len() + 1) * rows.len());

    for row in rows {
        for col in cols.clone() {
            output.push(grid.get_block_type(col, row).glyph());
        }
        output.push('\n');
    }

    output
}

/// Render the whole grid.
pub fn render_grid(grid: &BlockGrid) -> String {
    render_viewport(grid, &Viewport::full(grid))
}

/// Legend mapping glyphs to block names.
pub fn legend() -> String {
    let mut legend = String::from("Legend:\n");
    for block in BlockType::all() {
        legend.push_str(&format!("  '{}' {}\n", block.glyph(), block.display_name()));
    }
    legend
}

/// Write the rendered grid and legend to a text file.
pub fn export_ascii(grid: &BlockGrid, path: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(render_grid(grid).as_bytes())?;
    writeln!(file)?;
    file.write_all(legend().as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_grid() {
        let mut grid = BlockGrid::new(3, 2);
        grid.set_block(0, 1, BlockType::Stone).unwrap();
        grid.set_block(1, 1, BlockType::Water).unwrap();
        grid.set_block(2, 0, BlockType::Grass).unwrap();

        assert_eq!(render_grid(&grid), "  \"\n#~ \n");
    }

    #[test]
    fn test_viewport_is_clipped() {
        let mut grid = BlockGrid::new(4, 4);
        grid.set_block(3, 3, BlockType::Sand).unwrap();

        let view = Viewport {
            col: 2,
            row: 2,
            columns: 10,
            rows: 10,
        };
        assert_eq!(render_viewport(&grid, &view), "  \n :\n");
    }

    #[test]
    fn test_legend_lists_every_block() {
        let legend = legend();
        for block in BlockType::all() {
            assert!(legend.contains(block.display_name()));
        }
    }
}
