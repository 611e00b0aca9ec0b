use image::{ImageBuffer, Rgb, RgbImage};

use crate::grid::BlockGrid;

/// Render the grid to an image, `scale` pixels per cell.
pub fn render_grid_image(grid: &BlockGrid, scale: u32) -> RgbImage {
    let scale = scale.max(1);
    let mut img: RgbImage = ImageBuffer::new(grid.columns() as u32 * scale, grid.rows() as u32 * scale);

    for (col, row, block) in grid.iter() {
        let (r, g, b) = block.color();
        let px = col as u32 * scale;
        let py = row as u32 * scale;
        for dy in 0..scale {
            for dx in 0..scale {
                img.put_pixel(px + dx, py + dy, Rgb([r, g, b]));
            }
        }
    }

    img
}

/// Export the grid as a PNG, `scale` pixels per cell.
pub fn export_grid_png(grid: &BlockGrid, path: &str, scale: u32) -> Result<(), image::ImageError> {
    render_grid_image(grid, scale).save(path)
}
