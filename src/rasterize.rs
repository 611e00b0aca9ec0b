//! Landmass rasterization
//!
//! Writes each column's height profile into the grid as blocks.

use tracing::debug;

use crate::block::BlockType;
use crate::grid::BlockGrid;
use crate::height_profile::{HeightProfile, HeightProfileCalculator};

/// Block for row `row` of a column with the given profile.
///
/// Ocean columns check stone before sand: when the edge taper has pushed
/// stone past the bottom of the grid, nothing else may claim that depth.
/// A stoneless ocean column is sand from its floor to the bottom row; only
/// the rows above the floor stay Air.
pub fn block_for_row(profile: &HeightProfile, row: i32, rows: i32) -> BlockType {
    match *profile {
        HeightProfile::Island {
            surface_row,
            stone_row,
        } => {
            if row >= stone_row {
                BlockType::Stone
            } else if row > surface_row {
                BlockType::Dirt
            } else if row == surface_row {
                BlockType::Grass
            } else {
                BlockType::Air
            }
        }
        HeightProfile::Ocean {
            floor_row,
            stone_row,
        } => {
            if stone_row < rows && row >= stone_row {
                BlockType::Stone
            } else if row >= floor_row && row < stone_row {
                BlockType::Sand
            } else {
                BlockType::Air
            }
        }
    }
}

/// Fill one column of the grid from its profile.
pub fn rasterize_column(grid: &mut BlockGrid, col: usize, profile: &HeightProfile) {
    let rows = grid.rows() as i32;
    for row in 0..grid.rows() {
        grid.put(col, row, block_for_row(profile, row as i32, rows));
    }
}

/// Rasterize every column of the grid. Every cell is written.
pub fn rasterize(grid: &mut BlockGrid, calculator: &HeightProfileCalculator) {
    for col in 0..grid.columns() {
        let profile = calculator.profile(col);
        rasterize_column(grid, col, &profile);
    }
    debug!(columns = grid.columns(), rows = grid.rows(), "landmass rasterized");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TerrainConfig;
    use crate::noise_field::NoiseField;

    #[test]
    fn test_island_column_layers() {
        let profile = HeightProfile::Island {
            surface_row: 3,
            stone_row: 6,
        };
        let mut grid = BlockGrid::new(1, 8);
        rasterize_column(&mut grid, 0, &profile);

        let column: Vec<BlockType> = (0..8).map(|r| grid.get_block_type(0, r)).collect();
        assert_eq!(
            column,
            vec![
                BlockType::Air,
                BlockType::Air,
                BlockType::Air,
                BlockType::Grass,
                BlockType::Dirt,
                BlockType::Dirt,
                BlockType::Stone,
                BlockType::Stone,
            ]
        );
    }

    #[test]
    fn test_ocean_column_layers() {
        let profile = HeightProfile::Ocean {
            floor_row: 4,
            stone_row: 6,
        };
        assert_eq!(block_for_row(&profile, 3, 8), BlockType::Air);
        assert_eq!(block_for_row(&profile, 4, 8), BlockType::Sand);
        assert_eq!(block_for_row(&profile, 5, 8), BlockType::Sand);
        assert_eq!(block_for_row(&profile, 6, 8), BlockType::Stone);
        assert_eq!(block_for_row(&profile, 7, 8), BlockType::Stone);
    }

    #[test]
    fn test_ocean_column_without_stone() {
        let profile = HeightProfile::Ocean {
            floor_row: 5,
            stone_row: 500,
        };
        let mut grid = BlockGrid::new(1, 8);
        rasterize_column(&mut grid, 0, &profile);

        assert_eq!(grid.count(BlockType::Stone), 0);
        assert_eq!(grid.get_block_type(0, 4), BlockType::Air);
        assert_eq!(grid.get_block_type(0, 5), BlockType::Sand);
        assert_eq!(grid.get_block_type(0, 7), BlockType::Sand);
    }

    #[test]
    fn test_rasterize_full_grid() {
        let config = TerrainConfig::default();
        let noise = NoiseField::new(config.seed);
        let calc = HeightProfileCalculator::new(&config, &noise);
        let mut grid = BlockGrid::new(config.columns, config.rows);

        rasterize(&mut grid, &calc);

        // Island columns carry exactly one grass block on top
        let mid = config.columns / 2;
        let surface = grid.column_surface(mid).unwrap();
        assert_eq!(grid.get_block_type(mid, surface), BlockType::Grass);
        assert_eq!(grid.get_block_type(mid, config.rows - 1), BlockType::Stone);

        // No water before the flood fill
        assert_eq!(grid.count(BlockType::Water), 0);
        assert_eq!(grid.get_block_type(0, 0), BlockType::Air);
    }
}
