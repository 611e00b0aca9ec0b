//! Ocean flood fill
//!
//! Breadth-first search from the map boundary that turns every reachable
//! Air cell at or below the water row into Water. Air pockets sealed off
//! by solid blocks are never reached and stay Air as caves.

use std::collections::VecDeque;

use tracing::debug;

use crate::block::BlockType;
use crate::grid::BlockGrid;
use crate::tilemap::Tilemap;

/// Outcome of a flood fill run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FloodFillStats {
    /// Cells queued as BFS seeds
    pub seeds: usize,
    /// Cells converted from Air to Water
    pub filled: usize,
}

fn is_fillable(grid: &BlockGrid, col: usize, row: usize, water_row: usize) -> bool {
    row >= water_row && grid.is(col, row, BlockType::Air)
}

/// Flood the grid with water from its bottom and side edges.
///
/// Seeds are the Air cells of the bottom row plus the Air cells of the
/// first and last columns at or below `water_row`. Water only spreads
/// through 4-connected Air cells at or below `water_row`.
pub fn flood_fill(grid: &mut BlockGrid, water_row: usize) -> FloodFillStats {
    let columns = grid.columns();
    let rows = grid.rows();
    let mut stats = FloodFillStats::default();

    if columns == 0 || rows == 0 || water_row >= rows {
        return stats;
    }

    let mut visited = Tilemap::new_with(columns, rows, false);
    let mut queue = VecDeque::new();

    let bottom = rows - 1;
    let bottom_row = (0..columns).map(|col| (col, bottom));
    let side_columns = (water_row..rows).flat_map(|row| [(0, row), (columns - 1, row)]);

    for (col, row) in bottom_row.chain(side_columns) {
        if !*visited.get(col, row) && is_fillable(grid, col, row, water_row) {
            visited.set(col, row, true);
            queue.push_back((col, row));
        }
    }
    stats.seeds = queue.len();

    while let Some((col, row)) = queue.pop_front() {
        // Cells are marked on enqueue, but the grid may still have changed underneath
        if !is_fillable(grid, col, row, water_row) {
            continue;
        }
        grid.put(col, row, BlockType::Water);
        stats.filled += 1;

        for (nx, ny) in grid.neighbors(col, row) {
            if !*visited.get(nx, ny) && is_fillable(grid, nx, ny, water_row) {
                visited.set(nx, ny, true);
                queue.push_back((nx, ny));
            }
        }
    }

    debug!(seeds = stats.seeds, filled = stats.filled, water_row, "flood fill complete");
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stone box with an open bottom-left corridor and a sealed 3x3 pocket.
    fn basin() -> BlockGrid {
        let mut grid = BlockGrid::new(12, 10);
        for col in 0..12 {
            for row in 0..10 {
                grid.set_block(col, row, BlockType::Stone).unwrap();
            }
        }
        // Open channel along the bottom row and up the left edge
        for col in 0..6 {
            grid.set_block(col, 9, BlockType::Air).unwrap();
        }
        for row in 2..10 {
            grid.set_block(0, row, BlockType::Air).unwrap();
        }
        // Sealed pocket
        for col in 7..10 {
            for row in 4..7 {
                grid.set_block(col, row, BlockType::Air).unwrap();
            }
        }
        grid
    }

    #[test]
    fn test_fills_open_channel() {
        let mut grid = basin();
        let stats = flood_fill(&mut grid, 4);

        assert_eq!(grid.get_block_type(3, 9), BlockType::Water);
        assert_eq!(grid.get_block_type(0, 4), BlockType::Water);
        // Above the water row the channel stays dry
        assert_eq!(grid.get_block_type(0, 3), BlockType::Air);
        assert_eq!(grid.get_block_type(0, 2), BlockType::Air);
        // 6 bottom cells plus rows 4..9 of column 0 (row 9 already counted)
        assert_eq!(stats.filled, 6 + 5);
    }

    #[test]
    fn test_enclosed_pocket_stays_air() {
        let mut grid = basin();
        flood_fill(&mut grid, 0);

        for col in 7..10 {
            for row in 4..7 {
                assert_eq!(grid.get_block_type(col, row), BlockType::Air, "({col}, {row})");
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let mut grid = basin();
        let first = flood_fill(&mut grid, 4);
        let snapshot = grid.clone();
        let second = flood_fill(&mut grid, 4);

        assert!(first.filled > 0);
        assert_eq!(second.filled, 0);
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn test_nothing_above_water_row() {
        let mut grid = BlockGrid::new(8, 8);
        flood_fill(&mut grid, 5);

        for (_, row, block) in grid.iter() {
            if row < 5 {
                assert_eq!(block, BlockType::Air);
            } else {
                assert_eq!(block, BlockType::Water);
            }
        }
    }

    #[test]
    fn test_water_row_below_grid_is_noop() {
        let mut grid = BlockGrid::new(4, 4);
        let stats = flood_fill(&mut grid, 4);
        assert_eq!(stats, FloodFillStats::default());
        assert_eq!(grid.count(BlockType::Water), 0);
    }
}
