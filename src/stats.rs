//! Block statistics for a generated grid

use std::collections::BTreeMap;

use crate::block::BlockType;
use crate::grid::BlockGrid;

/// Per-block counts for a grid.
#[derive(Clone, Debug, Default)]
pub struct GridStats {
    pub total_cells: usize,
    pub air: usize,
    pub water: usize,
    pub sand: usize,
    pub dirt: usize,
    pub grass: usize,
    pub stone: usize,
    /// Highest non-Air row over all columns
    pub highest_surface: Option<usize>,
}

impl GridStats {
    pub fn solid_cells(&self) -> usize {
        self.sand + self.dirt + self.grass + self.stone
    }

    pub fn fraction(&self, count: usize) -> f64 {
        if self.total_cells == 0 {
            0.0
        } else {
            count as f64 / self.total_cells as f64
        }
    }

    pub fn count(&self, block: BlockType) -> usize {
        match block {
            BlockType::Air => self.air,
            BlockType::Water => self.water,
            BlockType::Sand => self.sand,
            BlockType::Dirt => self.dirt,
            BlockType::Grass => self.grass,
            BlockType::Stone => self.stone,
        }
    }

    /// Counts keyed by block name, for display.
    pub fn by_name(&self) -> BTreeMap<&'static str, usize> {
        BlockType::all()
            .iter()
            .map(|b| (b.display_name(), self.count(*b)))
            .collect()
    }
}

/// Count every block in the grid.
pub fn grid_stats(grid: &BlockGrid) -> GridStats {
    let mut stats = GridStats {
        total_cells: grid.columns() * grid.rows(),
        ..GridStats::default()
    };

    for (_, _, block) in grid.iter() {
        match block {
            BlockType::Air => stats.air += 1,
            BlockType::Water => stats.water += 1,
            BlockType::Sand => stats.sand += 1,
            BlockType::Dirt => stats.dirt += 1,
            BlockType::Grass => stats.grass += 1,
            BlockType::Stone => stats.stone += 1,
        }
    }

    stats.highest_surface = (0..grid.columns()).filter_map(|col| grid.column_surface(col)).min();
    stats
}
