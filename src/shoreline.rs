//! Shoreline sand pass
//!
//! Turns land touching the water into sand and lets that sand reach a few
//! rows down into the dirt and stone beneath it.
//!
//! The pass is two-phase. Detection and downward propagation only read the
//! grid as it was when the pass started and record conversions in a plan;
//! the plan is committed in one step at the end. A conversion can therefore
//! never influence another conversion of the same pass through the grid,
//! and the result does not depend on scan order.

use tracing::debug;

use crate::block::BlockType;
use crate::config::TerrainConfig;
use crate::grid::BlockGrid;
use crate::tilemap::Tilemap;

/// Limits for the shoreline pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShorelineParams {
    /// Nominal water row
    pub water_row: usize,
    /// Rows above the water row a shore cell may sit
    pub max_raise: usize,
    /// Rows sand may propagate below a shore cell
    pub max_depth: usize,
    /// Rows below the water row scanned for shore cells
    pub scan_depth: usize,
}

impl ShorelineParams {
    pub fn from_config(config: &TerrainConfig) -> Self {
        Self {
            water_row: config.water_row(),
            max_raise: config.shoreline_max_raise,
            max_depth: config.shoreline_max_depth,
            scan_depth: config.shoreline_scan_depth,
        }
    }

    /// Rows scanned for shore cells, clipped to the grid.
    pub fn scan_rows(&self, rows: usize) -> std::ops::Range<usize> {
        let top = self.water_row.saturating_sub(self.max_raise);
        let bottom = self.water_row.saturating_add(self.scan_depth).saturating_add(1).min(rows);
        top.min(bottom)..bottom
    }
}

/// Summary of a committed sand pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShorelineStats {
    /// Land cells found next to water
    pub shore_cells: usize,
    /// Cells added by downward propagation
    pub propagated: usize,
}

impl ShorelineStats {
    pub fn converted(&self) -> usize {
        self.shore_cells + self.propagated
    }
}

/// Conversions recorded by the detect and propagate phases, not yet applied.
#[derive(Clone, Debug)]
pub struct SandPlan {
    marked: Tilemap<bool>,
    conversions: Vec<(usize, usize)>,
    stats: ShorelineStats,
}

impl SandPlan {
    fn new(columns: usize, rows: usize) -> Self {
        Self {
            marked: Tilemap::new_with(columns, rows, false),
            conversions: Vec::new(),
            stats: ShorelineStats::default(),
        }
    }

    /// Record a cell; returns false if it was already recorded.
    fn mark(&mut self, col: usize, row: usize) -> bool {
        if *self.marked.get(col, row) {
            return false;
        }
        self.marked.set(col, row, true);
        self.conversions.push((col, row));
        true
    }

    pub fn is_marked(&self, col: usize, row: usize) -> bool {
        self.marked.try_get(col, row).copied().unwrap_or(false)
    }

    /// Recorded cells in the order they were found.
    pub fn conversions(&self) -> &[(usize, usize)] {
        &self.conversions
    }

    pub fn stats(&self) -> ShorelineStats {
        self.stats
    }
}

fn touches_water(grid: &BlockGrid, col: usize, row: usize) -> bool {
    grid.neighbors_8(col, row)
        .into_iter()
        .any(|(nx, ny)| grid.is(nx, ny, BlockType::Water))
}

/// Detect shore cells and propagate sand downward without touching the grid.
pub fn plan_sand(grid: &BlockGrid, params: &ShorelineParams) -> SandPlan {
    let mut plan = SandPlan::new(grid.columns(), grid.rows());

    // Phase A: land cells within the scan window that border water
    let mut shore = Vec::new();
    for row in params.scan_rows(grid.rows()) {
        for col in 0..grid.columns() {
            let block = grid.get_block_type(col, row);
            if block.is_shore_convertible() && touches_water(grid, col, row) && plan.mark(col, row) {
                shore.push((col, row));
            }
        }
    }
    plan.stats.shore_cells = shore.len();

    // Phase B: walk down from each shore cell while the cell above is recorded
    for &(col, row) in &shore {
        let mut above = row;
        for _ in 0..params.max_depth {
            let below = above + 1;
            if below >= grid.rows() {
                break;
            }
            if !(grid.get_block_type(col, below).is_subsurface() && plan.is_marked(col, above)) {
                break;
            }
            if plan.mark(col, below) {
                plan.stats.propagated += 1;
            }
            above = below;
        }
    }

    plan
}

/// Apply every recorded conversion in one step.
pub fn commit_sand(grid: &mut BlockGrid, plan: &SandPlan) {
    for &(col, row) in plan.conversions() {
        grid.put(col, row, BlockType::Sand);
    }
}

/// Run the full detect, propagate and commit pass.
pub fn shoreline_sand_pass(grid: &mut BlockGrid, params: &ShorelineParams) -> ShorelineStats {
    let plan = plan_sand(grid, params);
    commit_sand(grid, &plan);

    let stats = plan.stats();
    debug!(
        shore_cells = stats.shore_cells,
        propagated = stats.propagated,
        "shoreline sand committed"
    );
    stats
}
