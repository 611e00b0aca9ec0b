//! Per-column height profiles
//!
//! Turns a column index into the rows where the landmass starts and where
//! stone begins. Island columns follow the noise around the mean levels and
//! ease down to the ocean shelf near the island edges. Ocean columns deepen
//! from the shelf to the deep floor and then taper away to nothing at the
//! map edges.
//!
//! Every profile is a pure function of the column and the configuration.

use crate::config::TerrainConfig;
use crate::noise_field::NoiseField;

/// Easing exponent for the island edge taper.
const ISLAND_TAPER_EXPONENT: f64 = 0.75;
/// Easing exponent for the map edge taper.
const EDGE_TAPER_EXPONENT: f64 = 0.5;

/// Which zone a column belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnZone {
    Island,
    Ocean,
}

/// Target rows for a single column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeightProfile {
    /// Grass at `surface_row`, dirt down to `stone_row`, stone below.
    Island { surface_row: i32, stone_row: i32 },
    /// Sand from `floor_row` down to `stone_row`, stone below.
    /// A `stone_row` at or past the grid height means no stone in this column.
    Ocean { floor_row: i32, stone_row: i32 },
}

impl HeightProfile {
    pub fn zone(&self) -> ColumnZone {
        match self {
            HeightProfile::Island { .. } => ColumnZone::Island,
            HeightProfile::Ocean { .. } => ColumnZone::Ocean,
        }
    }

    /// First row of the landmass in this column.
    pub fn top_row(&self) -> i32 {
        match *self {
            HeightProfile::Island { surface_row, .. } => surface_row,
            HeightProfile::Ocean { floor_row, .. } => floor_row,
        }
    }

    pub fn stone_row(&self) -> i32 {
        match *self {
            HeightProfile::Island { stone_row, .. } | HeightProfile::Ocean { stone_row, .. } => stone_row,
        }
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Computes height profiles for every column of a configured map.
pub struct HeightProfileCalculator<'a> {
    config: &'a TerrainConfig,
    noise: &'a NoiseField,
    rows: i32,
    island_start: usize,
    island_end: usize,
}

impl<'a> HeightProfileCalculator<'a> {
    pub fn new(config: &'a TerrainConfig, noise: &'a NoiseField) -> Self {
        Self {
            config,
            noise,
            rows: config.rows as i32,
            island_start: config.island_start_col(),
            island_end: config.island_end_col(),
        }
    }

    pub fn zone(&self, col: usize) -> ColumnZone {
        if (self.island_start..self.island_end).contains(&col) {
            ColumnZone::Island
        } else {
            ColumnZone::Ocean
        }
    }

    pub fn profile(&self, col: usize) -> HeightProfile {
        match self.zone(col) {
            ColumnZone::Island => self.island_profile(col),
            ColumnZone::Ocean => self.ocean_profile(col),
        }
    }

    /// Distance from an island column to the nearer island edge column.
    fn distance_to_island_edge(&self, col: usize) -> usize {
        debug_assert_eq!(self.zone(col), ColumnZone::Island);
        (col - self.island_start).min(self.island_end - 1 - col)
    }

    /// Noise-driven island rows before any edge taper.
    pub fn island_base_rows(&self, col: usize) -> (i32, i32) {
        let c = self.config;

        let surface_offset = (self.noise.surface(col, c.noise_scale) * c.surface_variation).round() as i32;
        let stone_offset =
            (self.noise.stone(col, c.noise_scale, c.stone_phase) * c.stone_variation).round() as i32;

        let surface = c.mean_ground_level.saturating_add(surface_offset);
        let stone = c
            .mean_stone_level
            .saturating_add(stone_offset)
            .max(surface.saturating_add(c.min_stone_gap));
        (surface, stone)
    }

    fn island_profile(&self, col: usize) -> HeightProfile {
        let c = self.config;
        let (mut surface, mut stone) = self.island_base_rows(col);

        let dist = self.distance_to_island_edge(col) as f64;
        if dist < c.island_taper_width {
            let blend = (dist / c.island_taper_width).powf(ISLAND_TAPER_EXPONENT);
            surface = lerp(c.ocean_near_floor_row as f64, surface as f64, blend).round() as i32;
            stone = lerp(c.ocean_near_stone_row as f64, stone as f64, blend).round() as i32;
            stone = stone.max(surface.saturating_add(c.min_stone_gap));
        }

        // Leave room for at least one row of stone under the surface
        let surface_row = surface.clamp(0, self.rows - 2);
        let stone_row = stone.clamp(surface_row + 1, self.rows - 1);

        HeightProfile::Island {
            surface_row,
            stone_row,
        }
    }

    fn ocean_profile(&self, col: usize) -> HeightProfile {
        ocean_profile(self.config, col)
    }
}

/// Ocean rows for a column outside the island. Depends only on the configuration,
/// so validation can check the edge taper without building a calculator.
pub fn ocean_profile(config: &TerrainConfig, col: usize) -> HeightProfile {
    let c = config;
    let rows = c.rows as i32;
    let island_start = c.island_start_col();
    let island_end = c.island_end_col();

    let dist_to_island = if col < island_start {
        island_start - col
    } else {
        (col + 1).saturating_sub(island_end)
    };
    let t = (dist_to_island as f64 / c.deep_ocean_transition_width()).min(1.0);
    let mut floor = lerp(c.ocean_near_floor_row as f64, c.deep_ocean_floor_row as f64, t);
    let mut stone = lerp(c.ocean_near_stone_row as f64, c.deep_ocean_stone_row as f64, t);

    let dist_to_edge = col.min(c.columns - 1 - col) as f64;
    let edge_blend = (dist_to_edge / c.edge_taper_width).min(1.0).powf(EDGE_TAPER_EXPONENT);
    floor = lerp(c.edge_floor_row() as f64, floor, edge_blend);
    stone = lerp(c.edge_stone_row as f64, stone, edge_blend);

    let floor_row = (floor.round() as i32).clamp(0, rows - 1);
    let mut stone_row = (stone.round() as i32).max(0);
    if stone_row < rows {
        stone_row = stone_row.max(floor_row + 1);
    }

    HeightProfile::Ocean { floor_row, stone_row }
}
