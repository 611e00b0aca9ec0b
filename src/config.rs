//! Terrain generation configuration
//!
//! All constants are fixed before a generation run. Zone geometry (island
//! column range, water row, transition widths) is derived from them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, GenResult};
use crate::height_profile::ocean_profile;

/// Smallest grid the pipeline accepts in either dimension.
pub const MIN_GRID_SIZE: usize = 8;
/// Largest grid the pipeline accepts in either dimension.
pub const MAX_GRID_SIZE: usize = 1 << 16;

/// Parameters for terrain generation.
///
/// Row values are grid row indices; row 0 is the top of the map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Grid width in columns
    pub columns: usize,
    /// Grid height in rows
    pub rows: usize,
    /// Explicit noise seed
    pub seed: u32,

    /// Fraction of the columns covered by the island
    pub island_width_fraction: f64,
    /// Water line as a fraction of the rows
    pub water_level_fraction: f64,

    /// Noise-free island surface row
    pub mean_ground_level: i32,
    /// Noise-free island stone row
    pub mean_stone_level: i32,
    /// Surface noise amplitude in rows
    pub surface_variation: f64,
    /// Stone noise amplitude in rows
    pub stone_variation: f64,
    /// Noise frequency per column
    pub noise_scale: f64,
    /// Phase offset decorrelating the stone layer from the surface layer
    pub stone_phase: f64,
    /// Minimum rows between island surface and stone before blending
    pub min_stone_gap: i32,

    /// Columns over which the island edges blend down to the ocean shelf
    pub island_taper_width: f64,
    /// Ocean floor row right next to the island
    pub ocean_near_floor_row: i32,
    /// Ocean stone row right next to the island
    pub ocean_near_stone_row: i32,
    /// Deep ocean floor row
    pub deep_ocean_floor_row: i32,
    /// Deep ocean stone row
    pub deep_ocean_stone_row: i32,
    /// Scales the shelf-to-deep transition, measured in half island start columns
    pub deep_ocean_transition_factor: f64,

    /// Columns at each map edge over which the ocean tapers away
    pub edge_taper_width: f64,
    /// Stone target at the map edges; at or past the row count means no stone
    pub edge_stone_row: i32,
    /// Extra depth of the sand floor at the map edges, below the deep ocean floor
    pub edge_floor_offset: i32,

    /// How far above the water row a shore cell may sit and still become sand
    pub shoreline_max_raise: usize,
    /// How far sand propagates downward below a shore cell
    pub shoreline_max_depth: usize,
    /// Rows below the water row scanned for shore cells
    pub shoreline_scan_depth: usize,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            columns: 400,
            rows: 200,
            seed: 12345,

            island_width_fraction: 0.6,
            water_level_fraction: 0.45,

            mean_ground_level: 78,
            mean_stone_level: 92,
            surface_variation: 8.0,
            stone_variation: 6.0,
            noise_scale: 0.035,
            stone_phase: 137.5,
            min_stone_gap: 3,

            island_taper_width: 30.0,
            ocean_near_floor_row: 100,
            ocean_near_stone_row: 112,
            deep_ocean_floor_row: 150,
            deep_ocean_stone_row: 165,
            deep_ocean_transition_factor: 1.0,

            edge_taper_width: 20.0,
            // Far enough below the grid that sqrt easing keeps stone out of every taper column
            edge_stone_row: 2000,
            edge_floor_offset: 10,

            shoreline_max_raise: 2,
            shoreline_max_depth: 3,
            shoreline_scan_depth: 12,
        }
    }
}

impl TerrainConfig {
    /// Default configuration with a different seed.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> GenResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> GenResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> GenResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn island_width(&self) -> usize {
        (self.columns as f64 * self.island_width_fraction).round() as usize
    }

    /// First island column (inclusive).
    pub fn island_start_col(&self) -> usize {
        self.columns.saturating_sub(self.island_width()) / 2
    }

    /// One past the last island column.
    pub fn island_end_col(&self) -> usize {
        self.island_start_col() + self.island_width()
    }

    /// Nominal water line; flood fill never places water above it.
    pub fn water_row(&self) -> usize {
        (self.rows as f64 * self.water_level_fraction).round() as usize
    }

    /// Columns over which the ocean deepens from the shelf to the deep floor.
    pub fn deep_ocean_transition_width(&self) -> f64 {
        (self.island_start_col() as f64 / 2.0 * self.deep_ocean_transition_factor).max(1.0)
    }

    /// Sand floor target at the map edges.
    pub fn edge_floor_row(&self) -> i32 {
        self.deep_ocean_floor_row.saturating_add(self.edge_floor_offset)
    }

    /// Check every constant before anything is allocated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sides = MIN_GRID_SIZE..=MAX_GRID_SIZE;
        if !sides.contains(&self.columns) || !sides.contains(&self.rows) {
            return Err(ConfigError::InvalidDimensions {
                columns: self.columns,
                rows: self.rows,
                min: MIN_GRID_SIZE,
                max: MAX_GRID_SIZE,
            });
        }

        for (name, value) in [
            ("island_width_fraction", self.island_width_fraction),
            ("water_level_fraction", self.water_level_fraction),
        ] {
            if !(value > 0.0 && value < 1.0) {
                return Err(ConfigError::InvalidFraction { name, value });
            }
        }

        let island_width = self.island_width();
        if island_width == 0 || island_width >= self.columns || self.island_start_col() == 0 {
            return Err(ConfigError::IslandTooWide {
                island_width,
                columns: self.columns,
            });
        }

        for (name, value) in [
            ("island_taper_width", self.island_taper_width),
            ("edge_taper_width", self.edge_taper_width),
            ("noise_scale", self.noise_scale),
            ("deep_ocean_transition_factor", self.deep_ocean_transition_factor),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        for (name, value) in [
            ("surface_variation", self.surface_variation),
            ("stone_variation", self.stone_variation),
            ("min_stone_gap", self.min_stone_gap as f64),
            ("edge_floor_offset", self.edge_floor_offset as f64),
        ] {
            if value < 0.0 || value.is_nan() {
                return Err(ConfigError::NonPositive { name, value });
            }
            if value >= self.rows as f64 {
                return Err(ConfigError::TooLarge {
                    name,
                    value,
                    max: self.rows,
                });
            }
        }
        for (name, value) in [
            ("shoreline_max_raise", self.shoreline_max_raise),
            ("shoreline_max_depth", self.shoreline_max_depth),
            ("shoreline_scan_depth", self.shoreline_scan_depth),
        ] {
            if value > self.rows {
                return Err(ConfigError::TooLarge {
                    name,
                    value: value as f64,
                    max: self.rows + 1,
                });
            }
        }

        let water_row = self.water_row();
        if water_row == 0 || water_row >= self.rows {
            return Err(ConfigError::WaterRowOutOfRange {
                water_row,
                rows: self.rows,
            });
        }

        for (name, value) in [
            ("mean_ground_level", self.mean_ground_level),
            ("mean_stone_level", self.mean_stone_level),
            ("ocean_near_floor_row", self.ocean_near_floor_row),
            ("ocean_near_stone_row", self.ocean_near_stone_row),
            ("deep_ocean_floor_row", self.deep_ocean_floor_row),
            ("deep_ocean_stone_row", self.deep_ocean_stone_row),
            ("edge_floor_row", self.edge_floor_row()),
        ] {
            if value < 0 || value as usize >= self.rows {
                return Err(ConfigError::LevelOutOfRange {
                    name,
                    value: value as i64,
                    rows: self.rows,
                });
            }
        }

        let island_start = self.island_start_col();
        if self.edge_taper_width > island_start as f64 {
            return Err(ConfigError::EdgeTaperOverlapsIsland {
                edge_taper_width: self.edge_taper_width,
                island_start,
            });
        }

        // Every column inside the edge taper must round its stone row past the grid
        let rows = self.rows as i32;
        let taper_columns = self.edge_taper_width.ceil() as usize;
        for col in (0..taper_columns).chain(self.columns - taper_columns..self.columns) {
            let dist_to_edge = col.min(self.columns - 1 - col) as f64;
            if dist_to_edge >= self.edge_taper_width {
                continue;
            }
            let stone_row = ocean_profile(self, col).stone_row();
            if stone_row < rows {
                return Err(ConfigError::EdgeStoneTooShallow {
                    edge_stone_row: self.edge_stone_row as i64,
                    col,
                    stone_row: stone_row as i64,
                    rows: self.rows,
                });
            }
        }

        Ok(())
    }
}
