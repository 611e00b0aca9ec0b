//! Error types for terrain generation
//!
//! Configuration problems are fatal and reported before any stage runs.
//! Row indices escaping the grid during blending are not errors; they are
//! clamped where they are computed.

use thiserror::Error;

/// Contradictory or out-of-range configuration constants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Grid too small to hold surface, stone and a water line, or too large to index by row.
    #[error("grid sides must be within {min}..={max}, got {columns}x{rows}")]
    InvalidDimensions {
        columns: usize,
        rows: usize,
        min: usize,
        max: usize,
    },

    /// A fraction outside its allowed range.
    #[error("{name} must be in (0, 1), got {value}")]
    InvalidFraction { name: &'static str, value: f64 },

    /// The island covers the whole grid, leaving no ocean.
    #[error("island width {island_width} leaves no ocean in a grid {columns} columns wide")]
    IslandTooWide { island_width: usize, columns: usize },

    /// A width, scale or amplitude that must be positive.
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// An amplitude, gap or depth too large for the grid.
    #[error("{name} must be below {max}, got {value}")]
    TooLarge { name: &'static str, value: f64, max: usize },

    /// Water line outside the grid.
    #[error("water row {water_row} is outside 0..{rows}")]
    WaterRowOutOfRange { water_row: usize, rows: usize },

    /// A target row level outside the grid.
    #[error("{name} must lie within 0..{rows}, got {value}")]
    LevelOutOfRange { name: &'static str, value: i64, rows: usize },

    /// The edge taper reaches into the island columns.
    #[error("edge taper width {edge_taper_width} reaches the island starting at column {island_start}")]
    EdgeTaperOverlapsIsland { edge_taper_width: f64, island_start: usize },

    /// The edge stone target is too shallow to keep stone out of every taper column.
    #[error("edge stone row {edge_stone_row} leaves stone at row {stone_row} of column {col} in a grid with {rows} rows")]
    EdgeStoneTooShallow {
        edge_stone_row: i64,
        col: usize,
        stone_row: i64,
        rows: usize,
    },
}

/// Errors from the grid store accessors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({col}, {row}) is outside the {columns}x{rows} grid")]
    OutOfBounds {
        col: usize,
        row: usize,
        columns: usize,
        rows: usize,
    },
}

/// Errors surfaced by the generation entry points and tools.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to export image: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for generation operations.
pub type GenResult<T> = Result<T, GenerationError>;
