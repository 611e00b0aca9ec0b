//! Island terrain generation library
//!
//! Builds the static block grid for a side-view survival map: one noisy
//! island tapering into ocean, flooded with water up to a fixed line, with
//! a sand shoreline. `world::generate` runs the whole pipeline.

pub mod ascii;
pub mod block;
pub mod config;
pub mod error;
pub mod export;
pub mod flood_fill;
pub mod grid;
pub mod height_profile;
pub mod noise_field;
pub mod rasterize;
pub mod shoreline;
pub mod stats;
pub mod tilemap;
pub mod world;

pub use block::BlockType;
pub use config::TerrainConfig;
pub use error::{ConfigError, GenResult, GenerationError, GridError};
pub use grid::BlockGrid;
pub use world::{generate, generate_world, GeneratedWorld, GenerationReport, PipelineStage};
