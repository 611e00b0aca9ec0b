//! World generation pipeline
//!
//! Runs the stages in a fixed order over a single owned grid:
//! Allocate -> Rasterize -> FloodFill -> SandPass -> Done.
//! Configuration is validated before the grid is allocated, so a bad
//! configuration never produces a partially built grid. The grid is only
//! handed to the caller once every stage has finished.

use std::time::{Duration, Instant};

use tracing::{debug, debug_span, info};

use crate::config::TerrainConfig;
use crate::error::GenResult;
use crate::flood_fill::{self, FloodFillStats};
use crate::grid::BlockGrid;
use crate::height_profile::HeightProfileCalculator;
use crate::noise_field::NoiseField;
use crate::rasterize;
use crate::shoreline::{self, ShorelineParams, ShorelineStats};

/// Pipeline stages, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PipelineStage {
    Allocate,
    Rasterize,
    FloodFill,
    SandPass,
    Done,
}

impl PipelineStage {
    pub fn name(&self) -> &'static str {
        match self {
            PipelineStage::Allocate => "allocate",
            PipelineStage::Rasterize => "rasterize",
            PipelineStage::FloodFill => "flood fill",
            PipelineStage::SandPass => "sand pass",
            PipelineStage::Done => "done",
        }
    }

    /// Stage that follows this one; `Done` is terminal.
    pub fn next(&self) -> PipelineStage {
        match self {
            PipelineStage::Allocate => PipelineStage::Rasterize,
            PipelineStage::Rasterize => PipelineStage::FloodFill,
            PipelineStage::FloodFill => PipelineStage::SandPass,
            PipelineStage::SandPass | PipelineStage::Done => PipelineStage::Done,
        }
    }
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What each stage did and how long it took.
#[derive(Clone, Debug, Default)]
pub struct GenerationReport {
    pub seed: u32,
    pub island_columns: (usize, usize),
    pub water_row: usize,
    pub flood: FloodFillStats,
    pub shoreline: ShorelineStats,
    /// Wall time per completed stage, in execution order
    pub timings: Vec<(PipelineStage, Duration)>,
}

impl GenerationReport {
    pub fn total_time(&self) -> Duration {
        self.timings.iter().map(|(_, d)| *d).sum()
    }
}

/// A finished grid together with the configuration and report that produced it.
pub struct GeneratedWorld {
    pub config: TerrainConfig,
    pub grid: BlockGrid,
    pub report: GenerationReport,
}

/// Run the full pipeline and return the finished grid.
pub fn generate(config: &TerrainConfig) -> GenResult<BlockGrid> {
    generate_world(config).map(|world| world.grid)
}

/// Run the full pipeline, keeping the report alongside the grid.
pub fn generate_world(config: &TerrainConfig) -> GenResult<GeneratedWorld> {
    config.validate()?;

    let noise = NoiseField::new(config.seed);
    let calculator = HeightProfileCalculator::new(config, &noise);
    let shoreline_params = ShorelineParams::from_config(config);

    let mut report = GenerationReport {
        seed: config.seed,
        island_columns: (config.island_start_col(), config.island_end_col()),
        water_row: config.water_row(),
        ..GenerationReport::default()
    };
    debug!(
        seed = config.seed,
        columns = config.columns,
        rows = config.rows,
        island_start = report.island_columns.0,
        island_end = report.island_columns.1,
        water_row = report.water_row,
        "starting terrain generation"
    );

    let mut grid = BlockGrid::new(0, 0);
    let mut stage = PipelineStage::Allocate;
    while stage != PipelineStage::Done {
        let _span = debug_span!("stage", name = stage.name()).entered();
        let started = Instant::now();

        match stage {
            PipelineStage::Allocate => {
                grid = BlockGrid::new(config.columns, config.rows);
            }
            PipelineStage::Rasterize => {
                rasterize::rasterize(&mut grid, &calculator);
            }
            PipelineStage::FloodFill => {
                report.flood = flood_fill::flood_fill(&mut grid, report.water_row);
            }
            PipelineStage::SandPass => {
                report.shoreline = shoreline::shoreline_sand_pass(&mut grid, &shoreline_params);
            }
            PipelineStage::Done => {}
        }

        report.timings.push((stage, started.elapsed()));
        stage = stage.next();
    }

    info!(
        seed = config.seed,
        flooded = report.flood.filled,
        sand = report.shoreline.converted(),
        elapsed_ms = report.total_time().as_secs_f64() * 1000.0,
        "terrain generated"
    );

    Ok(GeneratedWorld {
        config: config.clone(),
        grid,
        report,
    })
}
