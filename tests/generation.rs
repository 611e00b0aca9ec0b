use std::collections::VecDeque;

use island_terrain::flood_fill::flood_fill;
use island_terrain::height_profile::{ColumnZone, HeightProfileCalculator};
use island_terrain::noise_field::NoiseField;
use island_terrain::rasterize::rasterize;
use island_terrain::shoreline::{shoreline_sand_pass, ShorelineParams};
use island_terrain::tilemap::Tilemap;
use island_terrain::{generate, BlockGrid, BlockType, TerrainConfig};

/// Rasterize and flood a grid, stopping before the sand pass.
fn flooded_grid(config: &TerrainConfig) -> BlockGrid {
    let noise = NoiseField::new(config.seed);
    let calc = HeightProfileCalculator::new(config, &noise);
    let mut grid = BlockGrid::new(config.columns, config.rows);
    rasterize(&mut grid, &calc);
    flood_fill(&mut grid, config.water_row());
    grid
}

#[test]
fn test_deterministic_generation() {
    let config = TerrainConfig::with_seed(2024);
    let a = generate(&config).unwrap();
    let b = generate(&config).unwrap();
    assert_eq!(a, b);

    let other = generate(&TerrainConfig::with_seed(2025)).unwrap();
    assert_ne!(a, other);
}

#[test]
fn test_island_stone_below_surface() {
    for seed in [1, 99, 4242] {
        let config = TerrainConfig::with_seed(seed);
        let noise = NoiseField::new(seed);
        let calc = HeightProfileCalculator::new(&config, &noise);

        for col in 0..config.columns {
            if calc.zone(col) != ColumnZone::Island {
                continue;
            }
            let profile = calc.profile(col);
            assert!(profile.stone_row() >= profile.top_row() + 1, "seed {seed} column {col}");
        }
    }
}

#[test]
fn test_no_water_above_water_row() {
    let config = TerrainConfig::with_seed(7);
    let grid = generate(&config).unwrap();
    let water_row = config.water_row();

    for (col, row, block) in grid.iter() {
        if block == BlockType::Water {
            assert!(row >= water_row, "water at ({col}, {row}) above row {water_row}");
        }
    }
    assert!(grid.count(BlockType::Water) > 0);
}

#[test]
fn test_flood_fill_idempotent_on_generated_grid() {
    let config = TerrainConfig::with_seed(31);
    let mut grid = generate(&config).unwrap();
    let before = grid.clone();

    let stats = flood_fill(&mut grid, config.water_row());
    assert_eq!(stats.filled, 0);
    assert_eq!(grid, before);
}

#[test]
fn test_every_water_cell_reachable_from_boundary() {
    let config = TerrainConfig::with_seed(55);
    let grid = generate(&config).unwrap();
    let (columns, rows) = (grid.columns(), grid.rows());

    let mut seen = Tilemap::new_with(columns, rows, false);
    let mut queue = VecDeque::new();
    for col in 0..columns {
        for row in 0..rows {
            let on_boundary = row == rows - 1 || col == 0 || col == columns - 1;
            if on_boundary && grid.is(col, row, BlockType::Water) {
                seen.set(col, row, true);
                queue.push_back((col, row));
            }
        }
    }
    let mut reached = 0;
    while let Some((col, row)) = queue.pop_front() {
        reached += 1;
        for (nx, ny) in grid.neighbors(col, row) {
            if !*seen.get(nx, ny) && grid.is(nx, ny, BlockType::Water) {
                seen.set(nx, ny, true);
                queue.push_back((nx, ny));
            }
        }
    }

    assert_eq!(reached, grid.count(BlockType::Water));
}

#[test]
fn test_enclosed_pocket_stays_air() {
    let config = TerrainConfig::with_seed(8);
    let noise = NoiseField::new(config.seed);
    let calc = HeightProfileCalculator::new(&config, &noise);
    let mut grid = BlockGrid::new(config.columns, config.rows);
    rasterize(&mut grid, &calc);

    // Carve a 3x3 cave deep in the island's stone
    let mid = config.columns / 2;
    for col in mid..mid + 3 {
        for row in 150..153 {
            assert_eq!(grid.get_block_type(col, row), BlockType::Stone);
            grid.set_block(col, row, BlockType::Air).unwrap();
        }
    }

    flood_fill(&mut grid, config.water_row());

    for col in mid..mid + 3 {
        for row in 150..153 {
            assert_eq!(grid.get_block_type(col, row), BlockType::Air, "({col}, {row})");
        }
    }
}

#[test]
fn test_sand_only_from_shore_or_above() {
    let config = TerrainConfig::with_seed(19);
    let before = flooded_grid(&config);
    let mut after = before.clone();
    let params = ShorelineParams::from_config(&config);
    let stats = shoreline_sand_pass(&mut after, &params);
    assert!(stats.converted() > 0);

    let borders_water = |col: usize, row: usize| {
        before
            .neighbors_8(col, row)
            .into_iter()
            .any(|(nx, ny)| before.is(nx, ny, BlockType::Water))
    };
    let converted = |col: usize, row: usize| {
        before.get_block_type(col, row) != BlockType::Sand && after.is(col, row, BlockType::Sand)
    };

    let mut changed = 0;
    for (col, row, block) in after.iter() {
        if block == before.get_block_type(col, row) {
            continue;
        }
        changed += 1;
        assert_eq!(block, BlockType::Sand);
        if borders_water(col, row) {
            continue;
        }

        // Otherwise a shore cell must sit directly above within max_depth, all converted
        let shore_above = (1..=params.max_depth).any(|depth| {
            row >= depth
                && (1..=depth).all(|d| converted(col, row - d))
                && borders_water(col, row - depth)
        });
        assert!(shore_above, "({col}, {row}) converted without a shore cell above");
    }
    assert_eq!(changed, stats.converted());
}

#[test]
fn test_edge_columns_have_no_stone() {
    let config = TerrainConfig::with_seed(3);
    let grid = generate(&config).unwrap();
    let width = config.edge_taper_width as usize;

    for col in (0..width).chain(config.columns - width..config.columns) {
        for row in 0..config.rows {
            assert_ne!(grid.get_block_type(col, row), BlockType::Stone, "stone at ({col}, {row})");
        }
    }
}

#[test]
fn test_interior_surface_matches_noise() {
    let config = TerrainConfig::with_seed(64);
    let grid = generate(&config).unwrap();
    let noise = NoiseField::new(config.seed);
    let taper = config.island_taper_width as usize;

    for col in config.island_start_col() + taper + 1..config.island_end_col() - taper - 1 {
        let expected = config.mean_ground_level
            + (noise.sample(col as f64 * config.noise_scale) * config.surface_variation).round() as i32;
        assert_eq!(grid.column_surface(col), Some(expected as usize), "column {col}");
        assert_eq!(grid.get_block_type(col, expected as usize), BlockType::Grass);
    }
}

#[test]
fn test_invalid_config_returns_error() {
    let config = TerrainConfig {
        edge_taper_width: -1.0,
        ..TerrainConfig::default()
    };
    assert!(generate(&config).is_err());
}

#[test]
fn test_extreme_constants_return_error() {
    let configs = [
        TerrainConfig {
            surface_variation: 1e10,
            ..TerrainConfig::default()
        },
        TerrainConfig {
            min_stone_gap: i32::MAX,
            ..TerrainConfig::default()
        },
        TerrainConfig {
            shoreline_scan_depth: usize::MAX,
            ..TerrainConfig::default()
        },
        TerrainConfig {
            edge_floor_offset: i32::MAX,
            ..TerrainConfig::default()
        },
        TerrainConfig {
            edge_stone_row: 200,
            ..TerrainConfig::default()
        },
    ];
    for config in &configs {
        assert!(generate(config).is_err(), "{config:?}");
    }
}
