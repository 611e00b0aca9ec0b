//! Profiling tool timing each generation stage

use std::time::Duration;

use island_terrain::{generate_world, TerrainConfig};

const RUNS: u32 = 10;

fn main() {
    let config = TerrainConfig::with_seed(1337);

    println!("=== Performance Profiling ===");
    println!(
        "Grid size: {}x{} ({} cells)",
        config.columns,
        config.rows,
        config.columns * config.rows
    );
    println!("Runs: {}", RUNS);
    println!();

    let mut totals: Vec<(String, Duration)> = Vec::new();
    let mut worst = Duration::ZERO;

    for run in 0..RUNS {
        let world = match generate_world(&config) {
            Ok(world) => world,
            Err(err) => {
                eprintln!("generation failed: {err}");
                std::process::exit(1);
            }
        };

        for (i, (stage, elapsed)) in world.report.timings.iter().enumerate() {
            if run == 0 {
                totals.push((stage.name().to_string(), Duration::ZERO));
            }
            totals[i].1 += *elapsed;
        }
        worst = worst.max(world.report.total_time());
    }

    let total: Duration = totals.iter().map(|(_, d)| *d).sum();
    println!("=== Summary (mean per run) ===");
    for (name, elapsed) in &totals {
        println!(
            "{:<10} {:>8.2}% ({:?})",
            name,
            100.0 * elapsed.as_secs_f64() / total.as_secs_f64().max(f64::EPSILON),
            *elapsed / RUNS
        );
    }
    println!("─────────────────────────────────");
    println!("Mean total: {:?}", total / RUNS);
    println!("Worst run:  {:?}", worst);
}
