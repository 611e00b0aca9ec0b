use clap::Parser;
use tracing_subscriber::EnvFilter;

use island_terrain::{ascii, export, stats, GenResult, TerrainConfig};

#[derive(Parser, Debug)]
#[command(name = "island_terrain")]
#[command(about = "Generate a side-view island terrain grid")]
struct Args {
    /// Width of the grid in columns
    #[arg(short = 'W', long)]
    width: Option<usize>,

    /// Height of the grid in rows
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Noise seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u32>,

    /// Load terrain configuration from a JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// Print the grid as ASCII to stdout
    #[arg(long)]
    ascii: bool,

    /// Write the ASCII grid and legend to a text file
    #[arg(long)]
    export_ascii: Option<String>,

    /// Export the grid as a PNG image
    #[arg(long)]
    png: Option<String>,

    /// Pixels per cell for PNG export
    #[arg(long, default_value = "2")]
    png_scale: u32,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> GenResult<()> {
    let mut config = match &args.config {
        Some(path) => TerrainConfig::from_json_file(path)?,
        None => TerrainConfig::default(),
    };
    if let Some(width) = args.width {
        config.columns = width;
    }
    if let Some(height) = args.height {
        config.rows = height;
    }
    // A config file keeps its own seed unless one is given explicitly
    match args.seed {
        Some(seed) => config.seed = seed,
        None if args.config.is_none() => config.seed = rand::random(),
        None => {}
    }

    if args.dump_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    println!("Generating terrain with seed: {}", config.seed);
    println!("Grid size: {}x{}", config.columns, config.rows);

    let world = island_terrain::generate_world(&config)?;
    let report = &world.report;

    println!(
        "Island columns {}..{}, water row {}",
        report.island_columns.0, report.island_columns.1, report.water_row
    );
    println!("Flood fill: {} seeds, {} water cells", report.flood.seeds, report.flood.filled);
    println!(
        "Shoreline: {} shore cells, {} propagated",
        report.shoreline.shore_cells, report.shoreline.propagated
    );
    for (stage, elapsed) in &report.timings {
        println!("  {:<10} {:?}", stage.name(), elapsed);
    }
    println!("Total: {:?}", report.total_time());

    let grid_stats = stats::grid_stats(&world.grid);
    for (name, count) in grid_stats.by_name() {
        println!(
            "  {:<6} {:>7} ({:.1}%)",
            name,
            count,
            100.0 * grid_stats.fraction(count)
        );
    }

    if args.ascii {
        print!("{}", ascii::render_grid(&world.grid));
        print!("{}", ascii::legend());
    }

    if let Some(path) = &args.export_ascii {
        ascii::export_ascii(&world.grid, path)?;
        println!("Wrote ASCII grid to {}", path);
    }

    if let Some(path) = &args.png {
        export::export_grid_png(&world.grid, path, args.png_scale)?;
        println!("Wrote PNG to {}", path);
    }

    Ok(())
}
