use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shoretile::{
    config::Config,
    render::{preview, GridExport},
    snapshot::SimulationFile,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Resolve shoreline tiles for a simulation map")]
struct Cli {
    /// Path to the simulation JSON file
    #[arg(long, default_value = "assets/test.sim.json")]
    simulation: PathBuf,

    /// Engine configuration YAML (built-in defaults when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tick to report on; clamped to the available range
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    tick: i64,

    /// Write the resolved grid with atlas rectangles as JSON
    #[arg(long)]
    export: Option<PathBuf>,

    /// Print a glyph preview of the resolved grid
    #[arg(long)]
    preview: bool,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::from_yaml(path)?,
        None => Config::standard(),
    };
    init_tracing(&config.logging.level);

    let (transformer, layout) = config.build_transformer()?;
    let simulation = SimulationFile::load(&cli.simulation)?;
    let (grid, report) = transformer
        .transform_with_report(simulation.map())
        .with_context(|| format!("Failed to transform map in {}", cli.simulation.display()))?;

    let state = simulation.state_at(cli.tick);
    info!(
        ticks = simulation.tick_count(),
        objects = state.objects.len(),
        units = state.units.len(),
        paused = state.paused,
        "tick loaded"
    );

    if cli.preview {
        print!("{}", preview(&grid));
    }

    if let Some(path) = &cli.export {
        let export = GridExport::new(&grid, &layout, transformer.policy_name());
        let json = serde_json::to_string_pretty(&export)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write export {}", path.display()))?;
        info!(path = %path.display(), "grid exported");
    }

    println!(
        "Map {}x{} resolved with '{}' scheme: {} water cells, {} shoreline tiles",
        grid.width(),
        grid.height(),
        transformer.policy_name(),
        report.water_cells,
        report.reclassified
    );
    for (variant, count) in grid.variant_counts() {
        println!("  {:<32} {count}", variant.name());
    }
    Ok(())
}
