use anyhow::{Result, bail};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tilegen::content::{road_tileset, terrace_tileset};
use tilegen::{Generator, GeneratorConfig, TileDefinition, find_layout_violation};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Number of layouts to generate
    #[arg(short, long, default_value_t = 500)]
    runs: u32,
    #[arg(long, default_value_t = 24)]
    max_size: usize,
}

fn pick_size(rng: &mut ChaCha8Rng, max_size: usize) -> usize {
    2 + rng.next_u64() as usize % (max_size.max(3) - 1)
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).compact().init();
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for {} layouts...", args.seed, args.runs);
    let tile_sets: [(&str, Vec<TileDefinition>); 2] =
        [("roads", road_tileset()), ("terraces", terrace_tileset())];
    let generator = Generator::new(GeneratorConfig::default());
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut failures = 0_u32;
    let mut backtracks = 0_usize;
    for run in 0..args.runs {
        let (name, tiles) = &tile_sets[run as usize % tile_sets.len()];
        let width = pick_size(&mut rng, args.max_size);
        let height = pick_size(&mut rng, args.max_size);
        let report = generator.generate(width, height, tiles, &mut rng)?;
        backtracks += report.stats.backtracks;

        if !report.is_success() {
            failures += 1;
            warn!(run, set = *name, width, height, "layout generation failed");
            assert!(report.placements.is_empty(), "Invariant failed: failed run emitted tiles");
            continue;
        }

        // Assert invariants
        let interior = (width - 2) * (height - 2);
        assert_eq!(report.placements.len(), interior, "Invariant failed: interior not filled");
        if let Some(violation) = find_layout_violation(tiles, &report) {
            bail!("Invariant failed on run {run} ({name}, {width}x{height}): {violation:?}");
        }
        if *name == "roads" && report.stats.backtracks > 0 {
            bail!("Invariant failed: road set hit a contradiction on run {run}");
        }
    }

    println!("Fuzzing completed successfully.");
    println!("Runs: {}, failed generations: {}, backtracks: {}", args.runs, failures, backtracks);
    Ok(())
}
