use anyhow::{Context, Result, bail};
use clap::Parser;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tilegen::content::road_tileset;
use tilegen::{GenerationReport, Generator, GeneratorConfig, Placement, Pos, TilesetFile};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Tile set file (`.toml`, otherwise JSON). Defaults to the built-in road set.
    #[arg(short, long)]
    tiles: Option<PathBuf>,
    #[arg(long, default_value_t = 12)]
    width: usize,
    #[arg(long, default_value_t = 8)]
    height: usize,
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Overrides the attempt budget from the tile set file
    #[arg(long)]
    max_attempts: Option<usize>,
    /// Where to write the placement list as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Serialize)]
struct LayoutOutput<'a> {
    seed: u64,
    width: usize,
    height: usize,
    fingerprint: String,
    placements: &'a [Placement],
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).compact().init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let (mut config, tiles) = match &args.tiles {
        Some(path) => {
            let file = TilesetFile::load(path)
                .with_context(|| format!("Failed to load tile set: {}", path.display()))?;
            info!(path = %path.display(), tiles = file.tiles.len(), "tile set loaded");
            (file.generator, file.tiles)
        }
        None => (GeneratorConfig::default(), road_tileset()),
    };
    if let Some(max_attempts) = args.max_attempts {
        config.max_attempts = max_attempts;
    }

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let report = Generator::new(config)
        .generate(args.width, args.height, &tiles, &mut rng)
        .context("Invalid generation request")?;

    if !report.is_success() {
        bail!(
            "No layout found for seed {} after {} attempts ({} contradictions repaired)",
            args.seed,
            report.stats.attempts,
            report.stats.backtracks
        );
    }

    println!("Generation complete.");
    println!("Grid: {}x{}", report.width, report.height);
    println!("Placements: {}", report.placements.len());
    println!("Attempts: {}", report.stats.attempts);
    println!("Backtracks: {}", report.stats.backtracks);
    println!("Fingerprint: {:016x}", report.fingerprint());
    print!("{}", render_ascii(&report));

    if let Some(path) = &args.output {
        let output = LayoutOutput {
            seed: args.seed,
            width: report.width,
            height: report.height,
            fingerprint: format!("{:016x}", report.fingerprint()),
            placements: &report.placements,
        };
        let json = serde_json::to_string_pretty(&output)
            .with_context(|| "Failed to serialize placements")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write output file: {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

/// One character per cell: the first letter of the tile id, `#` on the border.
fn render_ascii(report: &GenerationReport) -> String {
    let mut out = String::new();
    for y in (0..report.height).rev() {
        for x in 0..report.width {
            let glyph = report
                .placement_at(Pos::new(x, y))
                .and_then(|placement| placement.tile_id.chars().next())
                .unwrap_or('#');
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}
