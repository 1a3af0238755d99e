//! Magic Gen - searches for bishop and rook magic numbers.
//!
//! Runs the same deterministic search the library uses, checks every result
//! against ray-walked attacks, and prints the constants to stdout. Progress is
//! logged to stderr; set `RUST_LOG=debug` for per-square attempt counts.

mod output;

use anyhow::{bail, Context};
use board_core::Square;
use board_magic::magic::{verify_magic, DEFAULT_ATTEMPT_LIMIT};
use board_magic::{MagicFinder, SearchConfig, Slider, DEFAULT_SEED};
use clap::{Parser, ValueEnum};
use output::MagicSet;
use tracing_subscriber::EnvFilter;

/// Which slider kinds to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SliderChoice {
    Bishop,
    Rook,
    Both,
}

impl SliderChoice {
    /// Sliders in search order. Rooks go first, matching the order the
    /// shipped constants were searched in.
    fn sliders(self) -> &'static [Slider] {
        match self {
            SliderChoice::Bishop => &[Slider::Bishop],
            SliderChoice::Rook => &[Slider::Rook],
            SliderChoice::Both => &[Slider::Rook, Slider::Bishop],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Rust,
    Json,
}

/// Magic Gen - offline magic number search.
#[derive(Parser)]
#[command(name = "magic-gen")]
#[command(about = "Searches for bishop and rook magic numbers")]
struct Args {
    /// Slider kind to search
    #[arg(long, value_enum, default_value_t = SliderChoice::Both)]
    slider: SliderChoice,

    /// Seed for the xorshift generator
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u32,

    /// Candidates tried per square before giving up
    #[arg(long, default_value_t = DEFAULT_ATTEMPT_LIMIT)]
    max_attempts: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Rust)]
    format: Format,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let config = SearchConfig {
        seed: args.seed,
        max_attempts: args.max_attempts,
    };
    tracing::info!(
        seed = config.seed,
        max_attempts = config.max_attempts,
        "Starting magic search"
    );

    let mut finder = MagicFinder::new(&config);
    let mut sets = Vec::new();

    for &slider in args.slider.sliders() {
        let magics = finder
            .find_all(slider)
            .with_context(|| format!("{} search failed", slider))?;

        for sq in Square::iter() {
            let magic = magics[sq.index() as usize];
            if !verify_magic(slider, sq, magic) {
                bail!("{} magic {:#018x} for {} does not verify", slider, magic, sq);
            }
        }
        tracing::info!("Verified {} magics", slider);

        sets.push(MagicSet::new(slider, config.seed, &magics));
    }

    let mut stdout = std::io::stdout().lock();
    match args.format {
        Format::Rust => output::write_rust(&mut stdout, &sets)?,
        Format::Json => output::write_json(&mut stdout, &sets)?,
    }

    Ok(())
}
