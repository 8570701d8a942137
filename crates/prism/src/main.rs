//! Prism - Dataset augmentation CLI.
//!
//! # Usage
//!
//! ```bash
//! # Mirror the current dataset with every image horizontally flipped
//! prism fliph ./dataset --output ./output_processed
//!
//! # Rotate one image by a random angle up to 25 degrees
//! prism rotation ./leaf.jpg --max_angle 25
//!
//! # Zoom in by a random factor up to 40%, writing a review composite too
//! prism zoom ./leaf.jpg --max_zoom 40 --show
//!
//! # Reproduce a run exactly
//! prism rotation ./dataset --max_angle 15 --seed 42
//! ```

mod cli;
mod logging;

use clap::{Parser, Subcommand};
use prism_core::{Config, TransformMode};

#[derive(Parser)]
#[command(name = "prism")]
#[command(author, version, about = "Dataset augmentation tool", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Flip image(s) horizontally
    Fliph(cli::augment::FlipArgs),
    /// Rotate image(s) by a random angle
    Rotation(cli::augment::RotationArgs),
    /// Zoom image(s) by a random centered factor
    Zoom(cli::augment::ZoomArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: failed to load config ({}), using defaults", e);
            Config::default()
        }
    };

    logging::init_from_config(&config, cli.verbose, cli.json_logs);
    tracing::debug!("Prism v{} starting", prism_core::VERSION);

    match cli.command {
        Commands::Fliph(args) => {
            cli::augment::execute(config, TransformMode::FlipHorizontal, args.common)
        }
        Commands::Rotation(args) => {
            let mode = TransformMode::Rotate {
                max_angle_degrees: args.max_angle,
            };
            cli::augment::execute(config, mode, args.common)
        }
        Commands::Zoom(args) => {
            let mode = TransformMode::Zoom {
                max_zoom_percent: args.max_zoom,
            };
            cli::augment::execute(config, mode, args.common)
        }
    }
}
