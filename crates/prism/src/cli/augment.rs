//! Augmentation command execution.

use anyhow::bail;
use clap::Args;
use prism_core::{Config, Prism, TransformMode};
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;

/// Allowed values for `--max_angle`.
const MAX_ANGLE_CHOICES: [u32; 7] = [1, 5, 10, 15, 25, 45, 90];

/// Allowed values for `--max_zoom`.
const MAX_ZOOM_CHOICES: [u32; 5] = [5, 10, 20, 40, 80];

/// Arguments shared by all augmentation commands.
#[derive(Args)]
pub struct CommonArgs {
    /// Image file or dataset root directory
    pub path: PathBuf,

    /// Output root for dataset runs (defaults to the configured directory)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Write a side-by-side comparison next to the result (single files only)
    #[arg(long)]
    pub show: bool,

    /// Seed for the random number generator, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args)]
pub struct FlipArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args)]
pub struct RotationArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Maximum rotation angle in degrees
    #[arg(long = "max_angle", default_value_t = 15, value_parser = parse_max_angle)]
    pub max_angle: u32,
}

#[derive(Args)]
pub struct ZoomArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Maximum zoom percentage
    #[arg(long = "max_zoom", default_value_t = 20, value_parser = parse_max_zoom)]
    pub max_zoom: u32,
}

fn parse_max_angle(s: &str) -> Result<u32, String> {
    parse_choice(s, &MAX_ANGLE_CHOICES)
}

fn parse_max_zoom(s: &str) -> Result<u32, String> {
    parse_choice(s, &MAX_ZOOM_CHOICES)
}

fn parse_choice(s: &str, choices: &[u32]) -> Result<u32, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if choices.contains(&value) {
        Ok(value)
    } else {
        Err(format!(
            "'{}' is not one of {}",
            value,
            choices
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ))
    }
}

/// Run one augmentation mode against a file or dataset root.
pub fn execute(config: Config, mode: TransformMode, common: CommonArgs) -> anyhow::Result<()> {
    let mut rng = match common.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let prism = Prism::new(config);

    if common.path.is_file() {
        let outcome = prism.augment_file(&common.path, &mode, common.show, &mut rng)?;
        tracing::info!(
            "Wrote {} ({}x{})",
            outcome.output.display(),
            outcome.width,
            outcome.height
        );
        if let Some(comparison) = &outcome.comparison {
            tracing::info!("Wrote comparison {}", comparison.display());
        }
        Ok(())
    } else if common.path.is_dir() {
        if common.show {
            tracing::warn!("--show only applies to single files, ignoring");
        }
        let output_root = match common.output {
            Some(dir) => dir,
            None => prism.config().output_dir(),
        };
        let stats = prism.augment_dataset(&common.path, &output_root, &mode, &mut rng)?;
        tracing::info!(
            "Augmented {} image(s) across {} class(es) into {} in {:.2}s ({})",
            stats.images,
            stats.classes,
            output_root.display(),
            stats.duration.as_secs_f64(),
            mode
        );
        Ok(())
    } else {
        bail!("Path not found: {}", common.path.display())
    }
}
