//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Atlas command-line arguments.
///
/// CLI values override settings loaded from `atlas.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "atlas", about = "Grow a procedural world along a walk")]
pub struct CliArgs {
    /// World seed.
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<f64>,

    /// Number of moves to make.
    #[arg(long)]
    pub steps: Option<u32>,

    /// Distance per move in world units.
    #[arg(long)]
    pub step_length: Option<f64>,

    /// Heading in degrees, counter-clockwise from +x.
    #[arg(long, allow_negative_numbers = true)]
    pub heading: Option<f64>,

    /// Save file path.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Generate chunks on a worker pool.
    #[arg(long)]
    pub parallel: Option<bool>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the final report as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.world.seed = Some(seed);
        }
        if let Some(steps) = args.steps {
            self.walk.steps = steps;
        }
        if let Some(len) = args.step_length {
            self.walk.step_length = len;
        }
        if let Some(heading) = args.heading {
            self.walk.heading_degrees = heading;
        }
        if let Some(ref out) = args.out {
            self.save.path = out.clone();
        }
        if let Some(parallel) = args.parallel {
            self.world.parallel_chunks = parallel;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
