//! `atlas`: create a world, walk across it, and report what was generated.
//!
//! Configuration is loaded from `atlas.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p atlas-cli -- --seed 42 --steps 40 --heading 45`.

mod report;
mod tour;

use std::path::PathBuf;
use std::process::ExitCode;

use atlas_config::{CliArgs, Config, default_config_dir};
use atlas_world::{PersistError, StreamingOptions, World, save_world};
use clap::Parser;
use rand::Rng;
use tracing::{error, info};

use crate::report::RunReport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Persist(#[from] PersistError),

    #[error("failed to encode report: {0}")]
    Report(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    atlas_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match run(&config, args.json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "atlas failed");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config, json: bool) -> Result<(), CliError> {
    let seed = config
        .world
        .seed
        .unwrap_or_else(|| rand::thread_rng().gen_range(0..1_000_000) as f64);
    let streaming = StreamingOptions {
        parallel: config.world.parallel_chunks,
        workers: config.world.worker_threads,
    };

    let mut world = World::create(seed, streaming);
    info!(seed, "world ready");

    let save_path = config.save.path.clone();
    let mut saved: Option<PathBuf> = None;
    let tour = tour::walk(&mut world, &config.walk, |world, summary| {
        if !config.save.autosave {
            return Ok(());
        }
        save_world(world, &save_path)?;
        saved = Some(save_path.clone());
        info!(chunks = summary.chunks.len(), "autosaved");
        Ok::<(), PersistError>(())
    })?;

    let report = RunReport::new(&world, tour, saved);
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_world::load_world;

    #[test]
    fn test_run_autosaves_grown_world() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.world.seed = Some(42.0);
        config.walk.steps = 3;
        config.walk.step_length = 1000.0;
        config.save.path = dir.path().join("world.ron");

        run(&config, true).unwrap();

        let loaded = load_world(&config.save.path).unwrap();
        assert_eq!(loaded.seed(), 42.0);
        assert_eq!(loaded.chunks().len(), 18);
        assert_eq!(loaded.player().x, 3000.0);
    }

    #[test]
    fn test_run_without_autosave_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.world.seed = Some(7.0);
        config.walk.steps = 2;
        config.save.path = dir.path().join("world.ron");
        config.save.autosave = false;

        run(&config, false).unwrap();
        assert!(!config.save.path.exists());
    }
}
