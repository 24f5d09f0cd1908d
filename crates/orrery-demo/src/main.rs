//! Headless Orrery demo.
//!
//! Generates a planet with its moon, a displaced terrain plane, the two color
//! ramps and a starfield skybox, then writes them to the output directory.
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags:
//! `cargo run -p orrery-demo -- --seed 42 --amplitude 48 --output out`.

mod export;
mod scene;

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use orrery_config::{CliArgs, Config, default_config_dir};
use tracing::{error, info};

use crate::export::export_scene;
use crate::scene::Scene;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = match args.config.clone().map_or_else(default_config_dir, Ok) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{e}, using ./orrery");
            PathBuf::from("orrery")
        }
    };

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    orrery_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Generation failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let scene = Scene::generate(config);
    let written = export_scene(&scene, &config.output)?;
    info!(
        noise_seed = scene.noise_seed,
        skybox_seed = scene.skybox_seed,
        files = written.len(),
        "Done"
    );
    Ok(())
}
