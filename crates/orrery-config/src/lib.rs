//! Configuration for the Orrery generators.
//!
//! Settings persist to disk as `config.ron` and can be overridden from the
//! command line. Every section uses `#[serde(default)]`, so files written by
//! older or newer builds still load.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    Config, DebugConfig, GradientConfig, NoiseConfig, OutputConfig, PlanetConfig, SkyboxConfig,
    TerrainConfig, default_config_dir,
};
pub use error::ConfigError;
