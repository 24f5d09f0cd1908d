//! Command-line argument parsing for the Orrery demo.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Orrery command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "Procedural planet, terrain and skybox generator")]
pub struct CliArgs {
    /// Noise seed for terrain elevation.
    #[arg(long)]
    pub seed: Option<u32>,

    /// Terrain elevation multiplier.
    #[arg(long)]
    pub amplitude: Option<f32>,

    /// Directory to write meshes and textures to.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Write OBJ files with positions and faces only.
    #[arg(long)]
    pub quick_obj: bool,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.noise.seed = Some(seed);
        }
        if let Some(amplitude) = args.amplitude {
            self.terrain.amplitude = amplitude;
        }
        if let Some(ref dir) = args.output {
            self.output.directory = dir.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if args.quick_obj {
            self.output.quick_obj = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            seed: Some(42),
            amplitude: Some(12.5),
            quick_obj: true,
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.noise.seed, Some(42));
        assert_eq!(config.terrain.amplitude, 12.5);
        assert!(config.output.quick_obj);
        // Non-overridden fields retain defaults
        assert_eq!(config.output.directory, PathBuf::from("output"));
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_quick_obj_flag_does_not_clear_config() {
        let mut config = Config::default();
        config.output.quick_obj = true;
        config.apply_cli_overrides(&CliArgs::default());
        assert!(config.output.quick_obj);
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::try_parse_from([
            "orrery",
            "--seed",
            "7",
            "--output",
            "out/scene",
            "--log-level",
            "debug",
            "--quick-obj",
        ])
        .unwrap();
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.output, Some(PathBuf::from("out/scene")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.quick_obj);
        assert_eq!(args.amplitude, None);
        assert_eq!(args.config, None);
    }
}
