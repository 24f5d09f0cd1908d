//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level generator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Elevation noise settings.
    pub noise: NoiseConfig,
    /// Terrain plane settings.
    pub terrain: TerrainConfig,
    /// Planet and moon settings.
    pub planet: PlanetConfig,
    /// Color ramp settings.
    pub gradient: GradientConfig,
    /// Starfield skybox settings.
    pub skybox: SkyboxConfig,
    /// Where and how results are written.
    pub output: OutputConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Elevation noise configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NoiseConfig {
    /// Noise seed. `None` draws one from system entropy on every run.
    pub seed: Option<u32>,
    /// Frequency of the first octave.
    pub frequency: f64,
    /// Number of octaves.
    pub octaves: u32,
}

/// Terrain plane configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    /// Quads along Z.
    pub rows: u32,
    /// Quads along X.
    pub cols: u32,
    /// Elevation multiplier.
    pub amplitude: f32,
    /// Weld coincident vertices into smooth normals.
    pub smooth_normals: bool,
}

/// Planet and moon configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanetConfig {
    /// Quads per cube face edge of the planet sphere.
    pub subdivisions: u32,
    /// Planet radius in world units.
    pub radius: f32,
    /// Quads per cube face edge of the moon sphere.
    pub moon_subdivisions: u32,
    /// Moon radius in world units.
    pub moon_radius: f32,
    /// Moon center relative to the planet.
    pub moon_offset: [f32; 3],
    /// Use radial normals instead of welded face normals.
    pub sphere_normals: bool,
}

/// Gradient ramp configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GradientConfig {
    /// Upsampling passes applied to the planet ramp.
    pub planet_passes: u32,
    /// Upsampling passes applied to the terrain ramp.
    pub terrain_passes: u32,
}

/// Starfield skybox configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SkyboxConfig {
    /// Width and height of each cube face in pixels.
    pub face_size: u32,
    /// Draws strictly above this value seed a star.
    pub threshold: u32,
    /// Exclusive upper bound of the seeding draw.
    pub range: u32,
    /// Bleed pass count and bleed draw modulus.
    pub smooth: u32,
    /// RNG seed for the faces. `None` uses system entropy.
    pub rng_seed: Option<u64>,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory meshes and textures are written to.
    pub directory: PathBuf,
    /// Write OBJ files with positions and faces only.
    pub quick_obj: bool,
    /// Write gradient strips and skybox faces as PNG.
    pub write_png: bool,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            seed: None,
            frequency: 0.01,
            octaves: 4,
        }
    }
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            rows: 100,
            cols: 100,
            amplitude: 32.0,
            smooth_normals: true,
        }
    }
}

impl Default for PlanetConfig {
    fn default() -> Self {
        Self {
            subdivisions: 4,
            radius: 12.0,
            moon_subdivisions: 8,
            moon_radius: 6.0,
            moon_offset: [34.0, 0.0, 0.0],
            sphere_normals: true,
        }
    }
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            planet_passes: 8,
            terrain_passes: 4,
        }
    }
}

impl Default for SkyboxConfig {
    fn default() -> Self {
        Self {
            face_size: 1080,
            threshold: 998,
            range: 1000,
            smooth: 2,
            rng_seed: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("output"),
            quick_obj: false,
            write_png: true,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Platform config directory for Orrery, e.g. `~/.config/orrery` on Linux.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("orrery"))
        .ok_or(ConfigError::NoConfigDir)
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
