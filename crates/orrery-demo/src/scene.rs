//! Generation of the demo scene: planet with moon, terrain, ramps and skybox.

use std::time::Instant;

use glam::Vec3;
use orrery_config::{Config, NoiseConfig};
use orrery_mesh::IndexedMesh;
use orrery_terrain::{NoiseContext, PlanetParams, TerrainGenerator, TerrainParams, build_planet};
use orrery_texture::{CubeFaceSet, FieldParams, GradientStrip, planet_gradient, terrain_gradient};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

/// Everything the demo generates in one run.
pub struct Scene {
    pub planet: IndexedMesh,
    pub planet_gradient: GradientStrip,
    pub terrain: IndexedMesh,
    pub terrain_gradient: GradientStrip,
    pub skybox: CubeFaceSet,
    /// Seed the terrain noise was built with, so an entropy-seeded run can be repeated.
    pub noise_seed: u32,
    /// Seed of the skybox RNG stream.
    pub skybox_seed: u64,
}

impl Scene {
    /// Generate every asset described by `config`.
    ///
    /// Unset seeds are drawn from system entropy and reported in the result.
    pub fn generate(config: &Config) -> Self {
        let mut entropy = rand::rng();
        let noise = noise_context(&config.noise, &mut entropy);
        let noise_seed = noise.seed();
        let skybox_seed = config.skybox.rng_seed.unwrap_or_else(|| entropy.random());

        let start = Instant::now();
        let planet = build_planet(&planet_params(config));
        info!(
            vertices = planet.vertex_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Built planet"
        );

        let start = Instant::now();
        let terrain = TerrainGenerator::new(noise, terrain_params(config)).build();
        info!(
            seed = noise_seed,
            vertices = terrain.vertex_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Built terrain"
        );

        let planet_gradient = planet_gradient(config.gradient.planet_passes);
        let terrain_gradient = terrain_gradient(config.gradient.terrain_passes);
        info!(
            planet_width = planet_gradient.width(),
            terrain_width = terrain_gradient.width(),
            "Built gradient ramps"
        );

        let start = Instant::now();
        let mut rng = ChaCha8Rng::seed_from_u64(skybox_seed);
        let skybox = CubeFaceSet::synthesize(config.skybox.face_size, &field_params(config), &mut rng);
        info!(
            seed = skybox_seed,
            face_size = skybox.face_size(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Built skybox"
        );

        Self {
            planet,
            planet_gradient,
            terrain,
            terrain_gradient,
            skybox,
            noise_seed,
            skybox_seed,
        }
    }
}

/// The configured noise context, seeded from `entropy` when no seed is set.
pub fn noise_context<R: Rng + ?Sized>(config: &NoiseConfig, entropy: &mut R) -> NoiseContext {
    let seed = config.seed.unwrap_or_else(|| entropy.random());
    NoiseContext::with_params(seed, config.frequency, config.octaves)
}

pub fn terrain_params(config: &Config) -> TerrainParams {
    TerrainParams {
        rows: config.terrain.rows,
        cols: config.terrain.cols,
        amplitude: config.terrain.amplitude,
        smooth_normals: config.terrain.smooth_normals,
    }
}

pub fn planet_params(config: &Config) -> PlanetParams {
    let planet = &config.planet;
    PlanetParams {
        subdivisions: planet.subdivisions,
        radius: planet.radius,
        moon_subdivisions: planet.moon_subdivisions,
        moon_radius: planet.moon_radius,
        moon_offset: Vec3::from_array(planet.moon_offset),
        sphere_normals: planet.sphere_normals,
    }
}

pub fn field_params(config: &Config) -> FieldParams {
    FieldParams {
        threshold: config.skybox.threshold,
        range: config.skybox.range,
        smooth: config.skybox.smooth,
    }
}

#[cfg(test)]
pub(crate) fn small_config() -> Config {
    let mut config = Config::default();
    config.noise.seed = Some(17);
    config.terrain.rows = 6;
    config.terrain.cols = 5;
    config.planet.subdivisions = 2;
    config.planet.moon_subdivisions = 2;
    config.gradient.planet_passes = 2;
    config.gradient.terrain_passes = 1;
    config.skybox.face_size = 8;
    config.skybox.threshold = 80;
    config.skybox.range = 100;
    config.skybox.rng_seed = Some(3);
    config
}
