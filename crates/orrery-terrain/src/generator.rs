//! Terrain plane generation with interactive regeneration.

use orrery_mesh::{IndexedMesh, primitives, smooth_normals};
use rand::Rng;
use tracing::info;

use crate::displace::{apply_height_gradient, displace};
use crate::noise_context::NoiseContext;

/// Amount [`TerrainGenerator::raise`] and [`TerrainGenerator::lower`] change the amplitude by.
const AMPLITUDE_STEP: f32 = 1.0;

/// Shape and relief of the terrain plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainParams {
    /// Quads along Z.
    pub rows: u32,
    /// Quads along X.
    pub cols: u32,
    /// Elevation scale applied to the `[0, 1]` noise sample.
    pub amplitude: f32,
    /// Weld coincident vertices into smooth normals after displacement.
    pub smooth_normals: bool,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            rows: 100,
            cols: 100,
            amplitude: 32.0,
            smooth_normals: true,
        }
    }
}

/// Builds the terrain plane and re-displaces it when the relief or seed changes.
#[derive(Clone, Debug)]
pub struct TerrainGenerator {
    noise: NoiseContext,
    params: TerrainParams,
}

impl TerrainGenerator {
    pub fn new(noise: NoiseContext, params: TerrainParams) -> Self {
        Self { noise, params }
    }

    pub fn noise(&self) -> &NoiseContext {
        &self.noise
    }

    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    /// A fresh plane, displaced, optionally smoothed, with gradient coordinates.
    pub fn build(&self) -> IndexedMesh {
        let mut mesh = primitives::plane(self.params.rows, self.params.cols);
        self.refresh(&mut mesh);
        mesh
    }

    /// Re-run displacement, smoothing and the gradient pass on an existing plane.
    ///
    /// Horizontal positions are kept, so this works on a mesh from [`Self::build`].
    pub fn refresh(&self, mesh: &mut IndexedMesh) {
        displace(mesh, &self.noise, self.params.amplitude);
        if self.params.smooth_normals {
            smooth_normals(mesh);
        }
        apply_height_gradient(mesh);
    }

    /// Increase the amplitude by one unit and re-displace `mesh`.
    pub fn raise(&mut self, mesh: &mut IndexedMesh) {
        self.params.amplitude += AMPLITUDE_STEP;
        self.refresh(mesh);
    }

    /// Decrease the amplitude by one unit and re-displace `mesh`.
    pub fn lower(&mut self, mesh: &mut IndexedMesh) {
        self.params.amplitude -= AMPLITUDE_STEP;
        self.refresh(mesh);
    }

    /// Reseed the noise and re-displace `mesh`.
    pub fn regenerate(&mut self, mesh: &mut IndexedMesh, seed: u32) {
        self.noise.reseed(seed);
        info!(seed, "regenerating terrain");
        self.refresh(mesh);
    }

    /// Reseed from `rng` and re-displace `mesh`. Returns the new seed.
    pub fn regenerate_random<R: Rng + ?Sized>(&mut self, mesh: &mut IndexedMesh, rng: &mut R) -> u32 {
        let seed = rng.random();
        self.regenerate(mesh, seed);
        seed
    }
}
