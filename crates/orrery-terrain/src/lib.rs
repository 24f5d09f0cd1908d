//! Height-field terrain: seeded fBm noise sampling, vertex displacement,
//! height-normalized gradient coordinates, and planet assembly.

mod displace;
mod generator;
mod noise_context;
mod planet;

pub use displace::{apply_height_gradient, displace, gradient_coordinate};
pub use generator::{TerrainGenerator, TerrainParams};
pub use noise_context::{BASE_FREQUENCY, NoiseContext, OCTAVES};
pub use planet::{PlanetParams, build_planet};
