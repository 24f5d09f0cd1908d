//! Procedural bitmaps: 1-D gradient strips built by repeated upsampling, and
//! stochastic starfield faces for cube-map skyboxes.

mod bitmap;
mod error;

pub mod cubemap;
pub mod gradient;
pub mod starfield;

pub use bitmap::{Bitmap, blend_pixel, lerp_u8};
pub use cubemap::CubeFaceSet;
pub use error::TextureError;
pub use gradient::{
    GradientStrip, PLANET_STOPS, TERRAIN_STOPS, UpsamplePolicy, planet_gradient, terrain_gradient,
    upsampled_width,
};
pub use starfield::{BRIGHT_THRESHOLD, FieldParams, smooth_pass, synthesize_field};
