//! Gradient strips: 1-pixel-tall RGBA lookup textures grown from a handful of
//! authored color stops by repeated 2× upsampling.
//!
//! Each upsampling pass maps a strip of width `W` to width `2W − 1`. Even
//! output pixels copy the source (`out[2i] = in[i]`); odd output pixels are
//! the per-channel midpoint of two source neighbours chosen by an
//! [`UpsamplePolicy`]. After `k` passes a strip of width `W0` has width
//! `(W0 − 1)·2^k + 1`.

use tracing::trace;

use crate::bitmap::{Bitmap, blend_pixel};
use crate::error::TextureError;

/// RGBA channel count of every gradient strip.
const STRIP_CHANNELS: u8 = 4;

/// Color stops of the planet ramp: polar white, sand, browns, grey, white.
pub const PLANET_STOPS: [[u8; 4]; 6] = [
    [255, 255, 255, 255],
    [250, 248, 220, 255],
    [185, 145, 125, 255],
    [85, 45, 25, 255],
    [105, 85, 65, 255],
    [255, 255, 255, 255],
];

/// Color stops of the terrain ramp, low to high: water, sand, greens, brown, rock, snow.
pub const TERRAIN_STOPS: [[u8; 4]; 8] = [
    [100, 100, 255, 255],
    [250, 248, 220, 255],
    [105, 255, 105, 255],
    [55, 255, 55, 255],
    [0, 225, 0, 255],
    [185, 145, 125, 255],
    [105, 85, 65, 255],
    [255, 255, 255, 255],
];

/// How an odd output pixel picks its two source neighbours.
///
/// The two policies blend visibly differently and are kept as separate paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UpsamplePolicy {
    /// Output `i` blends `in[(i − 1) / 2]` and `in[(i + 1) / 2]`, the two
    /// source pixels it sits between.
    Regular,
    /// Output `i` blends `in[i / 2 − 1]` and `in[i / 2 + 1]`, skipping over
    /// the nearer source pixel. Softer, slightly asymmetric ramp.
    Irregular,
}

impl UpsamplePolicy {
    /// Source neighbours of odd output pixel `i` for a source of `width >= 2`.
    ///
    /// The lower index is clamped to 0 and the upper to `width − 1`.
    fn neighbors(self, i: u32, width: u32) -> (u32, u32) {
        let i = i as i64;
        let (lo, hi) = match self {
            UpsamplePolicy::Regular => ((i - 1) / 2, (i + 1) / 2),
            UpsamplePolicy::Irregular => (i / 2 - 1, i / 2 + 1),
        };
        let last = width as i64 - 1;
        (lo.clamp(0, last) as u32, hi.clamp(0, last) as u32)
    }
}

/// Width of a strip of `width` pixels after `passes` upsampling passes.
pub fn upsampled_width(width: u32, passes: u32) -> u32 {
    if width == 0 {
        0
    } else {
        ((width - 1) << passes) + 1
    }
}

/// A `W × 1` RGBA bitmap used as a 1-D lookup texture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradientStrip {
    bitmap: Bitmap,
}

impl GradientStrip {
    /// Build a strip with one pixel per stop.
    pub fn from_stops(stops: &[[u8; 4]]) -> Self {
        let mut bitmap = Bitmap::new(stops.len() as u32, 1, STRIP_CHANNELS);
        for (i, stop) in stops.iter().enumerate() {
            bitmap.pixel_mut(i as u32, 0).copy_from_slice(stop);
        }
        Self { bitmap }
    }

    /// Wrap a bitmap that is one pixel tall with four channels.
    pub fn from_bitmap(bitmap: Bitmap) -> Result<Self, TextureError> {
        if bitmap.height() != 1 || bitmap.channels() != STRIP_CHANNELS {
            return Err(TextureError::NotAStrip {
                width: bitmap.width(),
                height: bitmap.height(),
                channels: bitmap.channels(),
            });
        }
        Ok(Self { bitmap })
    }

    pub fn width(&self) -> u32 {
        self.bitmap.width()
    }

    /// RGBA value of pixel `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= width()`.
    pub fn color(&self, i: u32) -> [u8; 4] {
        self.bitmap.pixel_array(i, 0)
    }

    /// Nearest pixel to texture coordinate `t`, clamped to `[0, 1]`.
    ///
    /// Returns transparent black for an empty strip.
    pub fn sample(&self, t: f32) -> [u8; 4] {
        let width = self.width();
        if width == 0 {
            return [0; 4];
        }
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let i = (t * (width - 1) as f32).round() as u32;
        self.color(i.min(width - 1))
    }

    pub fn as_bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    pub fn into_bitmap(self) -> Bitmap {
        self.bitmap
    }

    /// One upsampling pass into a newly allocated strip of width `2W − 1`.
    ///
    /// Strips narrower than two pixels are returned unchanged.
    pub fn upsample(&self, policy: UpsamplePolicy) -> GradientStrip {
        let width = self.width();
        if width < 2 {
            return self.clone();
        }

        let out_width = width * 2 - 1;
        let mut out = Bitmap::new(out_width, 1, STRIP_CHANNELS);
        for i in 0..out_width {
            if i % 2 == 0 {
                out.pixel_mut(i, 0)
                    .copy_from_slice(self.bitmap.pixel(i / 2, 0));
            } else {
                let (lo, hi) = policy.neighbors(i, width);
                blend_pixel(
                    out.pixel_mut(i, 0),
                    self.bitmap.pixel(lo, 0),
                    self.bitmap.pixel(hi, 0),
                );
            }
        }
        GradientStrip { bitmap: out }
    }

    /// Replace this strip with its upsampled version; the old storage is dropped.
    pub fn upsample_in_place(&mut self, policy: UpsamplePolicy) {
        *self = self.upsample(policy);
    }

    /// Apply `passes` upsampling passes.
    pub fn upsample_times(mut self, policy: UpsamplePolicy, passes: u32) -> GradientStrip {
        for _ in 0..passes {
            self.upsample_in_place(policy);
        }
        trace!(?policy, passes, width = self.width(), "upsampled gradient strip");
        self
    }
}

/// The planet ramp, upsampled `passes` times with the irregular policy.
pub fn planet_gradient(passes: u32) -> GradientStrip {
    GradientStrip::from_stops(&PLANET_STOPS).upsample_times(UpsamplePolicy::Irregular, passes)
}

/// The terrain ramp, upsampled `passes` times with the regular policy.
pub fn terrain_gradient(passes: u32) -> GradientStrip {
    GradientStrip::from_stops(&TERRAIN_STOPS).upsample_times(UpsamplePolicy::Regular, passes)
}
