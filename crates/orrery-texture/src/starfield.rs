//! Stochastic two-tone fields for starfield skybox faces.
//!
//! A field starts as transparent black, is sprinkled with opaque white pixels
//! by thresholding uniform draws, and is then relaxed by bleed passes: every
//! bright pixel that passes a second draw averages itself into its four axis
//! neighbours, producing soft clusters of uneven size.
//!
//! Bleed passes mutate a single buffer in row-major order. A neighbour
//! brightened earlier in the same pass is itself examined when the scan
//! reaches it, and a pixel already scanned can still be blended by a later
//! neighbour. The output therefore depends on scan order even for a fixed
//! random stream.

use rand::Rng;
use tracing::trace;

use crate::bitmap::{Bitmap, lerp_u8};

/// First-channel value above which a pixel bleeds into its neighbours.
pub const BRIGHT_THRESHOLD: u8 = 105;

/// Initial color of every pixel.
pub const BASE_COLOR: [u8; 4] = [0, 0, 0, 0];

/// Color of a seeded star pixel.
pub const STAR_COLOR: [u8; 4] = [255, 255, 255, 255];

/// Sparsity and relaxation settings of a stochastic field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldParams {
    /// A pixel becomes a star when its draw in `[0, range)` is strictly greater than this.
    pub threshold: u32,
    /// Exclusive upper bound of the seeding draw. Zero seeds nothing.
    pub range: u32,
    /// Number of bleed passes, and the modulus of the per-pixel bleed draw:
    /// a bright pixel skips its bleed with probability `1 / smooth`.
    pub smooth: u32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            threshold: 998,
            range: 1000,
            smooth: 2,
        }
    }
}

/// Generate a `width × height` RGBA field.
pub fn synthesize_field<R: Rng + ?Sized>(
    width: u32,
    height: u32,
    params: &FieldParams,
    rng: &mut R,
) -> Bitmap {
    let mut bitmap = Bitmap::filled(width, height, &BASE_COLOR);

    if params.range > 0 {
        for y in 0..height {
            for x in 0..width {
                if rng.random_range(0..params.range) > params.threshold {
                    bitmap.pixel_mut(x, y).copy_from_slice(&STAR_COLOR);
                }
            }
        }
    }

    for _ in 0..params.smooth {
        smooth_pass(&mut bitmap, params.smooth, rng);
    }

    trace!(width, height, ?params, "synthesized stochastic field");
    bitmap
}

/// One in-place bleed pass over `bitmap`.
///
/// The bleed draw in `[0, smooth)` is only taken for bright pixels.
/// `smooth == 0` is a no-op.
pub fn smooth_pass<R: Rng + ?Sized>(bitmap: &mut Bitmap, smooth: u32, rng: &mut R) {
    if smooth == 0 || bitmap.is_empty() {
        return;
    }
    let (width, height) = bitmap.dimensions();
    let channels = bitmap.channels() as usize;

    for y in 0..height {
        for x in 0..width {
            if bitmap.pixel(x, y)[0] <= BRIGHT_THRESHOLD || rng.random_range(0..smooth) == 0 {
                continue;
            }
            let center = bitmap.pixel_array(x, y);
            let center = &center[..channels];

            if x + 1 < width {
                bleed(bitmap.pixel_mut(x + 1, y), center);
            }
            if x > 0 {
                bleed(bitmap.pixel_mut(x - 1, y), center);
            }
            if y + 1 < height {
                bleed(bitmap.pixel_mut(x, y + 1), center);
            }
            if y > 0 {
                bleed(bitmap.pixel_mut(x, y - 1), center);
            }
        }
    }
}

fn bleed(neighbor: &mut [u8], center: &[u8]) {
    for (n, &c) in neighbor.iter_mut().zip(center) {
        *n = lerp_u8(*n, c, 0.5);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    fn count_lit(bitmap: &Bitmap) -> usize {
        bitmap
            .as_bytes()
            .chunks_exact(4)
            .filter(|px| px[0] > 0)
            .count()
    }

    #[test]
    fn test_same_seed_same_field() {
        let params = FieldParams {
            threshold: 90,
            range: 100,
            smooth: 3,
        };
        let a = synthesize_field(64, 48, &params, &mut rng(7));
        let b = synthesize_field(64, 48, &params, &mut rng(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_field() {
        let params = FieldParams {
            threshold: 90,
            range: 100,
            smooth: 3,
        };
        let a = synthesize_field(64, 64, &params, &mut rng(1));
        let b = synthesize_field(64, 64, &params, &mut rng(2));
        assert_ne!(a, b);
    }

    #[test]
    fn test_threshold_at_range_seeds_nothing() {
        let params = FieldParams {
            threshold: 9,
            range: 10,
            smooth: 4,
        };
        let field = synthesize_field(32, 32, &params, &mut rng(3));
        assert!(field.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_zero_range_seeds_nothing() {
        let params = FieldParams {
            threshold: 0,
            range: 0,
            smooth: 2,
        };
        let field = synthesize_field(8, 8, &params, &mut rng(3));
        assert_eq!(field, Bitmap::filled(8, 8, &BASE_COLOR));
    }

    #[test]
    fn test_seeding_density_follows_threshold() {
        // P(draw > 49) over [0, 100) is one half.
        let params = FieldParams {
            threshold: 49,
            range: 100,
            smooth: 0,
        };
        let field = synthesize_field(100, 100, &params, &mut rng(11));
        let lit = count_lit(&field);
        assert!(
            (4000..=6000).contains(&lit),
            "expected about 5000 stars, got {lit}"
        );
        for px in field.as_bytes().chunks_exact(4) {
            assert!(px == BASE_COLOR || px == STAR_COLOR, "unsmoothed pixel {px:?}");
        }
    }

    #[test]
    fn test_pixels_stay_between_seed_colors() {
        let params = FieldParams {
            threshold: 80,
            range: 100,
            smooth: 5,
        };
        let field = synthesize_field(96, 96, &params, &mut rng(5));
        for (i, px) in field.as_bytes().chunks_exact(4).enumerate() {
            // Both seed colors are grey, so every blend keeps all channels equal.
            assert!(
                px.iter().all(|&c| c == px[0]),
                "pixel {i} left the black-white line: {px:?}"
            );
        }
    }

    #[test]
    fn test_smoothing_spreads_light() {
        let seeded = FieldParams {
            threshold: 95,
            range: 100,
            smooth: 0,
        };
        let smoothed = FieldParams { smooth: 4, ..seeded };
        let before = synthesize_field(64, 64, &seeded, &mut rng(9));
        let after = synthesize_field(64, 64, &smoothed, &mut rng(9));
        assert!(count_lit(&after) > count_lit(&before));
    }

    #[test]
    fn test_bleed_pass_is_sequential_in_place() {
        let mut bitmap = Bitmap::filled(5, 5, &BASE_COLOR);
        bitmap.pixel_mut(2, 2).copy_from_slice(&STAR_COLOR);
        smooth_pass(&mut bitmap, u32::MAX, &mut rng(21));

        let v = |x, y| bitmap.pixel(x, y)[0];
        // Direct neighbours of the star.
        assert_eq!(v(1, 2), 127);
        assert_eq!(v(2, 1), 127);
        assert_eq!(v(3, 2), 127);
        assert_eq!(v(2, 3), 127);
        // (3,2) bled later in the same pass, then (2,3) did.
        assert_eq!(v(4, 2), 63);
        assert_eq!(v(3, 1), 63);
        assert_eq!(v(3, 3), 95);
        assert_eq!(v(1, 3), 63);
        assert_eq!(v(2, 4), 63);
        assert_eq!(v(2, 2), 159);
        // Untouched corner.
        assert_eq!(v(0, 0), 0);
    }

    #[test]
    fn test_smooth_of_one_never_bleeds() {
        let mut bitmap = Bitmap::filled(3, 3, &BASE_COLOR);
        bitmap.pixel_mut(1, 1).copy_from_slice(&STAR_COLOR);
        let before = bitmap.clone();
        smooth_pass(&mut bitmap, 1, &mut rng(0));
        assert_eq!(bitmap, before);
    }

    #[test]
    fn test_zero_sized_field() {
        let field = synthesize_field(0, 0, &FieldParams::default(), &mut rng(0));
        assert!(field.is_empty());
    }
}
