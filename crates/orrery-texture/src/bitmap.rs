//! Row-major byte bitmaps with per-pixel access and PNG export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::TextureError;

/// Largest supported channel count (RGBA).
pub const MAX_CHANNELS: u8 = 4;

/// A `width × height` grid of pixels with `channels` bytes each, row-major.
///
/// Invariant: `pixels.len() == width * height * channels`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    channels: u8,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Create a bitmap with every byte zero.
    ///
    /// # Panics
    ///
    /// Panics if `channels` is not in `1..=4`.
    pub fn new(width: u32, height: u32, channels: u8) -> Self {
        assert!(
            (1..=MAX_CHANNELS).contains(&channels),
            "channels must be in 1..=4, got {channels}"
        );
        Self {
            width,
            height,
            channels,
            pixels: vec![0; width as usize * height as usize * channels as usize],
        }
    }

    /// Create a bitmap with every pixel set to `color`. The channel count is `color.len()`.
    ///
    /// # Panics
    ///
    /// Panics if `color.len()` is not in `1..=4`.
    pub fn filled(width: u32, height: u32, color: &[u8]) -> Self {
        let mut bitmap = Self::new(width, height, color.len() as u8);
        bitmap.fill(color);
        bitmap
    }

    /// Wrap an existing pixel buffer, checking the length invariant.
    pub fn from_pixels(
        width: u32,
        height: u32,
        channels: u8,
        pixels: Vec<u8>,
    ) -> Result<Self, TextureError> {
        if !(1..=MAX_CHANNELS).contains(&channels) {
            return Err(TextureError::UnsupportedChannels(channels));
        }
        let expected = width as usize * height as usize * channels as usize;
        if pixels.len() != expected {
            return Err(TextureError::LengthMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns `true` if the bitmap has no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Raw pixel bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} bitmap",
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * self.channels as usize
    }

    /// Channel bytes of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let start = self.offset(x, y);
        &self.pixels[start..start + self.channels as usize]
    }

    /// Mutable channel bytes of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn pixel_mut(&mut self, x: u32, y: u32) -> &mut [u8] {
        let start = self.offset(x, y);
        let channels = self.channels as usize;
        &mut self.pixels[start..start + channels]
    }

    /// Copy the pixel at `(x, y)` into a fixed-size array, zero-padded past `channels`.
    pub fn pixel_array(&self, x: u32, y: u32) -> [u8; MAX_CHANNELS as usize] {
        let mut out = [0; MAX_CHANNELS as usize];
        out[..self.channels as usize].copy_from_slice(self.pixel(x, y));
        out
    }

    /// Set every pixel to `color`.
    ///
    /// # Panics
    ///
    /// Panics if `color.len() != channels`.
    pub fn fill(&mut self, color: &[u8]) {
        assert_eq!(color.len(), self.channels as usize, "fill color has wrong channel count");
        for px in self.pixels.chunks_exact_mut(self.channels as usize) {
            px.copy_from_slice(color);
        }
    }

    /// Encode as an 8-bit PNG.
    pub fn write_png<W: Write>(&self, out: W) -> Result<(), TextureError> {
        if self.is_empty() {
            return Err(TextureError::Empty);
        }
        let color = match self.channels {
            1 => png::ColorType::Grayscale,
            2 => png::ColorType::GrayscaleAlpha,
            3 => png::ColorType::Rgb,
            _ => png::ColorType::Rgba,
        };
        let mut encoder = png::Encoder::new(out, self.width, self.height);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.pixels)?;
        writer.finish()?;
        Ok(())
    }

    /// Encode as PNG to `path`.
    pub fn save_png(&self, path: &Path) -> Result<(), TextureError> {
        let file = File::create(path)?;
        self.write_png(BufWriter::new(file))
    }
}

/// Linear interpolation between two channel values, truncated toward zero.
#[inline]
pub fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    let (a, b) = (a as f32, b as f32);
    (a + (b - a) * t) as u8
}

/// Write the per-channel midpoint of `a` and `b` into `dst`.
///
/// Only the first `dst.len()` channels are touched.
#[inline]
pub fn blend_pixel(dst: &mut [u8], a: &[u8], b: &[u8]) {
    for (i, d) in dst.iter_mut().enumerate() {
        *d = lerp_u8(a[i], b[i], 0.5);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_correct_length() {
        let bitmap = Bitmap::new(16, 8, 4);
        assert_eq!(bitmap.dimensions(), (16, 8));
        assert_eq!(bitmap.as_bytes().len(), 16 * 8 * 4);
        assert!(bitmap.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_zero_width_is_empty() {
        let bitmap = Bitmap::new(0, 10, 4);
        assert!(bitmap.is_empty());
    }

    #[test]
    fn test_filled_sets_every_pixel() {
        let bitmap = Bitmap::filled(3, 2, &[1, 2, 3, 4]);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(bitmap.pixel(x, y), &[1, 2, 3, 4]);
            }
        }
    }

    #[test]
    fn test_pixel_mut_is_row_major() {
        let mut bitmap = Bitmap::new(4, 3, 2);
        bitmap.pixel_mut(1, 2).copy_from_slice(&[7, 9]);
        let offset = (2 * 4 + 1) * 2;
        assert_eq!(&bitmap.as_bytes()[offset..offset + 2], &[7, 9]);
        assert_eq!(bitmap.pixel_array(1, 2), [7, 9, 0, 0]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_out_of_range_access_panics() {
        let bitmap = Bitmap::new(2, 2, 4);
        let _ = bitmap.pixel(2, 0);
    }

    #[test]
    fn test_from_pixels_checks_length() {
        assert!(Bitmap::from_pixels(2, 2, 4, vec![0; 16]).is_ok());
        assert!(matches!(
            Bitmap::from_pixels(2, 2, 4, vec![0; 15]),
            Err(TextureError::LengthMismatch {
                expected: 16,
                actual: 15
            })
        ));
        assert!(matches!(
            Bitmap::from_pixels(1, 1, 5, vec![0; 5]),
            Err(TextureError::UnsupportedChannels(5))
        ));
    }

    #[test]
    fn test_lerp_truncates() {
        assert_eq!(lerp_u8(100, 255, 0.5), 177);
        assert_eq!(lerp_u8(255, 100, 0.5), 177);
        assert_eq!(lerp_u8(0, 255, 0.5), 127);
        assert_eq!(lerp_u8(10, 20, 0.0), 10);
        assert_eq!(lerp_u8(10, 20, 1.0), 20);
    }

    #[test]
    fn test_blend_pixel_averages_channels() {
        let mut dst = [0u8; 4];
        blend_pixel(&mut dst, &[0, 10, 200, 255], &[255, 20, 100, 255]);
        assert_eq!(dst, [127, 15, 150, 255]);
    }

    #[test]
    fn test_png_encoding_produces_signature() {
        let bitmap = Bitmap::filled(4, 4, &[255, 0, 0, 255]);
        let mut buf = Vec::new();
        bitmap.write_png(&mut buf).unwrap();
        assert_eq!(&buf[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_png_rejects_empty_bitmap() {
        let bitmap = Bitmap::new(0, 0, 4);
        assert!(matches!(bitmap.write_png(Vec::new()), Err(TextureError::Empty)));
    }
}
