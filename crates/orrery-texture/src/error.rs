//! Texture error types.

/// Errors reported by bitmap construction and encoding.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    /// Pixel buffer length does not match `width * height * channels`.
    #[error("pixel buffer has {actual} bytes, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Channel count outside `1..=4`.
    #[error("unsupported channel count {0}")]
    UnsupportedChannels(u8),

    /// A gradient strip must be exactly one pixel tall with RGBA channels.
    #[error("gradient strip must be Nx1 RGBA, got {width}x{height} with {channels} channels")]
    NotAStrip { width: u32, height: u32, channels: u8 },

    /// Nothing to encode.
    #[error("bitmap is empty")]
    Empty,

    /// PNG encoder failure.
    #[error("failed to encode png: {0}")]
    Png(#[from] png::EncodingError),

    /// Opening the destination file failed.
    #[error("failed to write bitmap: {0}")]
    Io(#[from] std::io::Error),
}
