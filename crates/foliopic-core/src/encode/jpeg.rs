//! JPEG encoding of crop frames.
//!
//! The editor stores the cropped profile photo as a JPEG data URI, so the
//! rasterized frame is encoded with the `image` crate's JPEG encoder at a
//! quality matching the original export setting.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

use crate::decode::PixelBuffer;

/// Export quality for profile photos (the editor's 0.9 canvas quality).
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel data length doesn't match the frame dimensions
    #[error("invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// JPEG encoding failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode an RGB frame to JPEG bytes.
///
/// `quality` is clamped to 1-100. Encoding is deterministic: identical
/// pixels and quality produce byte-identical output.
pub fn encode_jpeg(frame: &PixelBuffer, quality: u8) -> Result<Vec<u8>, EncodeError> {
    if frame.width == 0 || frame.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: frame.width,
            height: frame.height,
        });
    }

    let expected = (frame.width as usize) * (frame.height as usize) * 3;
    if frame.pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: frame.pixels.len(),
        });
    }

    let quality = quality.clamp(1, 100);

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder
        .write_image(&frame.pixels, frame.width, frame.height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
