//! WASM-compatible wrapper types for image data.
//!
//! The core pixel buffer crosses the JS boundary wrapped in a type that
//! exposes dimensions as getters and copies pixel data out on demand.

use foliopic_core::PixelBuffer;
use wasm_bindgen::prelude::*;

/// A decoded photo held in WASM memory.
///
/// Pixel data stays on the Rust side; `pixels()` copies it out as a
/// `Uint8Array` when the host needs to paint a preview. wasm-bindgen's
/// finalizer frees the buffer when the JS handle is collected.
#[wasm_bindgen]
pub struct JsSourceImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsSourceImage {
    /// Create a JsSourceImage from dimensions and RGB pixel data
    /// (3 bytes per pixel, row-major order).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsSourceImage {
        JsSourceImage {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns RGB pixel data as a Uint8Array (copies out of WASM memory).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsSourceImage {
    /// Wrap a core buffer coming out of the decode pipeline.
    pub(crate) fn from_core(buffer: PixelBuffer) -> Self {
        Self {
            width: buffer.width,
            height: buffer.height,
            pixels: buffer.pixels,
        }
    }

    /// Convert back to a core buffer for the crop session.
    /// Note: This clones the pixel data.
    pub(crate) fn to_core(&self) -> PixelBuffer {
        PixelBuffer {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}
