//! Foliopic WASM - WebAssembly bindings for the portfolio editor
//!
//! This crate exposes the foliopic-core pipeline to the portfolio site's
//! JavaScript: photo decoding, the interactive crop session, and the
//! portfolio document model.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - uploaded-photo decoding bindings
//! - `session` - the interactive crop session object
//! - `document` - portfolio document parsing and serialization
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, JsCropSession } from '@foliopic/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const photo = decode_image(bytes);
//!
//! const session = new JsCropSession(400, 500, 400, 500);
//! session.attach_image(photo);
//! // ...pan/zoom from pointer and slider events...
//! const dataUri = session.apply();
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod document;
mod session;
mod types;

// Re-export public types
pub use decode::decode_image;
pub use document::{default_document, parse_document, serialize_document};
pub use session::JsCropSession;
pub use types::JsSourceImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
