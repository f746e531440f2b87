//! Photo decoding WASM bindings.

use foliopic_core::decode;
use wasm_bindgen::prelude::*;

use crate::types::JsSourceImage;

/// Decode an uploaded photo (JPEG or PNG) from bytes.
///
/// The format is sniffed from the data and EXIF orientation correction is
/// applied, so the pixels match the photo as the user sees it.
///
/// # Arguments
///
/// * `bytes` - The raw file bytes as a `Uint8Array`
///
/// # Errors
///
/// Returns an error if the bytes are not a recognized image format or the
/// file is corrupted.
///
/// # Example
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const photo = decode_image(bytes);
/// console.log(`Decoded ${photo.width}x${photo.height} photo`);
/// ```
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsSourceImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsSourceImage::from_core)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
