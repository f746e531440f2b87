//! Portfolio document WASM bindings.
//!
//! The document crosses the boundary as a plain JS object (via
//! serde-wasm-bindgen); both pages read and mutate it natively in JS and
//! come back here for parsing, validation and serialization.

use foliopic_core::PortfolioDocument;
use wasm_bindgen::prelude::*;

/// A fresh, empty portfolio document as a JS object.
#[wasm_bindgen]
pub fn default_document() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&PortfolioDocument::default())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Parse stored or fetched JSON into a document object.
///
/// Unknown fields are ignored and missing fields take their defaults, so
/// documents written by earlier versions keep loading.
#[wasm_bindgen]
pub fn parse_document(json: &str) -> Result<JsValue, JsValue> {
    let document =
        PortfolioDocument::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&document).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Serialize a document object to JSON: compact for storage, 2-space
/// indented for the "Export JSON" download.
#[wasm_bindgen]
pub fn serialize_document(value: JsValue, pretty: bool) -> Result<String, JsValue> {
    let document: PortfolioDocument =
        serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let result = if pretty {
        document.to_json_pretty()
    } else {
        document.to_json()
    };
    result.map_err(|e| JsValue::from_str(&e.to_string()))
}
