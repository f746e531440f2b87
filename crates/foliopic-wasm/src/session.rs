//! Crop session WASM bindings.
//!
//! The host wires pointer and slider events into one `JsCropSession` and
//! reads back the pan/zoom values to render the CSS preview transform.
//! Applying returns the cropped frame as a JPEG data URI, ready to be
//! stored in the portfolio document's `profile.image` field.

use foliopic_core::crop::{CropSession, SessionPhase, Viewport};
use wasm_bindgen::prelude::*;

use crate::types::JsSourceImage;

/// An interactive crop session over one uploaded photo.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const session = new JsCropSession(rect.width, rect.height, 400, 500);
/// session.attach_image(photo);
///
/// area.onpointerdown = (e) => session.drag_start(e.clientX, e.clientY);
/// area.onpointermove = (e) => { session.drag_move(e.clientX, e.clientY); paint(); };
/// area.onpointerup = () => session.drag_end();
/// slider.oninput = (e) => { session.set_zoom_percent(+e.target.value); paint(); };
///
/// function paint() {
///   img.style.transform =
///     `translate(${session.pan_x}px, ${session.pan_y}px) scale(${session.zoom})`;
/// }
///
/// applyBtn.onclick = () => { profile.image = session.apply(); };
/// ```
#[wasm_bindgen]
pub struct JsCropSession {
    inner: CropSession,
}

#[wasm_bindgen]
impl JsCropSession {
    /// Start a session for a viewport of the given display size, producing
    /// an output frame of the given pixel size.
    #[wasm_bindgen(constructor)]
    pub fn new(
        viewport_width: f64,
        viewport_height: f64,
        output_width: u32,
        output_height: u32,
    ) -> Result<JsCropSession, JsValue> {
        let inner = CropSession::new(
            Viewport::new(viewport_width, viewport_height),
            output_width,
            output_height,
        )
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(JsCropSession { inner })
    }

    /// Attach the decoded photo; fits, centers and resets zoom to 100%.
    pub fn attach_image(&mut self, image: &JsSourceImage) -> Result<(), JsValue> {
        self.inner
            .attach_image(image.to_core())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Begin a pointer drag at the given viewport position.
    pub fn drag_start(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        self.inner
            .drag_start(x, y)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Update the pan for a pointer move; ignored when no drag is active.
    pub fn drag_move(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        self.inner
            .drag_move(x, y)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// End the active drag, if any.
    pub fn drag_end(&mut self) -> Result<(), JsValue> {
        self.inner
            .drag_end()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Set zoom from the slider percentage (clamped to 10-300).
    pub fn set_zoom_percent(&mut self, percent: f64) -> Result<(), JsValue> {
        self.inner
            .set_zoom_percent(percent)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Current horizontal pan, viewport display units. 0 before an image
    /// is attached or after the session ends.
    #[wasm_bindgen(getter)]
    pub fn pan_x(&self) -> f64 {
        self.inner.crop_state().map(|s| s.pan_x).unwrap_or(0.0)
    }

    /// Current vertical pan, viewport display units.
    #[wasm_bindgen(getter)]
    pub fn pan_y(&self) -> f64 {
        self.inner.crop_state().map(|s| s.pan_y).unwrap_or(0.0)
    }

    /// Current zoom factor (1.0 = fitted size).
    #[wasm_bindgen(getter)]
    pub fn zoom(&self) -> f64 {
        self.inner.crop_state().map(|s| s.zoom).unwrap_or(1.0)
    }

    /// The session phase: "awaiting-image", "ready", "applied" or
    /// "cancelled".
    pub fn phase(&self) -> String {
        match self.inner.phase() {
            SessionPhase::AwaitingImageLoad => "awaiting-image",
            SessionPhase::Ready => "ready",
            SessionPhase::Applied => "applied",
            SessionPhase::Cancelled => "cancelled",
        }
        .to_string()
    }

    /// Rasterize and encode the crop, ending the session. Returns the
    /// frame as a `data:image/jpeg;base64,...` URI.
    pub fn apply(&mut self) -> Result<String, JsValue> {
        self.inner
            .apply()
            .map(|raster| raster.to_data_uri())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Discard the crop and end the session.
    pub fn cancel(&mut self) -> Result<(), JsValue> {
        self.inner
            .cancel()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(width: u32, height: u32) -> JsSourceImage {
        JsSourceImage::new(width, height, vec![180u8; (width * height * 3) as usize])
    }

    #[test]
    fn test_session_lifecycle() {
        let mut session = JsCropSession::new(400.0, 500.0, 400, 500).unwrap();
        assert_eq!(session.phase(), "awaiting-image");

        session.attach_image(&photo(800, 1000)).unwrap();
        assert_eq!(session.phase(), "ready");

        session.drag_start(10.0, 10.0).unwrap();
        session.drag_move(50.0, 30.0).unwrap();
        session.drag_end().unwrap();
        assert_eq!(session.pan_x(), 40.0);
        assert_eq!(session.pan_y(), 20.0);

        session.set_zoom_percent(200.0).unwrap();
        assert_eq!(session.zoom(), 2.0);

        let uri = session.apply().unwrap();
        assert!(uri.starts_with("data:image/jpeg;base64,"));
        assert_eq!(session.phase(), "applied");
    }

    #[test]
    fn test_cancel_ends_session() {
        let mut session = JsCropSession::new(400.0, 500.0, 400, 500).unwrap();
        session.attach_image(&photo(100, 100)).unwrap();
        session.cancel().unwrap();
        assert_eq!(session.phase(), "cancelled");
    }

    #[test]
    fn test_getters_default_before_attach() {
        let session = JsCropSession::new(400.0, 500.0, 400, 500).unwrap();
        assert_eq!(session.pan_x(), 0.0);
        assert_eq!(session.pan_y(), 0.0);
        assert_eq!(session.zoom(), 1.0);
    }

    #[test]
    fn test_wide_photo_centers_with_overflow() {
        let mut session = JsCropSession::new(400.0, 500.0, 400, 500).unwrap();
        session.attach_image(&photo(2000, 1000)).unwrap();

        assert_eq!(session.pan_x(), -300.0);
        assert_eq!(session.pan_y(), 0.0);
    }
}
