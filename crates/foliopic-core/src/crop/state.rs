//! Session-scoped pan and zoom state.
//!
//! Pan offsets are in viewport display units and position the fitted
//! image's top-left corner relative to the viewport origin. Zoom scales
//! the fitted size multiplicatively around that origin, so pan and zoom
//! compose as `translate(pan) . scale(zoom)` and neither re-anchors the
//! other. Nothing here clamps the pan to the image bounds; rasterization
//! tolerates any overlap, including none.

use super::{DisplayTransform, Viewport};

/// Lower bound of the zoom slider, in percent.
pub const MIN_ZOOM_PERCENT: f64 = 10.0;
/// Upper bound of the zoom slider, in percent.
pub const MAX_ZOOM_PERCENT: f64 = 300.0;

/// Mutable pan/zoom parameters for one crop session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropState {
    /// Horizontal offset of the fitted image, viewport display units.
    pub pan_x: f64,
    /// Vertical offset of the fitted image, viewport display units.
    pub pan_y: f64,
    /// Multiplicative scale over the fitted display size. 1.0 = fitted.
    pub zoom: f64,
}

impl CropState {
    /// Initial state: fitted image centered in the viewport at 100% zoom.
    pub fn centered(display: DisplayTransform, viewport: Viewport) -> Self {
        let (pan_x, pan_y) = display.centered_pan(viewport);
        Self {
            pan_x,
            pan_y,
            zoom: 1.0,
        }
    }

    /// Set zoom from a slider percentage, clamped to the slider domain.
    pub fn set_zoom_percent(&mut self, percent: f64) {
        self.zoom = percent.clamp(MIN_ZOOM_PERCENT, MAX_ZOOM_PERCENT) / 100.0;
    }

    /// The on-screen image rectangle under the current transform:
    /// origin at `(pan_x, pan_y)`, size `display * zoom`.
    pub fn screen_rect(&self, display: DisplayTransform) -> (f64, f64, f64, f64) {
        (
            self.pan_x,
            self.pan_y,
            display.width * self.zoom,
            display.height * self.zoom,
        )
    }
}

/// An in-flight pointer drag.
///
/// The anchor is the pointer position at press minus the pan at press.
/// Every move repositions the pan absolutely from that anchor, so the image
/// stays locked to the cursor no matter how fast the pointer moves or how
/// many move events get coalesced.
#[derive(Debug, Clone, Copy)]
pub struct DragGesture {
    anchor_x: f64,
    anchor_y: f64,
}

impl DragGesture {
    /// Capture the anchor at pointer press.
    pub fn begin(pointer_x: f64, pointer_y: f64, state: &CropState) -> Self {
        Self {
            anchor_x: pointer_x - state.pan_x,
            anchor_y: pointer_y - state.pan_y,
        }
    }

    /// Reposition the pan from the anchor for a pointer move.
    pub fn update(&self, pointer_x: f64, pointer_y: f64, state: &mut CropState) {
        state.pan_x = pointer_x - self.anchor_x;
        state.pan_y = pointer_y - self.anchor_y;
    }
}
