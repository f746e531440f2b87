//! Interactive profile-photo cropping.
//!
//! A crop runs as one session over one decoded photo:
//!
//! 1. The photo is cover-fitted into the fixed viewport and centered.
//! 2. The user pans (pointer drag) and zooms (slider percentage); both
//!    mutate the session's [`CropState`] and nothing else.
//! 3. Applying rasterizes exactly the viewport-visible region into a
//!    fixed-size frame and JPEG-encodes it; cancelling discards the state.
//!
//! # Coordinate System
//!
//! - Viewport display units: origin at the viewport's top-left corner.
//! - Pan positions the fitted image's top-left corner in those units.
//! - Zoom scales the fitted size about the viewport origin, composing as
//!   `translate(pan) . scale(zoom)`.
//! - The output frame has its own fixed pixel size; rasterization rescales
//!   viewport units onto it per axis.

mod fit;
mod raster;
mod session;
mod state;

pub use fit::{DisplayTransform, Viewport};
pub use raster::rasterize;
pub use session::{
    CropSession, OutputRaster, SessionError, SessionPhase, OUTPUT_HEIGHT, OUTPUT_WIDTH,
};
pub use state::{CropState, DragGesture, MAX_ZOOM_PERCENT, MIN_ZOOM_PERCENT};
