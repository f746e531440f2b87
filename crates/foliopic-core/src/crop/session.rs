//! Crop session lifecycle.
//!
//! One `CropSession` owns everything for a single crop interaction: the
//! decoded photo, the fitted display size, and the pan/zoom state. The
//! session moves through `AwaitingImageLoad -> Ready -> Applied` or
//! `Cancelled`; pan and zoom loop on `Ready`. Applying emits exactly one
//! encoded frame and disposes the session; cancelling emits nothing.
//!
//! Image decoding is the caller's job (it is the one asynchronous step on
//! the host side). A session whose decode failed simply never receives an
//! image and is dropped; nothing outside the session is affected.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

use crate::decode::PixelBuffer;
use crate::encode::{encode_jpeg, EncodeError, DEFAULT_JPEG_QUALITY};

use super::{rasterize, CropState, DisplayTransform, DragGesture, Viewport};

/// Output frame width for portfolio profile photos.
pub const OUTPUT_WIDTH: u32 = 400;
/// Output frame height for portfolio profile photos.
pub const OUTPUT_HEIGHT: u32 = 500;

/// Errors from crop session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Viewport or output dimensions are zero or not finite.
    #[error("viewport and output dimensions must be positive")]
    InvalidDimensions,

    /// The attached image has no pixels.
    #[error("attached image is empty")]
    EmptyImage,

    /// An image is already attached to this session.
    #[error("an image is already attached")]
    ImageAlreadyAttached,

    /// The session is still waiting for an image.
    #[error("no image attached yet")]
    NoImage,

    /// The session was already applied or cancelled.
    #[error("crop session already ended")]
    Disposed,

    /// Encoding the output frame failed; the session stays usable.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Where a session currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingImageLoad,
    Ready,
    Applied,
    Cancelled,
}

/// The encoded crop result: JPEG bytes at the fixed output size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRaster {
    pub width: u32,
    pub height: u32,
    /// JPEG-encoded image data.
    pub bytes: Vec<u8>,
}

impl OutputRaster {
    /// Render as a `data:` URI - the form the portfolio document stores in
    /// its `profile.image` field.
    pub fn to_data_uri(&self) -> String {
        format!("data:image/jpeg;base64,{}", STANDARD.encode(&self.bytes))
    }
}

enum State {
    AwaitingImageLoad,
    Ready {
        image: PixelBuffer,
        display: DisplayTransform,
        crop: CropState,
        drag: Option<DragGesture>,
    },
    Applied,
    Cancelled,
}

/// An interactive crop session over one uploaded photo.
pub struct CropSession {
    viewport: Viewport,
    output_width: u32,
    output_height: u32,
    state: State,
}

impl CropSession {
    /// Start a session for the given crop window and output frame size.
    /// The session waits for the decoded image.
    pub fn new(
        viewport: Viewport,
        output_width: u32,
        output_height: u32,
    ) -> Result<Self, SessionError> {
        let dims_ok = viewport.width.is_finite()
            && viewport.height.is_finite()
            && viewport.width > 0.0
            && viewport.height > 0.0
            && output_width > 0
            && output_height > 0;
        if !dims_ok {
            return Err(SessionError::InvalidDimensions);
        }

        Ok(Self {
            viewport,
            output_width,
            output_height,
            state: State::AwaitingImageLoad,
        })
    }

    /// Start a session producing the standard profile-photo frame.
    pub fn for_profile_photo(viewport: Viewport) -> Result<Self, SessionError> {
        Self::new(viewport, OUTPUT_WIDTH, OUTPUT_HEIGHT)
    }

    pub fn phase(&self) -> SessionPhase {
        match self.state {
            State::AwaitingImageLoad => SessionPhase::AwaitingImageLoad,
            State::Ready { .. } => SessionPhase::Ready,
            State::Applied => SessionPhase::Applied,
            State::Cancelled => SessionPhase::Cancelled,
        }
    }

    /// Attach the decoded photo, fitting and centering it in the viewport
    /// at 100% zoom. Legal exactly once, before apply or cancel.
    pub fn attach_image(&mut self, image: PixelBuffer) -> Result<(), SessionError> {
        match self.state {
            State::AwaitingImageLoad => {
                if image.is_empty() {
                    return Err(SessionError::EmptyImage);
                }
                let display = DisplayTransform::fit(image.width, image.height, self.viewport);
                let crop = CropState::centered(display, self.viewport);
                self.state = State::Ready {
                    image,
                    display,
                    crop,
                    drag: None,
                };
                Ok(())
            }
            State::Ready { .. } => Err(SessionError::ImageAlreadyAttached),
            State::Applied | State::Cancelled => Err(SessionError::Disposed),
        }
    }

    fn controls_mut(
        &mut self,
    ) -> Result<(&mut CropState, &mut Option<DragGesture>), SessionError> {
        match &mut self.state {
            State::Ready { crop, drag, .. } => Ok((crop, drag)),
            State::AwaitingImageLoad => Err(SessionError::NoImage),
            State::Applied | State::Cancelled => Err(SessionError::Disposed),
        }
    }

    /// Begin a pointer drag at the given viewport position.
    pub fn drag_start(&mut self, x: f64, y: f64) -> Result<(), SessionError> {
        let (crop, drag) = self.controls_mut()?;
        *drag = Some(DragGesture::begin(x, y, crop));
        Ok(())
    }

    /// Reposition the pan for a pointer move. Moves without an active drag
    /// are ignored, like pointer moves over the preview without a press.
    pub fn drag_move(&mut self, x: f64, y: f64) -> Result<(), SessionError> {
        let (crop, drag) = self.controls_mut()?;
        if let Some(gesture) = drag {
            gesture.update(x, y, crop);
        }
        Ok(())
    }

    /// End the active drag, if any.
    pub fn drag_end(&mut self) -> Result<(), SessionError> {
        let (_, drag) = self.controls_mut()?;
        *drag = None;
        Ok(())
    }

    /// Set zoom from the slider percentage (clamped to the slider domain).
    pub fn set_zoom_percent(&mut self, percent: f64) -> Result<(), SessionError> {
        let (crop, _) = self.controls_mut()?;
        crop.set_zoom_percent(percent);
        Ok(())
    }

    /// The current pan/zoom state, for rendering the preview transform.
    pub fn crop_state(&self) -> Result<CropState, SessionError> {
        match &self.state {
            State::Ready { crop, .. } => Ok(*crop),
            State::AwaitingImageLoad => Err(SessionError::NoImage),
            State::Applied | State::Cancelled => Err(SessionError::Disposed),
        }
    }

    /// The fitted on-screen size of the attached image.
    pub fn display_transform(&self) -> Result<DisplayTransform, SessionError> {
        match &self.state {
            State::Ready { display, .. } => Ok(*display),
            State::AwaitingImageLoad => Err(SessionError::NoImage),
            State::Applied | State::Cancelled => Err(SessionError::Disposed),
        }
    }

    /// Rasterize and encode the crop, ending the session.
    ///
    /// On success the session is disposed and the encoded frame returned.
    /// If encoding fails the session stays `Ready` so the caller can retry.
    pub fn apply(&mut self) -> Result<OutputRaster, SessionError> {
        let (output_width, output_height) = (self.output_width, self.output_height);
        let viewport = self.viewport;

        let bytes = match &self.state {
            State::Ready {
                image,
                display,
                crop,
                ..
            } => {
                let frame = rasterize(image, viewport, *display, crop, output_width, output_height);
                encode_jpeg(&frame, DEFAULT_JPEG_QUALITY)?
            }
            State::AwaitingImageLoad => return Err(SessionError::NoImage),
            State::Applied | State::Cancelled => return Err(SessionError::Disposed),
        };

        self.state = State::Applied;
        Ok(OutputRaster {
            width: output_width,
            height: output_height,
            bytes,
        })
    }

    /// Discard the crop and end the session. Emits nothing.
    pub fn cancel(&mut self) -> Result<(), SessionError> {
        match self.state {
            State::Ready { .. } => {
                self.state = State::Cancelled;
                Ok(())
            }
            State::AwaitingImageLoad => Err(SessionError::NoImage),
            State::Applied | State::Cancelled => Err(SessionError::Disposed),
        }
    }
}
