//! Image decoding for the profile-photo editor.
//!
//! This module turns the raw bytes handed over by the host file picker into
//! RGB pixel buffers the crop session can work on. Decoding is the one
//! long-latency step of a crop session; the host performs it once up front
//! and the rest of the pipeline is synchronous.
//!
//! # Examples
//!
//! ```ignore
//! use foliopic_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod photo;
mod types;

pub use photo::{decode_image, image_orientation};
pub use types::{DecodeError, Orientation, PixelBuffer};
