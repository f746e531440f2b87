//! Image encoding for the crop pipeline.
//!
//! The crop session's rasterized frame leaves the engine as JPEG bytes;
//! the host wraps them in a data URI for the portfolio document. All
//! operations are synchronous and deterministic.

mod jpeg;

pub use jpeg::{encode_jpeg, EncodeError, DEFAULT_JPEG_QUALITY};
