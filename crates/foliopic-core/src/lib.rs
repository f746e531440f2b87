//! Foliopic Core - image and document engine for the portfolio editor
//!
//! This crate provides the logic shared by the portfolio site's two pages:
//! decoding an uploaded photo, running an interactive pan/zoom crop session
//! over it, rasterizing and JPEG-encoding the cropped frame, and modelling
//! the portfolio document that stores the result.
//!
//! Everything is synchronous and single-threaded; the crate is designed to
//! run on the browser's UI thread through the `foliopic-wasm` bindings,
//! with the host owning the DOM, the file picker, and web storage.

pub mod crop;
pub mod decode;
pub mod document;
pub mod encode;

pub use crop::{
    CropSession, CropState, DisplayTransform, OutputRaster, SessionError, SessionPhase, Viewport,
};
pub use decode::{decode_image, DecodeError, PixelBuffer};
pub use document::PortfolioDocument;
pub use encode::{encode_jpeg, EncodeError};

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// The whole upload-to-document flow: encode a photo, decode it, crop
    /// it in a session, store the result in the portfolio document.
    #[test]
    fn test_upload_crop_store_flow() {
        // A 800x1000 "photo", top half orange, bottom half teal
        let mut img = image::RgbImage::new(800, 1000);
        for (_, y, px) in img.enumerate_pixels_mut() {
            *px = if y < 500 {
                image::Rgb([230, 126, 34])
            } else {
                image::Rgb([26, 188, 156])
            };
        }
        let mut upload = Cursor::new(Vec::new());
        img.write_to(&mut upload, image::ImageFormat::Png).unwrap();

        let photo = decode_image(upload.get_ref()).unwrap();
        assert_eq!((photo.width, photo.height), (800, 1000));

        let mut session = CropSession::for_profile_photo(Viewport::new(400.0, 500.0)).unwrap();
        assert_eq!(session.phase(), SessionPhase::AwaitingImageLoad);

        session.attach_image(photo).unwrap();
        session.drag_start(120.0, 80.0).unwrap();
        session.drag_move(110.0, 95.0).unwrap();
        session.drag_end().unwrap();
        session.set_zoom_percent(120.0).unwrap();

        let raster = session.apply().unwrap();
        assert_eq!(session.phase(), SessionPhase::Applied);
        assert_eq!((raster.width, raster.height), (400, 500));
        assert_eq!(&raster.bytes[0..2], &[0xFF, 0xD8]);

        let mut doc = PortfolioDocument::default();
        doc.set_profile_image(&raster);
        assert!(doc.profile.image.starts_with("data:image/jpeg;base64,"));

        let mut store = document::MemoryStore::new();
        document::save_document(&mut store, &doc).unwrap();
        let loaded = document::load_document(&store).unwrap().unwrap();
        assert_eq!(loaded.profile.image, doc.profile.image);
    }
}
