//! Viewport fitting for the crop preview.
//!
//! The preview window (viewport) has a fixed size; the uploaded photo is
//! scaled once, aspect preserved, so that it covers the viewport completely
//! at 100% zoom. The relatively longer side overflows and can be panned.
//! Cover-fit trades edge cropping for a viewport with no letterboxing.

/// The fixed-size crop window shown to the user, in display units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// On-screen size of the source image after the aspect-preserving cover fit,
/// before any zoom is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayTransform {
    pub width: f64,
    pub height: f64,
}

impl DisplayTransform {
    /// Fit an image into the viewport.
    ///
    /// An image relatively wider than the viewport is fitted by height and
    /// overflows horizontally; otherwise it is fitted by width and overflows
    /// vertically. Equal aspect ratios fit exactly. This rule applies
    /// regardless of viewport orientation, so a landscape photo in a
    /// portrait viewport can overflow by a large margin.
    pub fn fit(image_width: u32, image_height: u32, viewport: Viewport) -> Self {
        let image_aspect = image_width as f64 / image_height as f64;

        if image_aspect > viewport.aspect_ratio() {
            let height = viewport.height;
            Self {
                width: height * image_aspect,
                height,
            }
        } else {
            let width = viewport.width;
            Self {
                width,
                height: width / image_aspect,
            }
        }
    }

    /// Pan offsets that center the fitted image in the viewport.
    ///
    /// Both components are <= 0 because the fitted image covers the
    /// viewport.
    pub fn centered_pan(&self, viewport: Viewport) -> (f64, f64) {
        (
            (viewport.width - self.width) / 2.0,
            (viewport.height - self.height) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_equal_aspect_fits_exactly() {
        // 800x1000 into 400x500: both aspect 0.8
        let viewport = Viewport::new(400.0, 500.0);
        let display = DisplayTransform::fit(800, 1000, viewport);

        assert!((display.width - 400.0).abs() < EPS);
        assert!((display.height - 500.0).abs() < EPS);
    }

    #[test]
    fn test_wide_image_fits_by_height() {
        let viewport = Viewport::new(400.0, 500.0);
        let display = DisplayTransform::fit(2000, 1000, viewport);

        assert!((display.height - 500.0).abs() < EPS);
        assert!((display.width - 1000.0).abs() < EPS); // 500 * 2.0
        assert!(display.width >= viewport.width);
    }

    #[test]
    fn test_tall_image_fits_by_width() {
        let viewport = Viewport::new(400.0, 500.0);
        let display = DisplayTransform::fit(1000, 4000, viewport);

        assert!((display.width - 400.0).abs() < EPS);
        assert!((display.height - 1600.0).abs() < EPS); // 400 / 0.25
        assert!(display.height >= viewport.height);
    }

    #[test]
    fn test_landscape_photo_in_portrait_viewport_overflows_wide() {
        // The fit rule keeps applying by relative aspect, so a panoramic
        // photo in a portrait window overflows horizontally by a lot.
        let viewport = Viewport::new(400.0, 500.0);
        let display = DisplayTransform::fit(3000, 1000, viewport);

        assert!((display.height - 500.0).abs() < EPS);
        assert!((display.width - 1500.0).abs() < EPS);
    }

    #[test]
    fn test_centered_pan_splits_overflow_evenly() {
        let viewport = Viewport::new(400.0, 500.0);
        let display = DisplayTransform {
            width: 1000.0,
            height: 500.0,
        };

        let (pan_x, pan_y) = display.centered_pan(viewport);
        assert!((pan_x - (-300.0)).abs() < EPS);
        assert!(pan_y.abs() < EPS);
    }

    #[test]
    fn test_centered_pan_maps_viewport_midpoint_to_image_midpoint() {
        let viewport = Viewport::new(400.0, 500.0);
        let display = DisplayTransform::fit(1800, 1200, viewport);
        let (pan_x, pan_y) = display.centered_pan(viewport);

        // Viewport center in image display coordinates
        let cx = (viewport.width / 2.0 - pan_x) / display.width;
        let cy = (viewport.height / 2.0 - pan_y) / display.height;

        assert!((cx - 0.5).abs() < EPS);
        assert!((cy - 0.5).abs() < EPS);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
