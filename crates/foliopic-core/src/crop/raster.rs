//! Crop rasterization: the viewport-visible region as a fixed-size frame.
//!
//! # Algorithm
//!
//! The on-screen image rectangle (origin at the pan offset, size equal to
//! the fitted display size times zoom) is mapped from viewport display
//! units into output pixels, per axis. Each output pixel is then
//! inverse-mapped to a source position and sampled bilinearly. Output
//! pixels the rectangle does not reach stay black, which is how partial or
//! empty image/viewport overlap degrades: a blank region, never a failure.
//!
//! This is the explicit-intersection formulation of "draw the oversized
//! scaled image and let the canvas clip it" - same pixels out, without
//! materializing the oversized intermediate.

use crate::decode::PixelBuffer;

use super::{CropState, DisplayTransform, Viewport};

/// Rasterize the crop described by `state` into an RGB frame of exactly
/// `output_width` x `output_height` pixels.
///
/// The output is independent of the on-screen pixel density: the viewport
/// is re-scaled onto the output frame, so the frame contains exactly what
/// the viewport shows regardless of the preview's CSS size.
pub fn rasterize(
    image: &PixelBuffer,
    viewport: Viewport,
    display: DisplayTransform,
    state: &CropState,
    output_width: u32,
    output_height: u32,
) -> PixelBuffer {
    let mut pixels = vec![0u8; (output_width * output_height * 3) as usize];

    // Viewport display units -> output pixels, per axis.
    let sx = output_width as f64 / viewport.width;
    let sy = output_height as f64 / viewport.height;

    // The on-screen image rectangle mapped into output space.
    let (rect_x, rect_y, rect_w, rect_h) = state.screen_rect(display);
    let dest_x = rect_x * sx;
    let dest_y = rect_y * sy;
    let dest_w = rect_w * sx;
    let dest_h = rect_h * sy;

    if dest_w > 0.0 && dest_h > 0.0 && !image.is_empty() {
        let src_w = image.width as f64;
        let src_h = image.height as f64;

        for out_y in 0..output_height {
            // Sample at pixel centers
            let cy = out_y as f64 + 0.5;
            if cy < dest_y || cy >= dest_y + dest_h {
                continue;
            }
            let src_y = (cy - dest_y) / dest_h * src_h - 0.5;

            for out_x in 0..output_width {
                let cx = out_x as f64 + 0.5;
                if cx < dest_x || cx >= dest_x + dest_w {
                    continue;
                }
                let src_x = (cx - dest_x) / dest_w * src_w - 0.5;

                let rgb = sample_bilinear(image, src_x, src_y);
                let idx = ((out_y * output_width + out_x) * 3) as usize;
                pixels[idx] = rgb[0];
                pixels[idx + 1] = rgb[1];
                pixels[idx + 2] = rgb[2];
            }
        }
    }

    PixelBuffer::new(output_width, output_height, pixels)
}

/// Get a pixel as [f64; 3] from an image at the given coordinates.
#[inline]
fn pixel_f64(image: &PixelBuffer, px: u32, py: u32) -> [f64; 3] {
    let idx = ((py * image.width + px) * 3) as usize;
    [
        image.pixels[idx] as f64,
        image.pixels[idx + 1] as f64,
        image.pixels[idx + 2] as f64,
    ]
}

/// Sample a pixel using bilinear interpolation with clamp-to-edge.
///
/// `x`/`y` are pixel-center coordinates. Callers only pass positions inside
/// the drawn rectangle, so positions within half a pixel of the border
/// clamp to the edge row/column instead of bleeding in black.
fn sample_bilinear(image: &PixelBuffer, x: f64, y: f64) -> [u8; 3] {
    let max_x = (image.width - 1) as f64;
    let max_y = (image.height - 1) as f64;
    let x = x.clamp(0.0, max_x);
    let y = y.clamp(0.0, max_y);

    let x0 = x.floor() as u32;
    let y0 = y.floor() as u32;
    let x1 = (x0 + 1).min(image.width - 1);
    let y1 = (y0 + 1).min(image.height - 1);

    // Fractional distances
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let p00 = pixel_f64(image, x0, y0);
    let p10 = pixel_f64(image, x1, y0);
    let p01 = pixel_f64(image, x0, y1);
    let p11 = pixel_f64(image, x1, y1);

    let mut result = [0u8; 3];
    for i in 0..3 {
        let v = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_image(width: u32, height: u32, rgb: [u8; 3]) -> PixelBuffer {
        let pixels = rgb
            .iter()
            .copied()
            .cycle()
            .take((width * height * 3) as usize)
            .collect();
        PixelBuffer::new(width, height, pixels)
    }

    /// Left half red, right half blue.
    fn split_image(width: u32, height: u32) -> PixelBuffer {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for _y in 0..height {
            for x in 0..width {
                if x < width / 2 {
                    pixels.extend_from_slice(&[255, 0, 0]);
                } else {
                    pixels.extend_from_slice(&[0, 0, 255]);
                }
            }
        }
        PixelBuffer::new(width, height, pixels)
    }

    fn pixel_at(buf: &PixelBuffer, x: u32, y: u32) -> [u8; 3] {
        let idx = ((y * buf.width + x) * 3) as usize;
        [buf.pixels[idx], buf.pixels[idx + 1], buf.pixels[idx + 2]]
    }

    fn viewport() -> Viewport {
        Viewport::new(400.0, 500.0)
    }

    fn fitted(image: &PixelBuffer) -> DisplayTransform {
        DisplayTransform::fit(image.width, image.height, viewport())
    }

    #[test]
    fn test_exact_cover_fills_whole_frame() {
        // 800x1000 source, 400x500 viewport, zoom 1, centered pan (0,0):
        // the whole source lands on the whole frame.
        let image = uniform_image(800, 1000, [200, 150, 100]);
        let display = fitted(&image);
        let state = CropState::centered(display, viewport());
        assert_eq!((state.pan_x, state.pan_y), (0.0, 0.0));

        let out = rasterize(&image, viewport(), display, &state, 400, 500);
        assert_eq!(out.width, 400);
        assert_eq!(out.height, 500);
        assert!(out.pixels.iter().all(|&b| [200u8, 150, 100].contains(&b)));
        assert_eq!(pixel_at(&out, 0, 0), [200, 150, 100]);
        assert_eq!(pixel_at(&out, 399, 499), [200, 150, 100]);
    }

    #[test]
    fn test_exact_cover_preserves_layout() {
        let image = split_image(800, 1000);
        let display = fitted(&image);
        let state = CropState::centered(display, viewport());

        let out = rasterize(&image, viewport(), display, &state, 400, 500);

        // Halves stay halves after the 2x downscale
        assert_eq!(pixel_at(&out, 50, 250), [255, 0, 0]);
        assert_eq!(pixel_at(&out, 350, 250), [0, 0, 255]);
    }

    #[test]
    fn test_far_pan_yields_black_frame() {
        let image = uniform_image(800, 1000, [255, 255, 255]);
        let display = fitted(&image);
        let state = CropState {
            pan_x: 4000.0,
            pan_y: 0.0,
            zoom: 1.0,
        };

        let out = rasterize(&image, viewport(), display, &state, 400, 500);
        assert!(out.pixels.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_partial_overlap_leaves_uncovered_region_black() {
        let image = uniform_image(800, 1000, [255, 255, 255]);
        let display = fitted(&image);
        // Push the image halfway out to the right
        let state = CropState {
            pan_x: 200.0,
            pan_y: 0.0,
            zoom: 1.0,
        };

        let out = rasterize(&image, viewport(), display, &state, 400, 500);

        assert_eq!(pixel_at(&out, 0, 250), [0, 0, 0]);
        assert_eq!(pixel_at(&out, 150, 250), [0, 0, 0]);
        assert_eq!(pixel_at(&out, 250, 250), [255, 255, 255]);
        assert_eq!(pixel_at(&out, 399, 250), [255, 255, 255]);
    }

    #[test]
    fn test_zoom_magnifies_around_origin() {
        let image = split_image(800, 1000);
        let display = fitted(&image);
        // Zoom 2 with pan 0: the top-left quarter of the fitted image fills
        // the viewport, so the red/blue seam moves to the right edge.
        let state = CropState {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: 2.0,
        };

        let out = rasterize(&image, viewport(), display, &state, 400, 500);

        assert_eq!(pixel_at(&out, 100, 250), [255, 0, 0]);
        assert_eq!(pixel_at(&out, 300, 250), [255, 0, 0]);
    }

    #[test]
    fn test_output_independent_of_viewport_density() {
        // Same crop, viewport measured at half the display size: the frame
        // content must not change.
        let image = split_image(800, 1000);

        let vp_a = Viewport::new(400.0, 500.0);
        let display_a = DisplayTransform::fit(image.width, image.height, vp_a);
        let state_a = CropState::centered(display_a, vp_a);
        let out_a = rasterize(&image, vp_a, display_a, &state_a, 400, 500);

        let vp_b = Viewport::new(200.0, 250.0);
        let display_b = DisplayTransform::fit(image.width, image.height, vp_b);
        let state_b = CropState::centered(display_b, vp_b);
        let out_b = rasterize(&image, vp_b, display_b, &state_b, 400, 500);

        assert_eq!(out_a.pixels, out_b.pixels);
    }

    #[test]
    fn test_rasterize_is_deterministic() {
        let image = split_image(640, 480);
        let vp = Viewport::new(400.0, 500.0);
        let display = DisplayTransform::fit(image.width, image.height, vp);
        let state = CropState {
            pan_x: -83.0,
            pan_y: 21.5,
            zoom: 1.7,
        };

        let a = rasterize(&image, vp, display, &state, 400, 500);
        let b = rasterize(&image, vp, display, &state, 400, 500);
        assert_eq!(a.pixels, b.pixels);
    }

    #[test]
    fn test_empty_source_yields_black_frame() {
        let image = PixelBuffer::new(0, 0, vec![]);
        let vp = viewport();
        let display = DisplayTransform {
            width: 400.0,
            height: 500.0,
        };
        let state = CropState {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: 1.0,
        };

        let out = rasterize(&image, vp, display, &state, 400, 500);
        assert_eq!(out.pixels.len(), 400 * 500 * 3);
        assert!(out.pixels.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_single_pixel_source() {
        let image = uniform_image(1, 1, [9, 8, 7]);
        let vp = viewport();
        let display = DisplayTransform::fit(1, 1, vp);
        let state = CropState::centered(display, vp);

        let out = rasterize(&image, vp, display, &state, 40, 50);
        assert!(out
            .pixels
            .chunks(3)
            .all(|px| px == [9, 8, 7] || px == [0, 0, 0]));
        assert_eq!(pixel_at(&out, 20, 25), [9, 8, 7]);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
