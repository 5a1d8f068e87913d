//! Geometric transforms: in-place-canvas rotation and mirroring.

use glam::DVec2;

use crate::buffer::PixelBuffer;
use crate::transform::rows::render_rows;

/// Rotate by `degrees` about the image center.
///
/// The canvas keeps its `W × H` size. For each destination pixel `(x, y)`
/// the source coordinate is the center offset rotated by the angle:
///
/// ```text
/// (a, b) = (x − cx, y − cy)            cx = (W − 1) / 2, cy = (H − 1) / 2
/// sx = a·cos θ − b·sin θ + cx
/// sy = a·sin θ + b·cos θ + cy
/// ```
///
/// `sx`/`sy` are truncated toward zero (nearest-neighbor, no interpolation).
/// Destinations whose source lands outside the image are left black.
pub fn rotate(img: &PixelBuffer, degrees: f64) -> PixelBuffer {
    tracing::debug!(degrees, "rotate clockwise");
    resample_rotated(img, degrees.to_radians())
}

/// Rotate by `degrees` in the opposite direction to [`rotate`].
///
/// ```text
/// sx =  a·cos θ + b·sin θ + cx
/// sy = −a·sin θ + b·cos θ + cy
/// ```
pub fn rotate_counterclockwise(img: &PixelBuffer, degrees: f64) -> PixelBuffer {
    tracing::debug!(degrees, "rotate counterclockwise");
    resample_rotated(img, -degrees.to_radians())
}

fn resample_rotated(img: &PixelBuffer, radians: f64) -> PixelBuffer {
    let rotation = DVec2::from_angle(radians);
    let (width, height) = (i64::from(img.width()), i64::from(img.height()));
    let center = DVec2::new(0.5 * (width - 1) as f64, 0.5 * (height - 1) as f64);

    render_rows(img.width(), img.height(), |y, out| {
        for (x, dst) in out.iter_mut().enumerate() {
            let offset = DVec2::new(x as f64, y as f64) - center;
            let src = offset.rotate(rotation) + center;
            let (sx, sy) = (src.x as i64, src.y as i64);
            if (0..width).contains(&sx) && (0..height).contains(&sy) {
                *dst = img.pixel(sx as u32, sy as u32);
            }
        }
    })
}

/// Flip left to right: `out[x, y] = in[W − 1 − x, y]`. Self-inverse.
pub fn mirror_horizontal(img: &PixelBuffer) -> PixelBuffer {
    render_rows(img.width(), img.height(), |y, out| {
        out.copy_from_slice(img.row(y as u32));
        out.reverse();
    })
}

/// Flip top to bottom: `out[x, y] = in[x, H − 1 − y]`. Self-inverse.
pub fn mirror_vertical(img: &PixelBuffer) -> PixelBuffer {
    let last = img.height().saturating_sub(1);
    render_rows(img.width(), img.height(), |y, out| {
        out.copy_from_slice(img.row(last - y as u32));
    })
}
