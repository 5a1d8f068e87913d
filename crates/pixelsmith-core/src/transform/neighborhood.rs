//! Windowed averaging: block pixelation and 3×3 box blur.
//!
//! Both transforms average only in-bounds samples, so windows clipped by the
//! image border divide by their actual sample count. Division truncates.

use std::ops::Range;

use rayon::prelude::*;

use crate::buffer::{Color, PixelBuffer};
use crate::error::TransformError;
use crate::transform::rows::render_rows;

/// Replace each `block_size × block_size` tile with its mean color.
///
/// Tiles start at the top-left corner. The last tile column/row is narrower
/// when the image size is not a multiple of `block_size`; such tiles average
/// only the pixels they contain.
///
/// Fails with [`TransformError::InvalidInput`] if `block_size <= 0`.
pub fn pixelate(img: &PixelBuffer, block_size: i64) -> Result<PixelBuffer, TransformError> {
    if block_size <= 0 {
        return Err(TransformError::invalid(format!(
            "pixelate block size must be positive, got {block_size}"
        )));
    }

    let (w, h) = (img.width() as usize, img.height() as usize);
    // A tile larger than the image behaves like one covering all of it.
    let block = usize::try_from(block_size).unwrap_or(usize::MAX).min(w.max(h).max(1));
    let tiles_x = w.div_ceil(block);
    let tiles_y = h.div_ceil(block);
    tracing::debug!(block, tiles_x, tiles_y, "pixelate");

    let means: Vec<Color> = (0..tiles_y)
        .into_par_iter()
        .flat_map_iter(|ty| {
            let y0 = ty * block;
            let y1 = (y0 + block).min(h);
            (0..tiles_x).map(move |tx| {
                let x0 = tx * block;
                let x1 = (x0 + block).min(w);
                window_mean(img, x0..x1, y0..y1)
            })
        })
        .collect();

    Ok(render_rows(img.width(), img.height(), |y, out| {
        let tile_row = &means[(y / block) * tiles_x..][..tiles_x];
        for (span, mean) in out.chunks_mut(block).zip(tile_row) {
            span.fill(*mean);
        }
    }))
}

/// 3×3 box blur over in-bounds neighbors.
///
/// Interior pixels average 9 samples, edge pixels 6, corners 4.
pub fn blur(img: &PixelBuffer) -> PixelBuffer {
    let (w, h) = (img.width() as usize, img.height() as usize);
    render_rows(img.width(), img.height(), |y, out| {
        let rows = y.saturating_sub(1)..(y + 2).min(h);
        for (x, dst) in out.iter_mut().enumerate() {
            let cols = x.saturating_sub(1)..(x + 2).min(w);
            *dst = window_mean(img, cols, rows.clone());
        }
    })
}

/// Truncated per-channel mean over a non-empty rectangle of `img`.
fn window_mean(img: &PixelBuffer, cols: Range<usize>, rows: Range<usize>) -> Color {
    let count = (cols.len() * rows.len()) as u64;
    debug_assert!(count > 0);

    let mut sum = [0u64; 3];
    for y in rows {
        for px in &img.row(y as u32)[cols.clone()] {
            sum[0] += u64::from(px.r);
            sum[1] += u64::from(px.g);
            sum[2] += u64::from(px.b);
        }
    }

    let [r, g, b] = sum.map(|s| (s / count) as u8);
    Color::new(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::from_fn(width, height, |x, y| {
            let i = (y * width + x) as u8;
            Color::new(i * 10, i, 255 - i)
        })
        .unwrap()
    }

    #[test]
    fn test_pixelate_averages_each_block() {
        let out = pixelate(&sequence(4, 4), 2).unwrap();
        let expected = [
            ((0, 0), Color::new(25, 2, 252)),
            ((2, 0), Color::new(45, 4, 250)),
            ((0, 2), Color::new(105, 10, 244)),
            ((2, 2), Color::new(125, 12, 242)),
        ];
        for ((bx, by), color) in expected {
            for (dx, dy) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
                assert_eq!(out.pixel(bx + dx, by + dy), color, "block at ({bx}, {by})");
            }
        }
    }

    #[test]
    fn test_pixelate_partial_blocks_average_in_bounds_pixels() {
        // 3×3 with block 2: tiles of 2×2, 1×2, 2×1 and 1×1.
        let img = sequence(3, 3);
        let out = pixelate(&img, 2).unwrap();
        // Right column tile covers indices 2 and 5.
        assert_eq!(out.pixel(2, 0), Color::new(35, 3, 251));
        assert_eq!(out.pixel(2, 1), Color::new(35, 3, 251));
        // Bottom row tile covers indices 6 and 7.
        assert_eq!(out.pixel(0, 2), Color::new(65, 6, 248));
        // Corner tile is the single pixel 8.
        assert_eq!(out.pixel(2, 2), img.pixel(2, 2));
    }

    #[test]
    fn test_pixelate_block_one_is_identity() {
        let img = sequence(5, 3);
        assert_eq!(pixelate(&img, 1).unwrap(), img);
    }

    #[test]
    fn test_pixelate_oversized_block_averages_whole_image() {
        let img = sequence(2, 2);
        let out = pixelate(&img, i64::MAX).unwrap();
        // indices 0..4: r = 15, g = 1, b = 253
        assert!(out.pixels().iter().all(|&px| px == Color::new(15, 1, 253)));
    }

    #[test]
    fn test_pixelate_rejects_non_positive_block() {
        let img = sequence(2, 2);
        for block in [0, -1, -64] {
            assert!(matches!(pixelate(&img, block), Err(TransformError::InvalidInput(_))));
        }
    }

    #[test]
    fn test_blur_single_pixel_is_unchanged() {
        let img = PixelBuffer::from_pixels(1, 1, &[Color::new(9, 99, 199)]).unwrap();
        assert_eq!(blur(&img), img);
    }

    #[test]
    fn test_blur_sample_counts_at_corners_and_edges() {
        let img = sequence(3, 3);
        let out = blur(&img);
        // Corner (0,0): indices 0, 1, 3, 4 → g = 8 / 4
        assert_eq!(out.pixel(0, 0).g, 2);
        // Top edge (1,0): indices 0..=5 → g = 15 / 6
        assert_eq!(out.pixel(1, 0).g, 2);
        // Center: all nine → g = 36 / 9
        assert_eq!(out.pixel(1, 1), Color::new(40, 4, 251));
        // Bottom-right corner: indices 4, 5, 7, 8 → g = 24 / 4
        assert_eq!(out.pixel(2, 2).g, 6);
    }

    #[test]
    fn test_blur_uniform_image_is_unchanged() {
        let img = PixelBuffer::from_fn(6, 4, |_, _| Color::new(17, 34, 51)).unwrap();
        assert_eq!(blur(&img), img);
    }
}
