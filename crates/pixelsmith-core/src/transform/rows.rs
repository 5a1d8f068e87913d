//! Row-partitioned output construction.
//!
//! Every transform writes its result through [`render_rows`]. Each output row
//! depends only on the read-only source, so rows are disjoint work items that
//! can be filled in any order.

use rayon::prelude::*;

use crate::buffer::{CHANNELS, Color, PixelBuffer};

/// Images with at least this many pixels are filled on the rayon pool.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 1 << 16;

/// Allocate a black `width × height` buffer and let `fill(y, row)` write
/// every row.
///
/// Rows left untouched by `fill` stay black.
pub(crate) fn render_rows<F>(width: u32, height: u32, fill: F) -> PixelBuffer
where
    F: Fn(usize, &mut [Color]) + Sync,
{
    let w = width as usize;
    let h = height as usize;
    let mut data = vec![0u8; w * h * CHANNELS];

    if w > 0 && h > 0 {
        let stride = w * CHANNELS;
        let write_row = |(y, row): (usize, &mut [u8])| fill(y, bytemuck::cast_slice_mut(row));

        if w * h >= PARALLEL_PIXEL_THRESHOLD {
            data.par_chunks_mut(stride).enumerate().for_each(write_row);
        } else {
            data.chunks_mut(stride).enumerate().for_each(write_row);
        }
    }

    PixelBuffer::from_validated(width, height, data)
}

/// Apply `f` to every pixel independently.
pub(crate) fn map_pixels<F>(src: &PixelBuffer, f: F) -> PixelBuffer
where
    F: Fn(Color) -> Color + Sync,
{
    render_rows(src.width(), src.height(), |y, out| {
        for (dst, &px) in out.iter_mut().zip(src.row(y as u32)) {
            *dst = f(px);
        }
    })
}
