//! Read-only pixel inspection.

use std::iter::FusedIterator;
use std::slice;

use crate::buffer::{Color, PixelBuffer};

/// Lazy row-major walk over the pixels of a buffer.
///
/// Produced by [`dump_pixel_values`]. Borrows the source; nothing is copied
/// until a pixel is yielded.
#[derive(Debug, Clone)]
pub struct PixelDump<'a> {
    pixels: slice::Iter<'a, Color>,
    width: u32,
    height: u32,
}

impl PixelDump<'_> {
    /// Pixels per row of the source buffer, for callers that break lines.
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Iterator for PixelDump<'_> {
    type Item = Color;

    fn next(&mut self) -> Option<Color> {
        self.pixels.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pixels.size_hint()
    }
}

impl ExactSizeIterator for PixelDump<'_> {}

impl FusedIterator for PixelDump<'_> {}

/// Every pixel of `img` as an `(R, G, B)` color, row by row.
pub fn dump_pixel_values(img: &PixelBuffer) -> PixelDump<'_> {
    PixelDump {
        pixels: img.pixels().iter(),
        width: img.width(),
        height: img.height(),
    }
}
