//! Per-pixel color transforms: grayscale, brightness, negative, sepia, and
//! single-channel filters.
//!
//! Each output pixel depends only on the source pixel at the same position.
//! Arithmetic is done in a wider type, truncated toward zero, then clamped
//! to `[0, 255]`.

use crate::buffer::{Color, PixelBuffer};
use crate::transform::rows::map_pixels;

/// Integer luminance weights with their common denominator.
///
/// The weights of each standard sum exactly to the denominator, so white
/// stays 255 and black stays 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LumaWeights {
    /// ITU-R BT.601: `0.299 R + 0.587 G + 0.114 B`.
    #[default]
    Rec601,
    /// ITU-R BT.709: `0.2126 R + 0.7152 G + 0.0722 B`.
    Rec709,
}

impl LumaWeights {
    const fn weights(self) -> ([u32; 3], u32) {
        match self {
            Self::Rec601 => ([299, 587, 114], 1_000),
            Self::Rec709 => ([2_126, 7_152, 722], 10_000),
        }
    }

    /// Truncated luminance of `px`.
    pub fn luma(self, px: Color) -> u8 {
        let ([wr, wg, wb], denom) = self.weights();
        let sum = wr * px.r as u32 + wg * px.g as u32 + wb * px.b as u32;
        // Weights sum to `denom`, so the quotient never exceeds 255.
        (sum / denom) as u8
    }
}

/// One of the three color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// Sepia matrix rows for R', G', B'.
const SEPIA: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Truncate toward zero, then clamp into the channel range.
#[inline]
fn clamp_channel(value: f64) -> u8 {
    // `as i64` truncates toward zero and saturates; NaN becomes 0.
    (value as i64).clamp(0, 255) as u8
}

/// Replace every pixel with its Rec.601 luminance on all three channels.
pub fn grayscale(img: &PixelBuffer) -> PixelBuffer {
    grayscale_with(img, LumaWeights::Rec601)
}

/// Grayscale with an explicit luminance standard.
pub fn grayscale_with(img: &PixelBuffer, weights: LumaWeights) -> PixelBuffer {
    tracing::debug!(?weights, width = img.width(), height = img.height(), "grayscale");
    map_pixels(img, |px| Color::gray(weights.luma(px)))
}

/// Scale every channel by `1 + percent / 100`.
///
/// `percent = 0` is the identity; `-100` or below yields black.
pub fn change_brightness(img: &PixelBuffer, percent: f64) -> PixelBuffer {
    let factor = 1.0 + percent / 100.0;
    tracing::debug!(percent, factor, "change brightness");
    map_pixels(img, |px| {
        Color::new(
            clamp_channel(px.r as f64 * factor),
            clamp_channel(px.g as f64 * factor),
            clamp_channel(px.b as f64 * factor),
        )
    })
}

/// Invert every channel (`255 − v`). Self-inverse.
pub fn negative(img: &PixelBuffer) -> PixelBuffer {
    map_pixels(img, |px| Color::new(255 - px.r, 255 - px.g, 255 - px.b))
}

/// Warm vintage tone via the classic sepia matrix.
///
/// ```text
/// R' = 0.393 R + 0.769 G + 0.189 B
/// G' = 0.349 R + 0.686 G + 0.168 B
/// B' = 0.272 R + 0.534 G + 0.131 B
/// ```
pub fn sepia(img: &PixelBuffer) -> PixelBuffer {
    map_pixels(img, |px| {
        let rgb = [px.r as f64, px.g as f64, px.b as f64];
        let [r, g, b] = SEPIA.map(|w| clamp_channel(rgb[0] * w[0] + rgb[1] * w[1] + rgb[2] * w[2]));
        Color::new(r, g, b)
    })
}

/// Keep only `channel`; the other two become 0.
pub fn channel_filter(img: &PixelBuffer, channel: Channel) -> PixelBuffer {
    map_pixels(img, |px| match channel {
        Channel::Red => Color::new(px.r, 0, 0),
        Channel::Green => Color::new(0, px.g, 0),
        Channel::Blue => Color::new(0, 0, px.b),
    })
}

pub fn red_filter(img: &PixelBuffer) -> PixelBuffer {
    channel_filter(img, Channel::Red)
}

pub fn green_filter(img: &PixelBuffer) -> PixelBuffer {
    channel_filter(img, Channel::Green)
}

pub fn blue_filter(img: &PixelBuffer) -> PixelBuffer {
    channel_filter(img, Channel::Blue)
}
