//! In-memory raster representation shared by every transform.

use std::fmt;

use bytemuck::{Pod, Zeroable};

use crate::error::TransformError;

/// Number of channels stored per pixel (red, green, blue).
pub const CHANNELS: usize = 3;

/// A single 8-bit RGB color. No alpha.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Neutral color with the same intensity on every channel.
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub const fn is_gray(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.r, self.g, self.b)
    }
}

/// Immutable W×H grid of [`Color`] values.
///
/// Pixels are stored row-major as a flat `Vec<u8>` of `r, g, b` triplets,
/// so row `y` occupies bytes `[y·3W, (y+1)·3W)`. The length is validated at
/// construction and there are no public mutators; transforms always build a
/// fresh buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw row-major RGB bytes.
    ///
    /// Fails with [`TransformError::InvalidInput`] when `data` does not hold
    /// exactly `3 × width × height` bytes.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, TransformError> {
        let expected = byte_len(width, height)?;
        if data.len() != expected {
            return Err(TransformError::invalid(format!(
                "{width}x{height} buffer needs {expected} channel bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a buffer from one [`Color`] per pixel in row-major order.
    pub fn from_pixels(width: u32, height: u32, pixels: &[Color]) -> Result<Self, TransformError> {
        let expected = byte_len(width, height)? / CHANNELS;
        if pixels.len() != expected {
            return Err(TransformError::invalid(format!(
                "{width}x{height} buffer needs {expected} pixels, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data: bytemuck::cast_slice(pixels).to_vec(),
        })
    }

    /// All-black buffer.
    pub fn blank(width: u32, height: u32) -> Result<Self, TransformError> {
        let len = byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Build a buffer by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self, TransformError>
    where
        F: FnMut(u32, u32) -> Color,
    {
        let len = byte_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y).channels());
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Assemble an output buffer whose dimensions were already validated.
    pub(crate) fn from_validated(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * CHANNELS);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.data.len() / CHANNELS
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Color at `(x, y)`, or `None` outside the image.
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        (x < self.width && y < self.height).then(|| self.pixels()[self.index(x, y)])
    }

    /// Color at `(x, y)`.
    ///
    /// # Panics
    /// Panics if the coordinate is outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} buffer",
            self.width,
            self.height
        );
        self.pixels()[self.index(x, y)]
    }

    /// Every pixel in row-major order.
    pub fn pixels(&self) -> &[Color] {
        bytemuck::cast_slice(self.data.as_slice())
    }

    /// Pixels of row `y`.
    ///
    /// # Panics
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[Color] {
        let width = self.width as usize;
        let start = y as usize * width;
        &self.pixels()[start..start + width]
    }

    /// Raw row-major `r, g, b` bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// True when every pixel carries equal red, green and blue values.
    pub fn is_grayscale(&self) -> bool {
        self.pixels().iter().all(|px| px.is_gray())
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

fn byte_len(width: u32, height: u32) -> Result<usize, TransformError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or_else(|| TransformError::invalid(format!("{width}x{height} buffer is too large")))
}
