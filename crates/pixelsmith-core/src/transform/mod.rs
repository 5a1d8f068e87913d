//! Pixel transforms, one pure function per effect.
//!
//! Every transform borrows its source, never mutates it, and returns a freshly
//! allocated buffer with the same dimensions. Only [`pixelate`] can fail.

pub mod color;
pub mod geometry;
pub mod inspect;
pub mod neighborhood;
pub mod rows;

pub use color::{
    Channel, LumaWeights, blue_filter, change_brightness, channel_filter, grayscale,
    grayscale_with, green_filter, negative, red_filter, sepia,
};
pub use geometry::{mirror_horizontal, mirror_vertical, rotate, rotate_counterclockwise};
pub use inspect::{PixelDump, dump_pixel_values};
pub use neighborhood::{blur, pixelate};
pub use rows::PARALLEL_PIXEL_THRESHOLD;
