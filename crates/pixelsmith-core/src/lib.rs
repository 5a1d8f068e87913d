//! Pixelsmith core: pixel-level raster transforms.
//!
//! This crate contains the pixel buffer, every transform, and the operation
//! dispatcher. It does no I/O; decoding and encoding live in `pixelsmith-cli`.

pub mod buffer;
pub mod error;
pub mod operation;
pub mod transform;

// Re-exports for convenience.
pub use buffer::{CHANNELS, Color, PixelBuffer};
pub use error::TransformError;
pub use operation::{Operation, OperationRequest, Outcome, ParameterKind, apply};
pub use transform::{LumaWeights, PixelDump};
