//! Operation catalog and dispatch.
//!
//! [`Operation`] names each effect in menu order; [`OperationRequest`] pairs
//! an operation with its already-collected parameters; [`apply`] maps a
//! request onto the matching transform function.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::error::TransformError;
use crate::transform::{self, Channel, PixelDump};

/// Every effect the editor can run, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Grayscale,
    Brightness,
    Negative,
    Sepia,
    RotateClockwise,
    RotateCounterclockwise,
    MirrorHorizontal,
    MirrorVertical,
    RedFilter,
    GreenFilter,
    BlueFilter,
    Pixelate,
    DumpPixels,
    Blur,
}

impl Operation {
    /// Human-readable label for menus and status text.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Grayscale => "Convert to grayscale",
            Self::Brightness => "Change brightness",
            Self::Negative => "Convert to negative",
            Self::Sepia => "Convert to sepia",
            Self::RotateClockwise => "Rotate clockwise at an angle",
            Self::RotateCounterclockwise => "Rotate anti-clockwise at an angle",
            Self::MirrorHorizontal => "Mirror horizontally",
            Self::MirrorVertical => "Mirror vertically",
            Self::RedFilter => "Red filter",
            Self::GreenFilter => "Green filter",
            Self::BlueFilter => "Blue filter",
            Self::Pixelate => "Pixelate",
            Self::DumpPixels => "Print pixel values",
            Self::Blur => "Blur the image",
        }
    }

    /// Kebab-case name used on the command line and in serialized requests.
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Grayscale => "grayscale",
            Self::Brightness => "brightness",
            Self::Negative => "negative",
            Self::Sepia => "sepia",
            Self::RotateClockwise => "rotate-clockwise",
            Self::RotateCounterclockwise => "rotate-counterclockwise",
            Self::MirrorHorizontal => "mirror-horizontal",
            Self::MirrorVertical => "mirror-vertical",
            Self::RedFilter => "red-filter",
            Self::GreenFilter => "green-filter",
            Self::BlueFilter => "blue-filter",
            Self::Pixelate => "pixelate",
            Self::DumpPixels => "dump-pixels",
            Self::Blur => "blur",
        }
    }

    /// All operations in menu order.
    pub fn all() -> &'static [Self] {
        const ALL: [Operation; 14] = [
            Operation::Grayscale,
            Operation::Brightness,
            Operation::Negative,
            Operation::Sepia,
            Operation::RotateClockwise,
            Operation::RotateCounterclockwise,
            Operation::MirrorHorizontal,
            Operation::MirrorVertical,
            Operation::RedFilter,
            Operation::GreenFilter,
            Operation::BlueFilter,
            Operation::Pixelate,
            Operation::DumpPixels,
            Operation::Blur,
        ];
        &ALL
    }

    /// 1-based position in the menu.
    pub fn menu_number(self) -> u32 {
        Self::all()
            .iter()
            .position(|&op| op == self)
            .map_or(0, |i| i as u32 + 1)
    }

    pub fn from_menu_number(number: u32) -> Option<Self> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::all().get(index).copied()
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::all().iter().copied().find(|op| op.slug() == slug)
    }

    /// The scalar parameter this operation needs, if any.
    pub const fn parameter(&self) -> Option<ParameterKind> {
        match self {
            Self::Brightness => Some(ParameterKind::Percent),
            Self::RotateClockwise | Self::RotateCounterclockwise => Some(ParameterKind::Degrees),
            Self::Pixelate => Some(ParameterKind::BlockSize),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Operation {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(s.trim())
            .ok_or_else(|| TransformError::invalid(format!("unknown operation `{s}`")))
    }
}

/// Kind of scalar an operation takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// Brightness change in percent. Any finite value; `-100` is black.
    Percent,
    /// Rotation angle in degrees. Any finite value.
    Degrees,
    /// Pixelation tile edge in pixels. Must be a positive integer.
    BlockSize,
}

impl ParameterKind {
    /// Prompt text shown when asking for the value interactively.
    pub const fn prompt(&self) -> &'static str {
        match self {
            Self::Percent => "Enter brightness change in percent (e.g. 25 or -40):",
            Self::Degrees => "Enter rotation angle in degrees:",
            Self::BlockSize => "Enter pixel block size:",
        }
    }
}

/// An operation with its parameters, ready to dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "params", rename_all = "kebab-case")]
pub enum OperationRequest {
    Grayscale,
    Brightness { percent: f64 },
    Negative,
    Sepia,
    RotateClockwise { degrees: f64 },
    RotateCounterclockwise { degrees: f64 },
    MirrorHorizontal,
    MirrorVertical,
    RedFilter,
    GreenFilter,
    BlueFilter,
    Pixelate { block_size: i64 },
    DumpPixels,
    Blur,
}

impl OperationRequest {
    /// Pair `op` with its scalar parameter.
    ///
    /// Fails with [`TransformError::InvalidInput`] when a required value is
    /// missing, not finite, or (for a block size) not a whole number. A value
    /// supplied to an operation without parameters is ignored.
    pub fn new(op: Operation, value: Option<f64>) -> Result<Self, TransformError> {
        let value = match op.parameter() {
            Some(kind) => {
                let value = value.ok_or_else(|| {
                    TransformError::invalid(format!("{} requires a {kind:?} value", op.slug()))
                })?;
                check_finite(op, value)?;
                value
            }
            None => 0.0,
        };

        Ok(match op {
            Operation::Grayscale => Self::Grayscale,
            Operation::Brightness => Self::Brightness { percent: value },
            Operation::Negative => Self::Negative,
            Operation::Sepia => Self::Sepia,
            Operation::RotateClockwise => Self::RotateClockwise { degrees: value },
            Operation::RotateCounterclockwise => Self::RotateCounterclockwise { degrees: value },
            Operation::MirrorHorizontal => Self::MirrorHorizontal,
            Operation::MirrorVertical => Self::MirrorVertical,
            Operation::RedFilter => Self::RedFilter,
            Operation::GreenFilter => Self::GreenFilter,
            Operation::BlueFilter => Self::BlueFilter,
            Operation::Pixelate => {
                if value.fract() != 0.0 {
                    return Err(TransformError::invalid(format!(
                        "pixelate block size must be a whole number, got {value}"
                    )));
                }
                Self::Pixelate {
                    block_size: value as i64,
                }
            }
            Operation::DumpPixels => Self::DumpPixels,
            Operation::Blur => Self::Blur,
        })
    }

    pub fn operation(&self) -> Operation {
        match self {
            Self::Grayscale => Operation::Grayscale,
            Self::Brightness { .. } => Operation::Brightness,
            Self::Negative => Operation::Negative,
            Self::Sepia => Operation::Sepia,
            Self::RotateClockwise { .. } => Operation::RotateClockwise,
            Self::RotateCounterclockwise { .. } => Operation::RotateCounterclockwise,
            Self::MirrorHorizontal => Operation::MirrorHorizontal,
            Self::MirrorVertical => Operation::MirrorVertical,
            Self::RedFilter => Operation::RedFilter,
            Self::GreenFilter => Operation::GreenFilter,
            Self::BlueFilter => Operation::BlueFilter,
            Self::Pixelate { .. } => Operation::Pixelate,
            Self::DumpPixels => Operation::DumpPixels,
            Self::Blur => Operation::Blur,
        }
    }

    /// Reject non-finite scalars, e.g. from a deserialized request.
    pub fn validate(&self) -> Result<(), TransformError> {
        match *self {
            Self::Brightness { percent: value }
            | Self::RotateClockwise { degrees: value }
            | Self::RotateCounterclockwise { degrees: value } => {
                check_finite(self.operation(), value)
            }
            _ => Ok(()),
        }
    }
}

fn check_finite(op: Operation, value: f64) -> Result<(), TransformError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TransformError::invalid(format!(
            "{} parameter must be a finite number, got {value}",
            op.slug()
        )))
    }
}

/// Result of a dispatched request.
#[derive(Debug)]
pub enum Outcome<'a> {
    /// A transform produced a new buffer.
    Image(PixelBuffer),
    /// The diagnostic dump; no buffer is produced.
    Dump(PixelDump<'a>),
}

impl Outcome<'_> {
    pub fn into_image(self) -> Option<PixelBuffer> {
        match self {
            Self::Image(image) => Some(image),
            Self::Dump(_) => None,
        }
    }
}

/// Run `request` against `source`.
///
/// A missing source (`None`) fails with [`TransformError::InvalidInput`], as
/// does any request [`OperationRequest::validate`] rejects. The source is
/// never modified.
pub fn apply<'a>(
    request: &OperationRequest,
    source: Option<&'a PixelBuffer>,
) -> Result<Outcome<'a>, TransformError> {
    let source = source.ok_or_else(|| TransformError::invalid("no image loaded"))?;
    request.validate()?;

    let _span = tracing::debug_span!(
        "apply",
        op = request.operation().slug(),
        width = source.width(),
        height = source.height()
    )
    .entered();

    let image = match *request {
        OperationRequest::Grayscale => transform::grayscale(source),
        OperationRequest::Brightness { percent } => transform::change_brightness(source, percent),
        OperationRequest::Negative => transform::negative(source),
        OperationRequest::Sepia => transform::sepia(source),
        OperationRequest::RotateClockwise { degrees } => transform::rotate(source, degrees),
        OperationRequest::RotateCounterclockwise { degrees } => {
            transform::rotate_counterclockwise(source, degrees)
        }
        OperationRequest::MirrorHorizontal => transform::mirror_horizontal(source),
        OperationRequest::MirrorVertical => transform::mirror_vertical(source),
        OperationRequest::RedFilter => transform::channel_filter(source, Channel::Red),
        OperationRequest::GreenFilter => transform::channel_filter(source, Channel::Green),
        OperationRequest::BlueFilter => transform::channel_filter(source, Channel::Blue),
        OperationRequest::Pixelate { block_size } => transform::pixelate(source, block_size)?,
        OperationRequest::DumpPixels => {
            return Ok(Outcome::Dump(transform::dump_pixel_values(source)));
        }
        OperationRequest::Blur => transform::blur(source),
    };

    tracing::debug!("transform complete");
    Ok(Outcome::Image(image))
}
