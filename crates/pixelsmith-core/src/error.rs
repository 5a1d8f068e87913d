//! Error type shared by every transform and the operation dispatcher.

/// Failure raised by buffer construction, transforms, and dispatch.
///
/// Channel arithmetic is clamped internally, so there is no out-of-range
/// variant: a transform either returns a complete, valid buffer or fails
/// with [`TransformError::InvalidInput`] before allocating its output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl TransformError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
