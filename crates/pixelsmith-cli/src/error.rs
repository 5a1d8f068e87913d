use pixelsmith_core::TransformError;

use crate::config::ConfigError;
use crate::image_io::ImageIoError;
use crate::logging::InitError;

/// Top-level failure of a `pixelsmith` invocation.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Image(#[from] ImageIoError),
    #[error(transparent)]
    Transform(#[from] TransformError),
    #[error("failed to initialise logging: {0}")]
    Logging(#[from] InitError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}
