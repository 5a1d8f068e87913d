//! Decoding files into [`PixelBuffer`]s and encoding them back.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GrayImage, ImageFormat, RgbImage};
use pixelsmith_core::{PixelBuffer, TransformError};

/// Load an image from disk as 8-bit RGB.
///
/// Any format the `image` crate can decode is accepted (JPEG, PNG, BMP, ...).
/// Alpha is discarded.
pub fn load_image(path: &Path) -> Result<PixelBuffer, ImageIoError> {
    let img = image::open(path).map_err(|source| ImageIoError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgb = img.into_rgb8();
    let (width, height) = rgb.dimensions();
    tracing::info!("loaded {} ({width}x{height})", path.display());
    Ok(PixelBuffer::new(width, height, rgb.into_raw())?)
}

/// Encode `buffer` to `path`, picking the format from the extension.
///
/// JPEG output uses `jpeg_quality`. A buffer whose pixels are all neutral is
/// written single-channel when the format supports it.
pub fn save_image(buffer: &PixelBuffer, path: &Path, jpeg_quality: u8) -> Result<(), ImageIoError> {
    let encode_err = |source| ImageIoError::Encode {
        path: path.to_path_buf(),
        source,
    };
    let format = ImageFormat::from_path(path).map_err(encode_err)?;
    ensure_parent_dir(path)?;

    let image = to_dynamic(buffer, supports_luma(format))?;
    match format {
        ImageFormat::Jpeg => {
            let mut writer = BufWriter::new(File::create(path)?);
            let encoder = JpegEncoder::new_with_quality(&mut writer, jpeg_quality);
            image.write_with_encoder(encoder).map_err(encode_err)?;
            writer.flush()?;
        }
        _ => image.save_with_format(path, format).map_err(encode_err)?,
    }

    tracing::info!(
        "wrote {} ({}x{}, {:?})",
        path.display(),
        buffer.width(),
        buffer.height(),
        image.color()
    );
    Ok(())
}

fn to_dynamic(buffer: &PixelBuffer, allow_luma: bool) -> Result<DynamicImage, ImageIoError> {
    let (width, height) = buffer.dimensions();
    if allow_luma && buffer.is_grayscale() {
        let luma: Vec<u8> = buffer.pixels().iter().map(|px| px.r).collect();
        GrayImage::from_raw(width, height, luma)
            .map(DynamicImage::ImageLuma8)
            .ok_or(ImageIoError::Layout { width, height })
    } else {
        RgbImage::from_raw(width, height, buffer.as_bytes().to_vec())
            .map(DynamicImage::ImageRgb8)
            .ok_or(ImageIoError::Layout { width, height })
    }
}

fn supports_luma(format: ImageFormat) -> bool {
    matches!(
        format,
        ImageFormat::Jpeg | ImageFormat::Png | ImageFormat::Tiff | ImageFormat::Pnm
    )
}

fn ensure_parent_dir(path: &Path) -> Result<(), ImageIoError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Destination for transformed images.
pub trait ImageSink {
    /// Persist `image` and describe where it went.
    fn store(&mut self, image: &PixelBuffer) -> Result<String, ImageIoError>;
}

/// Writes every image to one file path, overwriting earlier results.
#[derive(Debug, Clone)]
pub struct FileSink {
    pub path: PathBuf,
    pub jpeg_quality: u8,
}

impl ImageSink for FileSink {
    fn store(&mut self, image: &PixelBuffer) -> Result<String, ImageIoError> {
        save_image(image, &self.path, self.jpeg_quality)?;
        Ok(self.path.display().to_string())
    }
}

/// Errors that can occur while decoding or encoding images.
#[derive(Debug, thiserror::Error)]
pub enum ImageIoError {
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{width}x{height} buffer does not match the encoder layout")]
    Layout { width: u32, height: u32 },
    #[error(transparent)]
    Buffer(#[from] TransformError),
}
