//! Converter capability: turn the image at one path into the format implied by another path.

use image::{DynamicImage, ImageFormat};
use std::path::Path;

use crate::error::ConvertError;

/// Converts one file. Implementations are shared across worker threads.
pub trait Converter: Send + Sync {
    /// Returns the name of this converter implementation.
    fn name(&self) -> &str;

    /// Read `source` and write it to `target`. The target format is chosen by the implementation,
    /// usually from the target extension.
    fn convert(&self, source: &Path, target: &Path) -> Result<(), ConvertError>;
}

/// Converter backed by the `image` crate. Formats are picked from file extensions.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageConverter;

impl ImageConverter {
    pub fn new() -> Self {
        Self
    }
}

impl Converter for ImageConverter {
    fn name(&self) -> &str {
        "image"
    }

    fn convert(&self, source: &Path, target: &Path) -> Result<(), ConvertError> {
        let format =
            ImageFormat::from_path(target).map_err(|_| ConvertError::UnsupportedFormat {
                path: target.to_path_buf(),
            })?;
        let img = image::open(source).map_err(|source_err| ConvertError::Image {
            path: source.to_path_buf(),
            source: source_err,
        })?;
        // JPEG and BMP encoders in `image` reject some color types (alpha, 16-bit).
        let img = match format {
            ImageFormat::Jpeg => DynamicImage::ImageRgb8(img.to_rgb8()),
            ImageFormat::Bmp => DynamicImage::ImageRgba8(img.to_rgba8()),
            _ => img,
        };
        img.save_with_format(target, format)
            .map_err(|e| ConvertError::Image {
                path: target.to_path_buf(),
                source: e,
            })
    }
}
