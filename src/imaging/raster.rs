//! Decoding source images into pixel buffers.
//!
//! | Format | Decoder |
//! |---|---|
//! | PNG | `image` crate, `png` feature |
//! | JPEG | `image` crate, `jpeg` feature |
//! | BMP | `image` crate, `bmp` feature |
//!
//! The channel count of the source is preserved: images with an alpha channel
//! decode to RGBA, everything else to RGB.

use crate::error::PostError;
use image::{DynamicImage, ImageFormat, ImageReader, RgbImage, RgbaImage};
use std::path::Path;
use std::sync::LazyLock;

/// Extensions offered by the image pick dialog, with the decoder each maps to.
const IMAGE_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("png", ImageFormat::Png),
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("bmp", ImageFormat::Bmp),
];

static SUPPORTED_EXTENSIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    IMAGE_CANDIDATES
        .iter()
        .filter(|(_, fmt)| fmt.reading_enabled())
        .map(|(ext, _)| *ext)
        .collect()
});

/// Returns the image file extensions that have working decoders compiled in.
pub fn supported_input_extensions() -> &'static [&'static str] {
    &SUPPORTED_EXTENSIONS
}

/// True when `path` has one of the [`supported_input_extensions`].
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| {
            supported_input_extensions()
                .iter()
                .any(|s| s.eq_ignore_ascii_case(e))
        })
}

/// A decoded image: row-major, tightly packed 8-bit samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    /// 3 (RGB) or 4 (RGBA).
    pub channels: u8,
    pub pixels: Vec<u8>,
}

impl RasterImage {
    /// Convert a decoded image, keeping alpha only if the source had it.
    pub fn from_dynamic(img: DynamicImage) -> Self {
        let (width, height) = (img.width(), img.height());
        if img.color().has_alpha() {
            Self {
                width,
                height,
                channels: 4,
                pixels: img.into_rgba8().into_raw(),
            }
        } else {
            Self {
                width,
                height,
                channels: 3,
                pixels: img.into_rgb8().into_raw(),
            }
        }
    }

    pub fn has_alpha(&self) -> bool {
        self.channels == 4
    }

    /// Wrap the buffer back into an `image` type for processing.
    pub fn into_dynamic(self) -> Option<DynamicImage> {
        match self.channels {
            4 => RgbaImage::from_raw(self.width, self.height, self.pixels)
                .map(DynamicImage::ImageRgba8),
            3 => RgbImage::from_raw(self.width, self.height, self.pixels)
                .map(DynamicImage::ImageRgb8),
            _ => None,
        }
    }
}

/// Load and decode an image from disk.
///
/// The format is sniffed from the file contents, so a mislabeled extension
/// still decodes. Missing files and unsupported bytes both report
/// [`PostError::ImageDecodeFailed`].
pub fn load_raster(path: &Path) -> Result<RasterImage, PostError> {
    let decode_failed = |reason: String| PostError::ImageDecodeFailed {
        path: path.to_path_buf(),
        reason,
    };
    let img = ImageReader::open(path)
        .map_err(|e| decode_failed(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| decode_failed(e.to_string()))?
        .decode()
        .map_err(|e| decode_failed(e.to_string()))?;
    Ok(RasterImage::from_dynamic(img))
}
