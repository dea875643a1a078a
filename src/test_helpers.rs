//! Shared test utilities for the daily-geode test suite.
//!
//! Synthetic images are generated on the fly with the `image` crate; fonts
//! are the DejaVu faces bundled under `resources/`.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = tempfile::TempDir::new().unwrap();
//! let config = test_config(tmp.path());
//! let post = compose(&config).unwrap();
//! assert_eq!((post.width, post.height), (600, 400));
//! ```

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage, Rgba, RgbaImage};

use crate::config::{PostConfig, SpacingConfig};
use crate::date::PostDate;
use crate::imaging::Typeface;

// =========================================================================
// Fixtures
// =========================================================================

/// Path of a file bundled under `resources/`.
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("resources")
        .join(name)
}

/// The bundled caption face (DejaVu Serif Bold).
pub fn caption_face() -> Typeface {
    Typeface::load(&fixture_path("DejaVuSerif-Bold.ttf")).unwrap()
}

// =========================================================================
// Synthetic images
// =========================================================================

/// Write an RGB gradient; the format follows the file extension.
pub fn write_test_image(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    img.save(path).unwrap();
}

/// Write a single-color RGB image; the format follows the file extension.
pub fn write_solid_image(path: &Path, width: u32, height: u32, color: [u8; 3]) {
    RgbImage::from_pixel(width, height, Rgb(color))
        .save(path)
        .unwrap();
}

/// Write an RGBA PNG logo: opaque blue core, fully transparent border a
/// quarter of each dimension wide.
pub fn write_test_logo(path: &Path, width: u32, height: u32) {
    let (bx, by) = (width / 4, height / 4);
    let img = RgbaImage::from_fn(width, height, |x, y| {
        let inside = x >= bx && x < width - bx && y >= by && y < height - by;
        if inside {
            Rgba([0, 0, 255, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    });
    img.save(path).unwrap();
}

// =========================================================================
// Config
// =========================================================================

/// A small, fully resolvable post config rooted in `dir`.
///
/// Writes a 300x200 JPEG background and a 32x32 logo into `dir`. The canvas
/// is 600x400, the logo sits top-right at inset 40, output goes to `dir/out`.
pub fn test_config(dir: &Path) -> PostConfig {
    let image = dir.join("background.jpg");
    write_test_image(&image, 300, 200);
    let logo = dir.join("logo.png");
    write_test_logo(&logo, 32, 32);

    let mut config = PostConfig::default();
    config.output_dir = dir.join("out");
    config.canvas.width = 600;
    config.canvas.stretch = 1.5;
    config.spacing = SpacingConfig {
        padding: 20,
        extra_padding: 20,
        logo_padding: 30,
        logo_extra: 10,
        line_padding: 10,
        line_thickness: 6,
    };
    config.header.font = fixture_path("DejaVuSans-Bold.ttf");
    config.header.font_size = 24.0;
    config.caption.font = fixture_path("DejaVuSerif-Bold.ttf");
    config.caption.font_size = 32.0;
    config.caption.text = "Twelve new levels were rated this week".to_string();
    config.logo.path = logo;
    config.source.image = Some(image);
    config.date = Some(PostDate::new(5, 3, 2024));
    config
}
