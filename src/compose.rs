//! Post composition: one background, one logo, text overlays, one PNG.
//!
//! ## Layout (top to bottom)
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │ padding                                 [logo]│  logo: corner inset by
//! │ The Daily Geode                   03/5/2024   │        logo_padding + logo_extra
//! │ line_padding                                  │
//! │███████████████████████████████████████████████│  separator, line_thickness
//! │                                               │
//! │            background (aspect-filled)         │
//! │                                               │
//! │ Caption line one                              │  wrapped to width − 2·padding,
//! │ line_padding                                  │  line_padding between lines
//! │ Caption line two                              │
//! │ extra_padding                                 │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! The canvas is `canvas.width × round(canvas.width / canvas.stretch)`. All
//! layers are flattened to RGB before encoding; alpha never reaches the file.
//!
//! ## Output
//!
//! The PNG is encoded in memory, written to a temporary file inside the
//! output directory, and persisted over `post.png` only once complete. A
//! failed run leaves any previous `post.png` untouched and no partial file
//! behind.

use crate::config::{LogoCorner, PostConfig, SourceConfig, parse_hex_color};
use crate::error::PostError;
use crate::imaging::{
    RasterImage, Typeface, calculate_fill_dimensions, canvas_dimensions, caption_block,
    center_crop_offset, corner_position, header_right_edge, load_raster, right_aligned_x,
    scale_to_height, separator_top, wrap_caption,
};
use image::codecs::png::PngEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ExtendedColorType, ImageEncoder, Rgba, RgbImage, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File name of the composed post inside the output directory.
pub const OUTPUT_FILENAME: &str = "post.png";

/// A post that was composed and written to disk.
#[derive(Debug, Clone)]
pub struct ComposedPost {
    /// Final location, `{output_dir}/post.png`.
    pub path: PathBuf,
    /// The encoded PNG, identical to the file contents.
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Header date as rendered.
    pub date: String,
    /// Caption after wrapping, one entry per drawn line.
    pub caption_lines: Vec<String>,
}

/// Compose the post described by `config` and write it to `{output_dir}/post.png`.
///
/// Inputs are all loaded and validated before the output directory is touched,
/// so a missing image, logo or font never creates the directory or a file.
///
/// The header date must already be set (see [`PostConfig::stamp_today`]);
/// composing never reads the clock, so identical configs give identical bytes.
pub fn compose(config: &PostConfig) -> Result<ComposedPost, PostError> {
    config.validate()?;
    let date = config.require_date()?.formatted();

    let background_path = background_path(&config.source)?;
    let background = to_dynamic(load_raster(background_path)?, background_path)?;
    let logo = to_dynamic(load_raster(&config.logo.path)?, &config.logo.path)?;
    let header_face = Typeface::load(&config.header.font)?;
    let caption_face = Typeface::load(&config.caption.font)?;

    let (canvas, caption_lines) = render(config, background, logo, &header_face, &caption_face, &date);
    let (width, height) = canvas.dimensions();

    let png = encode_png(&canvas)?;
    let path = write_atomically(&config.output_dir, &png)?;
    info!(path = %path.display(), width, height, %date, "Post image saved");

    Ok(ComposedPost {
        path,
        png,
        width,
        height,
        date,
        caption_lines,
    })
}

/// What [`check`] found for a config, without rendering anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCheck {
    pub width: u32,
    pub height: u32,
    pub date: String,
    /// Background size, `None` when no local image is configured.
    pub background: Option<(u32, u32)>,
    pub logo: (u32, u32),
    pub caption_lines: Vec<String>,
}

/// Validate `config` and load every input it names, writing nothing.
///
/// A missing background is not an error here: the image is usually picked
/// at request time.
pub fn check(config: &PostConfig) -> Result<PostCheck, PostError> {
    config.validate()?;
    let date = config.require_date()?.formatted();

    let background = match &config.source.image {
        Some(path) => {
            let bg = load_raster(path)?;
            Some((bg.width, bg.height))
        }
        None => None,
    };
    let logo = load_raster(&config.logo.path)?;
    Typeface::load(&config.header.font)?;
    let caption_face = Typeface::load(&config.caption.font)?;

    let (width, height) = canvas_dimensions(config.canvas.width, config.canvas.stretch);
    let caption_lines = wrap_caption(
        &caption_face,
        &config.caption.text,
        config.caption.font_size,
        caption_width(config, width),
    )
    .collect();

    Ok(PostCheck {
        width,
        height,
        date,
        background,
        logo: (logo.width, logo.height),
        caption_lines,
    })
}

/// The background file named by the config.
///
/// A local file wins over a link. Links are accepted in config but never
/// fetched, so a link-only source is reported as having no image.
fn background_path(source: &SourceConfig) -> Result<&Path, PostError> {
    match (&source.image, &source.link) {
        (Some(path), _) => Ok(path.as_path()),
        (None, Some(link)) => {
            warn!(%link, "Loading images from URLs is not implemented");
            Err(PostError::NoImageSource(format!(
                "remote image {link} cannot be loaded"
            )))
        }
        (None, None) => Err(PostError::NoImageSource(
            "no image file or link was provided".into(),
        )),
    }
}

/// Wrap a decoded buffer for processing, rejecting one whose pixel data does
/// not match its dimensions.
fn to_dynamic(raster: RasterImage, path: &Path) -> Result<DynamicImage, PostError> {
    let (width, height, channels) = (raster.width, raster.height, raster.channels);
    raster
        .into_dynamic()
        .ok_or_else(|| PostError::ImageDecodeFailed {
            path: path.to_path_buf(),
            reason: format!("pixel buffer does not hold {width}x{height}x{channels} samples"),
        })
}

/// Draw every layer onto a fresh canvas and flatten it to RGB.
///
/// Returns the canvas and the caption lines that were drawn.
fn render(
    config: &PostConfig,
    background: DynamicImage,
    logo: DynamicImage,
    header_face: &Typeface,
    caption_face: &Typeface,
    date: &str,
) -> (RgbImage, Vec<String>) {
    let (width, height) = canvas_dimensions(config.canvas.width, config.canvas.stretch);
    let spacing = &config.spacing;
    let header_color = opaque(&config.header.color);
    let caption_color = opaque(&config.caption.color);
    let padding = i32::try_from(spacing.padding).unwrap_or(i32::MAX);

    // 1. Background
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]));
    imageops::overlay(&mut canvas, &aspect_fill(&background, (width, height)), 0, 0);

    // 2. Logo placement, needed before the header so the date can avoid it
    let logo = match config.logo.height {
        Some(h) if h > 0 => {
            let (w, h) = scale_to_height((logo.width(), logo.height()), h);
            logo.resize_exact(w, h, FilterType::Lanczos3)
        }
        _ => logo,
    };
    let (logo_x, logo_y) = corner_position(
        (width, height),
        (logo.width(), logo.height()),
        config.logo.corner,
        spacing.logo_padding.saturating_add(spacing.logo_extra),
    );

    // 3. Header band
    let header_size = config.header.font_size;
    let header_height = header_face.line_height(header_size);
    header_face.draw(&mut canvas, &config.header.brand, header_size, (padding, padding), header_color);
    let band_bottom = spacing.padding as i64 + header_height as i64;
    let logo_in_band = config.logo.corner == LogoCorner::TopRight && logo_y < band_bottom;
    let date_edge = header_right_edge(width, spacing.padding, logo_in_band.then_some(logo_x));
    let date_x = right_aligned_x(date_edge, header_face.line_width(date, header_size));
    header_face.draw(&mut canvas, date, header_size, (date_x, padding), header_color);

    // 4. Logo, over the header band
    debug!(x = logo_x, y = logo_y, w = logo.width(), h = logo.height(), "Placing logo");
    imageops::overlay(&mut canvas, &logo.to_rgba8(), logo_x, logo_y);

    // 5. Separator
    let line_top = separator_top(spacing.padding, header_height, spacing.line_padding);
    if spacing.line_thickness > 0 && line_top < height {
        let thickness = spacing.line_thickness.min(height - line_top);
        let rect = Rect::at(0, line_top as i32).of_size(width, thickness);
        draw_filled_rect_mut(&mut canvas, rect, header_color);
    }

    // 6. Caption
    let caption_size = config.caption.font_size;
    let lines: Vec<String> = wrap_caption(
        caption_face,
        &config.caption.text,
        caption_size,
        caption_width(config, width),
    )
    .collect();
    let block = caption_block(
        height,
        spacing.extra_padding,
        lines.len(),
        caption_face.line_height(caption_size),
        spacing.line_padding,
    );
    debug!(lines = lines.len(), top = block.top, "Laying out caption");
    for (i, line) in lines.iter().enumerate() {
        caption_face.draw(&mut canvas, line, caption_size, (padding, block.line_top(i)), caption_color);
    }

    // 7. Flatten
    (DynamicImage::ImageRgba8(canvas).to_rgb8(), lines)
}

/// Caption lines may span the canvas minus the side padding.
fn caption_width(config: &PostConfig, canvas_width: u32) -> f32 {
    canvas_width.saturating_sub(config.spacing.padding.saturating_mul(2)) as f32
}

/// Resize `img` to cover `target` and center-crop the overflow.
fn aspect_fill(img: &DynamicImage, target: (u32, u32)) -> RgbaImage {
    let filled = calculate_fill_dimensions((img.width(), img.height()), target);
    let (x, y) = center_crop_offset(filled, target);
    img.resize_exact(filled.0, filled.1, FilterType::Lanczos3)
        .crop_imm(x, y, target.0, target.1)
        .to_rgba8()
}

/// Config colors are validated up front; anything unparseable falls back to white.
fn opaque(hex: &str) -> Rgba<u8> {
    let [r, g, b] = parse_hex_color(hex).unwrap_or([255, 255, 255]);
    Rgba([r, g, b, 255])
}

/// PNG-encode an RGB canvas in memory.
pub fn encode_png(canvas: &RgbImage) -> Result<Vec<u8>, PostError> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| PostError::EncodeFailed(e.to_string()))?;
    Ok(png)
}

/// Write `png` to `{dir}/post.png` via a temp file in the same directory.
fn write_atomically(dir: &Path, png: &[u8]) -> Result<PathBuf, PostError> {
    std::fs::create_dir_all(dir).map_err(|source| PostError::DirectoryCreateFailed {
        path: dir.to_path_buf(),
        source,
    })?;
    let target = dir.join(OUTPUT_FILENAME);
    let mut tmp = tempfile::Builder::new()
        .prefix(".post-")
        .suffix(".png.tmp")
        .tempfile_in(dir)?;
    tmp.write_all(png)?;
    tmp.as_file().sync_all()?;
    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::PostDate;
    use crate::test_helpers::{test_config, write_solid_image, write_test_logo};
    use tempfile::TempDir;

    fn decode(png: &[u8]) -> DynamicImage {
        image::load_from_memory(png).unwrap()
    }

    fn close(a: [u8; 3], b: [u8; 3]) -> bool {
        a.iter().zip(b).all(|(x, y)| x.abs_diff(y) <= 2)
    }

    #[test]
    fn composes_configured_dimensions() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());

        let post = compose(&config).unwrap();
        assert_eq!((post.width, post.height), (600, 400));

        let img = decode(&post.png);
        assert_eq!((img.width(), img.height()), (600, 400));
        assert_eq!(img.color(), image::ColorType::Rgb8);
    }

    #[test]
    fn writes_post_png_matching_returned_bytes() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());

        let post = compose(&config).unwrap();
        assert_eq!(post.path, config.output_dir.join("post.png"));
        assert_eq!(std::fs::read(&post.path).unwrap(), post.png);
    }

    #[test]
    fn no_temp_files_left_behind() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());
        compose(&config).unwrap();

        let names: Vec<String> = std::fs::read_dir(&config.output_dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["post.png"]);
    }

    #[test]
    fn compose_is_deterministic() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());

        let first = compose(&config).unwrap();
        let second = compose(&config).unwrap();
        assert_eq!(first.png, second.png);
    }

    #[test]
    fn overwrites_existing_post() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());
        std::fs::create_dir_all(&config.output_dir).unwrap();
        std::fs::write(config.output_dir.join("post.png"), b"stale").unwrap();

        let post = compose(&config).unwrap();
        assert_eq!(std::fs::read(&post.path).unwrap(), post.png);
    }

    #[test]
    fn creates_nested_output_dir() {
        let tmp = TempDir::new().unwrap();
        let mut config = test_config(tmp.path());
        config.output_dir = tmp.path().join("a/b/c");

        let post = compose(&config).unwrap();
        assert!(post.path.exists());
    }

    #[test]
    fn output_dir_blocked_by_file_errors() {
        let tmp = TempDir::new().unwrap();
        let mut config = test_config(tmp.path());
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, b"file").unwrap();
        config.output_dir = blocker.join("out");

        let result = compose(&config);
        assert!(matches!(result, Err(PostError::DirectoryCreateFailed { .. })));
    }

    #[test]
    fn missing_source_fails_without_output() {
        let tmp = TempDir::new().unwrap();
        let mut config = test_config(tmp.path());
        config.source.image = None;
        config.source.link = None;

        let result = compose(&config);
        assert!(matches!(result, Err(PostError::NoImageSource(_))));
        assert!(!config.output_dir.join("post.png").exists());
    }

    #[test]
    fn link_only_source_is_not_loaded() {
        let tmp = TempDir::new().unwrap();
        let mut config = test_config(tmp.path());
        config.source.image = None;
        config.source.link = Some("https://example.com/level.png".into());

        let result = compose(&config);
        assert!(matches!(result, Err(PostError::NoImageSource(_))));
        assert!(!config.output_dir.exists());
    }

    #[test]
    fn missing_logo_is_decode_failure() {
        let tmp = TempDir::new().unwrap();
        let mut config = test_config(tmp.path());
        config.logo.path = tmp.path().join("nope.png");

        let result = compose(&config);
        assert!(matches!(result, Err(PostError::ImageDecodeFailed { .. })));
        assert!(!config.output_dir.exists());
    }

    #[test]
    fn missing_font_is_font_failure() {
        let tmp = TempDir::new().unwrap();
        let mut config = test_config(tmp.path());
        config.caption.font = tmp.path().join("missing.otf");

        let result = compose(&config);
        assert!(matches!(result, Err(PostError::FontLoadFailed { .. })));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let mut config = test_config(tmp.path());
        config.canvas.stretch = 0.0;

        assert!(matches!(compose(&config), Err(PostError::Config(_))));
    }

    #[test]
    fn separator_uses_header_color() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());
        let post = compose(&config).unwrap();
        let img = decode(&post.png).to_rgb8();

        let header = Typeface::load(&config.header.font).unwrap();
        let top = separator_top(
            config.spacing.padding,
            header.line_height(config.header.font_size),
            config.spacing.line_padding,
        );
        let mid = top + config.spacing.line_thickness / 2;
        assert_eq!(img.get_pixel(300, mid).0, [0x07, 0x8c, 0x51]);
        assert_eq!(img.get_pixel(0, mid).0, [0x07, 0x8c, 0x51]);
        assert_eq!(img.get_pixel(599, mid).0, [0x07, 0x8c, 0x51]);
    }

    #[test]
    fn background_fills_whole_canvas() {
        let tmp = TempDir::new().unwrap();
        let mut config = test_config(tmp.path());
        // Tall source into a wide canvas: cropped, never letterboxed.
        let source = tmp.path().join("tall.png");
        write_solid_image(&source, 20, 90, [200, 30, 30]);
        config.source.image = Some(source);
        config.caption.text.clear();

        let post = compose(&config).unwrap();
        let img = decode(&post.png).to_rgb8();
        for (x, y) in [(2, 397), (597, 397), (300, 300), (2, 200)] {
            let px = img.get_pixel(x, y).0;
            assert!(close(px, [200, 30, 30]), "({x},{y}) = {px:?}");
        }
    }

    #[test]
    fn logo_is_composited_in_corner() {
        let tmp = TempDir::new().unwrap();
        let mut config = test_config(tmp.path());
        let source = tmp.path().join("grey.png");
        write_solid_image(&source, 60, 40, [128, 128, 128]);
        config.source.image = Some(source);

        let post = compose(&config).unwrap();
        let img = decode(&post.png).to_rgb8();
        // 32x32 logo, inset 40: spans x 528..560, y 40..72.
        // Opaque blue core, fully transparent 8px border.
        assert_eq!(img.get_pixel(544, 56).0, [0, 0, 255]);
        assert!(close(img.get_pixel(530, 70).0, [128, 128, 128]));
    }

    #[test]
    fn logo_scaled_to_configured_height() {
        let tmp = TempDir::new().unwrap();
        let mut config = test_config(tmp.path());
        let source = tmp.path().join("grey.png");
        write_solid_image(&source, 60, 40, [128, 128, 128]);
        config.source.image = Some(source);
        let logo = tmp.path().join("big-logo.png");
        write_test_logo(&logo, 320, 320);
        config.logo.path = logo;
        config.logo.height = Some(64);
        config.logo.corner = crate::config::LogoCorner::BottomLeft;
        config.caption.text.clear();

        let post = compose(&config).unwrap();
        let img = decode(&post.png).to_rgb8();
        // 64x64 at (40, 400 - 64 - 40): core spans 16..48 inside it.
        assert!(close(img.get_pixel(40 + 32, 296 + 32).0, [0, 0, 255]));
        assert!(close(img.get_pixel(40 + 4, 296 + 4).0, [128, 128, 128]));
    }

    #[test]
    fn caption_lines_reported() {
        let tmp = TempDir::new().unwrap();
        let mut config = test_config(tmp.path());
        config.caption.text = "Weekly demon showcase: twelve levels, one winner".into();

        let post = compose(&config).unwrap();
        assert!(post.caption_lines.len() > 1);
        assert_eq!(
            post.caption_lines.join(" "),
            "Weekly demon showcase: twelve levels, one winner"
        );
    }

    #[test]
    fn date_is_formatted_in_result() {
        let tmp = TempDir::new().unwrap();
        let mut config = test_config(tmp.path());
        config.date = Some(PostDate::new(5, 3, 2024));

        let post = compose(&config).unwrap();
        assert_eq!(post.date, "03/5/2024");
    }

    #[test]
    fn compose_without_date_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let mut config = test_config(tmp.path());
        config.date = None;

        let result = compose(&config);
        assert!(matches!(result, Err(PostError::Config(_))));
        assert!(!config.output_dir.exists());
    }

    #[test]
    fn malformed_buffer_is_decode_failure() {
        let raster = RasterImage {
            width: 4,
            height: 4,
            channels: 3,
            pixels: vec![0; 5],
        };
        let result = to_dynamic(raster, Path::new("/photos/level.png"));
        assert!(matches!(result, Err(PostError::ImageDecodeFailed { .. })));
    }

    /// Render with a solid grey background and no caption, logo from `logo`.
    fn render_header(tmp: &TempDir, logo: &Path) -> RgbImage {
        let mut config = test_config(tmp.path());
        let source = tmp.path().join("grey.png");
        write_solid_image(&source, 60, 40, [128, 128, 128]);
        config.source.image = Some(source);
        config.caption.text.clear();
        config.logo.path = logo.to_path_buf();
        decode(&compose(&config).unwrap().png).to_rgb8()
    }

    #[test]
    fn date_is_not_covered_by_top_right_logo() {
        let tmp = TempDir::new().unwrap();
        // 64x64 logo, inset 40: spans x 496..560, y 40..104, over the header band.
        let hidden = tmp.path().join("hidden-logo.png");
        RgbaImage::new(64, 64).save(&hidden).unwrap();
        let img = render_header(&tmp, &hidden);

        // Header text sits in y 20..48; the separator starts at 58.
        let text_in = |xs: std::ops::Range<u32>| {
            xs.flat_map(|x| (20..58).map(move |y| (x, y)))
                .filter(|&(x, y)| !close(img.get_pixel(x, y).0, [128, 128, 128]))
                .count()
        };
        assert_eq!(text_in(496..560), 0, "date drawn under the logo");
        assert!(text_in(300..496) > 0, "date not drawn");

        // With a visible logo the date pixels are left untouched.
        let opaque = tmp.path().join("opaque-logo.png");
        write_solid_image(&opaque, 64, 64, [200, 0, 0]);
        let covered = render_header(&tmp, &opaque);
        for x in 300..496 {
            for y in 20..58 {
                assert_eq!(covered.get_pixel(x, y), img.get_pixel(x, y), "({x},{y})");
            }
        }
    }

    #[test]
    fn bottom_logo_leaves_date_at_padding() {
        let tmp = TempDir::new().unwrap();
        let mut config = test_config(tmp.path());
        let source = tmp.path().join("grey.png");
        write_solid_image(&source, 60, 40, [128, 128, 128]);
        config.source.image = Some(source);
        config.caption.text.clear();
        config.logo.corner = crate::config::LogoCorner::BottomRight;

        let img = decode(&compose(&config).unwrap().png).to_rgb8();
        // Date ends 20px from the right edge, well past where a top logo would sit.
        let ink = (540..580)
            .flat_map(|x| (20..48).map(move |y| (x, y)))
            .filter(|&(x, y)| !close(img.get_pixel(x, y).0, [128, 128, 128]))
            .count();
        assert!(ink > 0);
    }

    #[test]
    fn huge_spacing_does_not_panic() {
        let tmp = TempDir::new().unwrap();
        let mut config = test_config(tmp.path());
        config.spacing.padding = 3_000_000_000;
        config.spacing.extra_padding = u32::MAX;
        config.spacing.logo_padding = u32::MAX;
        config.spacing.logo_extra = u32::MAX;
        config.spacing.line_padding = u32::MAX;
        config.spacing.line_thickness = u32::MAX;

        let post = compose(&config).unwrap();
        assert_eq!((post.width, post.height), (600, 400));
        assert!(post.path.exists());
    }

    #[test]
    fn thick_separator_is_clipped_to_canvas() {
        let tmp = TempDir::new().unwrap();
        let mut config = test_config(tmp.path());
        config.spacing.line_thickness = 10_000;
        config.caption.text.clear();

        let img = decode(&compose(&config).unwrap().png).to_rgb8();
        assert_eq!(img.get_pixel(300, 399).0, [0x07, 0x8c, 0x51]);
    }

    #[test]
    fn check_reports_inputs_without_writing() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());

        let report = check(&config).unwrap();
        assert_eq!((report.width, report.height), (600, 400));
        assert_eq!(report.background, Some((300, 200)));
        assert_eq!(report.logo, (32, 32));
        assert_eq!(report.date, "03/5/2024");
        assert!(!report.caption_lines.is_empty());
        assert!(!config.output_dir.exists());
    }

    #[test]
    fn check_matches_compose_wrapping() {
        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());

        let report = check(&config).unwrap();
        let post = compose(&config).unwrap();
        assert_eq!(report.caption_lines, post.caption_lines);
    }

    #[test]
    fn check_requires_date() {
        let tmp = TempDir::new().unwrap();
        let mut config = test_config(tmp.path());
        config.date = None;

        assert!(matches!(check(&config), Err(PostError::Config(_))));
    }

    #[test]
    fn check_allows_missing_background() {
        let tmp = TempDir::new().unwrap();
        let mut config = test_config(tmp.path());
        config.source.image = None;

        assert_eq!(check(&config).unwrap().background, None);
    }

    #[test]
    fn check_rejects_missing_font() {
        let tmp = TempDir::new().unwrap();
        let mut config = test_config(tmp.path());
        config.header.font = tmp.path().join("nope.ttf");

        assert!(matches!(check(&config), Err(PostError::FontLoadFailed { .. })));
    }

    #[test]
    fn encode_png_roundtrips_dimensions() {
        let canvas = RgbImage::from_pixel(7, 3, image::Rgb([1, 2, 3]));
        let png = encode_png(&canvas).unwrap();
        let img = decode(&png);
        assert_eq!((img.width(), img.height()), (7, 3));
        assert_eq!(img.to_rgb8().get_pixel(6, 2).0, [1, 2, 3]);
    }
}
