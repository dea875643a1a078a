//! Image processing in pure Rust, no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** (PNG, JPEG, BMP) | `image::ImageReader` |
//! | **Aspect fill** | Lanczos3 `resize_exact` + centered `crop_imm` |
//! | **Logo compositing** | `image::imageops::overlay` (alpha blend) |
//! | **Text measurement** | `ab_glyph` advances + kerning |
//! | **Text / rectangle drawing** | `imageproc::drawing` |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for layout math (unit testable)
//! - **Raster**: [`RasterImage`] and [`load_raster`]
//! - **Text**: [`Typeface`] and [`wrap_caption`]

mod calculations;
pub mod raster;
pub mod text;

pub use calculations::{
    CaptionBlock, calculate_fill_dimensions, canvas_dimensions, caption_block,
    center_crop_offset, corner_position, header_right_edge, right_aligned_x, scale_to_height, separator_top,
};
pub use raster::{RasterImage, is_supported_image, load_raster, supported_input_extensions};
pub use text::{CaptionLines, Typeface, wrap_caption};
