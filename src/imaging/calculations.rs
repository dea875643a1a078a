//! Pure layout math for the post canvas.
//!
//! All functions here are pure and testable without any I/O or images.

use crate::config::LogoCorner;

/// Canvas size for a width and stretch factor: `width × round(width / stretch)`.
///
/// # Examples
/// ```
/// # use daily_geode::imaging::canvas_dimensions;
/// assert_eq!(canvas_dimensions(2560, 1.5), (2560, 1707));
/// assert_eq!(canvas_dimensions(600, 1.5), (600, 400));
/// ```
pub fn canvas_dimensions(width: u32, stretch: f32) -> (u32, u32) {
    let height = (width as f64 / stretch as f64).round().max(1.0) as u32;
    (width, height)
}

/// Calculate dimensions needed to fill a target area (resize before crop).
///
/// Returns dimensions that completely cover the target area while maintaining
/// the source aspect ratio. One dimension will match exactly, the other may exceed.
pub fn calculate_fill_dimensions(source: (u32, u32), target: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;

    let src_aspect = src_w as f64 / src_h as f64;
    let tgt_aspect = tgt_w as f64 / tgt_h as f64;

    if src_aspect > tgt_aspect {
        // Source is wider: height will match, width will exceed
        let h = tgt_h;
        let w = ((h as f64 * src_aspect).round() as u32).max(tgt_w);
        (w, h)
    } else {
        // Source is taller: width will match, height will exceed
        let w = tgt_w;
        let h = ((w as f64 / src_aspect).round() as u32).max(tgt_h);
        (w, h)
    }
}

/// Top-left offset of a centered `target` window inside `filled`.
pub fn center_crop_offset(filled: (u32, u32), target: (u32, u32)) -> (u32, u32) {
    (
        filled.0.saturating_sub(target.0) / 2,
        filled.1.saturating_sub(target.1) / 2,
    )
}

/// Scale `source` to `height`, keeping the aspect ratio. Width is at least 1.
pub fn scale_to_height(source: (u32, u32), height: u32) -> (u32, u32) {
    let (w, h) = source;
    let width = (w as f64 * height as f64 / h as f64).round().max(1.0) as u32;
    (width, height)
}

/// Position of an item pinned to `corner`, `inset` pixels from both adjacent edges.
///
/// Coordinates may be negative when the item is larger than the canvas.
pub fn corner_position(
    canvas: (u32, u32),
    item: (u32, u32),
    corner: LogoCorner,
    inset: u32,
) -> (i64, i64) {
    let inset = inset as i64;
    let left = inset;
    let top = inset;
    let right = canvas.0 as i64 - item.0 as i64 - inset;
    let bottom = canvas.1 as i64 - item.1 as i64 - inset;
    match corner {
        LogoCorner::TopLeft => (left, top),
        LogoCorner::TopRight => (right, top),
        LogoCorner::BottomLeft => (left, bottom),
        LogoCorner::BottomRight => (right, bottom),
    }
}

/// Where right-aligned header text must end.
///
/// Normally `padding` pixels from the right canvas edge. When a logo shares
/// the header band on the right (`logo_left` is its left edge), the text ends
/// `padding` pixels before the logo instead.
pub fn header_right_edge(canvas_width: u32, padding: u32, logo_left: Option<i64>) -> i64 {
    let edge = canvas_width as i64 - padding as i64;
    match logo_left {
        Some(x) => edge.min(x - padding as i64),
        None => edge,
    }
}

/// X coordinate that makes text of `text_width` end at `right_edge`.
///
/// Saturates at the `i32` range, which is far outside any canvas.
pub fn right_aligned_x(right_edge: i64, text_width: f32) -> i32 {
    (right_edge as f64 - text_width as f64).round() as i32
}

/// Top edge of the separator line under a header band.
pub fn separator_top(padding: u32, header_height: u32, line_padding: u32) -> u32 {
    padding
        .saturating_add(header_height)
        .saturating_add(line_padding)
}

/// Vertical placement of a bottom-anchored caption block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptionBlock {
    /// Top of the first line.
    pub top: i32,
    /// Distance between the tops of consecutive lines.
    pub stride: i32,
}

impl CaptionBlock {
    /// Top of line `index` (0-based).
    pub fn line_top(&self, index: usize) -> i32 {
        let offset = (self.stride as i64).saturating_mul(index as i64);
        clamp_i32(offset.saturating_add(self.top as i64))
    }
}

fn clamp_i32(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Place `line_count` lines of `line_height`, separated by `line_padding`,
/// so the block ends `extra_padding` above the bottom edge.
pub fn caption_block(
    canvas_height: u32,
    extra_padding: u32,
    line_count: usize,
    line_height: u32,
    line_padding: u32,
) -> CaptionBlock {
    let stride = line_height as i64 + line_padding as i64;
    let lines = line_count as i64;
    let block_height = if lines == 0 {
        0
    } else {
        lines.saturating_mul(stride) - line_padding as i64
    };
    CaptionBlock {
        top: clamp_i32(canvas_height as i64 - extra_padding as i64 - block_height),
        stride: clamp_i32(stride),
    }
}
