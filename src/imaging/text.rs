//! Font loading, text measurement and caption wrapping.
//!
//! Widths come from the font's own glyph advances and kerning pairs, so wrap
//! points are correct for proportional faces. Measurement and rasterization
//! share `imageproc`'s glyph layout (`text_size` / `draw_text_mut`), and line
//! metrics come from `ab_glyph`.

use crate::error::PostError;
use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use std::iter::Peekable;
use std::path::Path;
use std::str::SplitWhitespace;

/// A loaded font face.
#[derive(Clone)]
pub struct Typeface {
    font: FontArc,
}

impl std::fmt::Debug for Typeface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Typeface")
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl Typeface {
    /// Read and parse a TrueType/OpenType font file.
    pub fn load(path: &Path) -> Result<Self, PostError> {
        let font_failed = |reason: String| PostError::FontLoadFailed {
            path: path.to_path_buf(),
            reason,
        };
        let bytes = std::fs::read(path).map_err(|e| font_failed(e.to_string()))?;
        let font = FontArc::try_from_vec(bytes).map_err(|e| font_failed(e.to_string()))?;
        Ok(Self { font })
    }

    /// Width of `text` on a single line at `size` pixels, as [`draw`](Self::draw) lays it out.
    ///
    /// Measured with the same glyph layout `imageproc` renders with (advances
    /// plus kerning between outlined glyphs), so right-aligned text lands where
    /// it was measured to.
    pub fn line_width(&self, text: &str, size: f32) -> f32 {
        imageproc::drawing::text_size(PxScale::from(size), &self.font, text).0 as f32
    }

    /// Height of one line box (ascent to descent) at `size` pixels.
    pub fn line_height(&self, size: f32) -> u32 {
        let scaled = self.font.as_scaled(PxScale::from(size));
        (scaled.ascent() - scaled.descent()).round().max(0.0) as u32
    }

    /// Draw `text` with its line box's top-left corner at `(x, y)`.
    pub fn draw(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        size: f32,
        (x, y): (i32, i32),
        color: Rgba<u8>,
    ) {
        // Lines entirely off the canvas draw nothing; skipping them keeps
        // glyph offsets inside i32 for extreme coordinates.
        let (w, h) = (canvas.width() as i64, canvas.height() as i64);
        let (x64, y64) = (x as i64, y as i64);
        if x64 >= w
            || y64 >= h
            || x64 + self.line_width(text, size) as i64 <= 0
            || y64 + self.line_height(size) as i64 <= 0
        {
            return;
        }
        imageproc::drawing::draw_text_mut(canvas, color, x, y, PxScale::from(size), &self.font, text);
    }
}

/// Lines of a wrapped caption, produced on demand.
///
/// Cloning the iterator restarts it from the same position, so the same
/// wrap can be walked once to count lines and again to draw them.
#[derive(Debug, Clone)]
pub struct CaptionLines<'a> {
    face: &'a Typeface,
    size: f32,
    max_width: f32,
    words: Peekable<SplitWhitespace<'a>>,
}

impl Iterator for CaptionLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        // A line always takes at least one word, even one wider than max_width.
        let mut line = self.words.next()?.to_string();
        while let Some(word) = self.words.peek() {
            let candidate = format!("{line} {word}");
            if self.face.line_width(&candidate, self.size) > self.max_width {
                break;
            }
            line = candidate;
            self.words.next();
        }
        Some(line)
    }
}

/// Greedily wrap `caption` into lines no wider than `max_width` pixels.
///
/// Words are split on whitespace and rejoined with single spaces. A word that
/// is wider than `max_width` by itself gets a line of its own and is never
/// broken. Empty or whitespace-only captions produce no lines.
pub fn wrap_caption<'a>(
    face: &'a Typeface,
    caption: &'a str,
    font_size: f32,
    max_width: f32,
) -> CaptionLines<'a> {
    CaptionLines {
        face,
        size: font_size,
        max_width,
        words: caption.split_whitespace().peekable(),
    }
}
