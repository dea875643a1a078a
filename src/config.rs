//! Post configuration module.
//!
//! Handles loading, validating, and merging `post.toml`. Stock defaults
//! reproduce the published Daily Geode layout; a user file only overrides
//! the keys it names.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! output_dir = "output"        # post.png is written here
//!
//! [canvas]
//! width = 2560                 # Canvas width in pixels
//! stretch = 1.5                # height = width / stretch
//!
//! [spacing]
//! padding = 50                 # Header inset from top and sides, caption side inset
//! extra_padding = 50           # Caption block inset from the bottom
//! logo_padding = 30            # Logo inset from its corner ...
//! logo_extra = 10              # ... plus this
//! line_padding = 36            # Gap below the header and between caption lines
//! line_thickness = 20          # Separator height
//!
//! [header]
//! font = "resources/DejaVuSans-Bold.ttf"
//! font_size = 48.0
//! brand = "The Daily Geode"
//! color = "078c51"
//!
//! [caption]
//! font = "resources/DejaVuSerif-Bold.ttf"
//! font_size = 80.0
//! text = ""
//! color = "ffffff"
//!
//! [logo]
//! path = "resources/logo.png"
//! corner = "top-right"         # top-left | top-right | bottom-left | bottom-right
//! # height = 160               # Scale the logo to this height (omit for native size)
//!
//! [source]
//! # image = "photo.jpg"        # Background image
//! # link = "https://..."       # Remote background (not supported yet)
//!
//! # [date]                     # Omit to stamp the day the post is made
//! # day = 5
//! # month = 3
//! # year = 2024
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::date::PostDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file looked up in the config directory.
pub const CONFIG_FILENAME: &str = "post.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Everything one post is composed from.
///
/// Built fresh for every post request and consumed by a single
/// [`compose`](crate::compose::compose) call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PostConfig {
    /// Directory that receives `post.png`. Created if missing.
    pub output_dir: PathBuf,
    pub canvas: CanvasConfig,
    pub spacing: SpacingConfig,
    pub header: HeaderConfig,
    pub caption: CaptionConfig,
    pub logo: LogoConfig,
    pub source: SourceConfig,
    /// Header date. `None` means "the day the post is requested".
    pub date: Option<PostDate>,
}

impl Default for PostConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            canvas: CanvasConfig::default(),
            spacing: SpacingConfig::default(),
            header: HeaderConfig::default(),
            caption: CaptionConfig::default(),
            logo: LogoConfig::default(),
            source: SourceConfig::default(),
            date: None,
        }
    }
}

impl PostConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas.width == 0 {
            return Err(ConfigError::Validation(
                "canvas.width must be positive".into(),
            ));
        }
        if !(self.canvas.stretch.is_finite() && self.canvas.stretch > 0.0) {
            return Err(ConfigError::Validation(
                "canvas.stretch must be a positive number".into(),
            ));
        }
        if (self.canvas.width as f64 / self.canvas.stretch as f64).round() < 1.0 {
            return Err(ConfigError::Validation(
                "canvas.width / canvas.stretch must be at least one pixel".into(),
            ));
        }
        for (key, size) in [
            ("header.font_size", self.header.font_size),
            ("caption.font_size", self.caption.font_size),
        ] {
            if !(size.is_finite() && size > 0.0) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a positive number"
                )));
            }
        }
        for (key, color) in [
            ("header.color", &self.header.color),
            ("caption.color", &self.caption.color),
        ] {
            if parse_hex_color(color).is_none() {
                return Err(ConfigError::Validation(format!(
                    "{key} must be six hex digits, got {color:?}"
                )));
            }
        }
        if let Some(date) = &self.date {
            if !(1..=31).contains(&date.day) {
                return Err(ConfigError::Validation("date.day must be 1-31".into()));
            }
            if !(1..=12).contains(&date.month) {
                return Err(ConfigError::Validation("date.month must be 1-12".into()));
            }
            if date.year == 0 {
                return Err(ConfigError::Validation("date.year must be positive".into()));
            }
        }
        Ok(())
    }

    /// Set the header date to today unless one is configured.
    pub fn stamp_today(&mut self) {
        self.date.get_or_insert_with(PostDate::today);
    }

    /// The header date. Composition needs one; unset dates are an error
    /// rather than an implicit read of the clock.
    pub fn require_date(&self) -> Result<PostDate, ConfigError> {
        self.date.ok_or_else(|| {
            ConfigError::Validation("date must be set before composing a post".into())
        })
    }
}

/// Output canvas geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height is `width / stretch`, rounded to the nearest pixel.
    pub stretch: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 2560,
            stretch: 1.5,
        }
    }
}

/// Pixel offsets used by the vertical layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpacingConfig {
    pub padding: u32,
    pub extra_padding: u32,
    pub logo_padding: u32,
    pub logo_extra: u32,
    pub line_padding: u32,
    pub line_thickness: u32,
}

impl Default for SpacingConfig {
    fn default() -> Self {
        Self {
            padding: 50,
            extra_padding: 50,
            logo_padding: 30,
            logo_extra: 10,
            line_padding: 36,
            line_thickness: 20,
        }
    }
}

/// Brand + date header band.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderConfig {
    pub font: PathBuf,
    pub font_size: f32,
    pub brand: String,
    /// RGB hex, also used for the separator line.
    pub color: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            font: PathBuf::from("resources/DejaVuSans-Bold.ttf"),
            font_size: 48.0,
            brand: "The Daily Geode".to_string(),
            color: "078c51".to_string(),
        }
    }
}

/// Word-wrapped caption block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaptionConfig {
    pub font: PathBuf,
    pub font_size: f32,
    pub text: String,
    pub color: String,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            font: PathBuf::from("resources/DejaVuSerif-Bold.ttf"),
            font_size: 80.0,
            text: String::new(),
            color: "ffffff".to_string(),
        }
    }
}

/// Canvas corner a logo is pinned to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogoCorner {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Logo asset and placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogoConfig {
    pub path: PathBuf,
    pub corner: LogoCorner,
    /// Scale the logo to this height, keeping its aspect ratio.
    pub height: Option<u32>,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("resources/logo.png"),
            corner: LogoCorner::default(),
            height: None,
        }
    }
}

/// Where the background image comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    /// Local image file (png, jpg, jpeg, bmp).
    pub image: Option<PathBuf>,
    /// Remote image URL. Accepted in config but not fetched.
    pub link: Option<String>,
}

/// Parse `rrggbb` (optionally `#rrggbb`) into RGB bytes.
pub fn parse_hex_color(value: &str) -> Option<[u8; 3]> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(PostConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `post.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `post.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<PostConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: PostConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `post.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(dir: &Path) -> Result<PostConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(dir)?)
}

/// Returns a fully-commented stock `post.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Daily Geode Post Configuration
# ==============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Directory that receives post.png (created if missing).
output_dir = "output"

# ---------------------------------------------------------------------------
# Canvas
# ---------------------------------------------------------------------------
[canvas]
# Canvas width in pixels.
width = 2560

# Canvas height is width / stretch.
stretch = 1.5

# ---------------------------------------------------------------------------
# Spacing (pixels)
# ---------------------------------------------------------------------------
[spacing]
# Header inset from the top and sides; caption inset from the sides.
padding = 50

# Caption block inset from the bottom edge.
extra_padding = 50

# Logo inset from its corner is logo_padding + logo_extra.
logo_padding = 30
logo_extra = 10

# Gap between header and separator, and between caption lines.
line_padding = 36

# Height of the separator line.
line_thickness = 20

# ---------------------------------------------------------------------------
# Header: brand on the left, date on the right
# ---------------------------------------------------------------------------
[header]
font = "resources/DejaVuSans-Bold.ttf"
font_size = 48.0
brand = "The Daily Geode"
# Six hex digits; also colors the separator line.
color = "078c51"

# ---------------------------------------------------------------------------
# Caption: word-wrapped and anchored to the bottom
# ---------------------------------------------------------------------------
[caption]
font = "resources/DejaVuSerif-Bold.ttf"
font_size = 80.0
text = ""
color = "ffffff"

# ---------------------------------------------------------------------------
# Logo
# ---------------------------------------------------------------------------
[logo]
path = "resources/logo.png"
# top-left, top-right, bottom-left or bottom-right.
corner = "top-right"
# Scale the logo to this height in pixels. Omit to keep its native size.
# height = 160

# ---------------------------------------------------------------------------
# Background source
# ---------------------------------------------------------------------------
[source]
# Local image file (png, jpg, jpeg, bmp).
# image = "photo.jpg"
# Remote image URL. Not supported yet: a link-only config fails to compose.
# link = "https://example.com/photo.png"

# ---------------------------------------------------------------------------
# Header date. Omit the whole table to use the day the post is made.
# ---------------------------------------------------------------------------
# [date]
# day = 5
# month = 3
# year = 2024
"##
}
