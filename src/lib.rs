//! # Daily Geode
//!
//! The post creator behind *The Daily Geode*: a branded image announcing
//! the day's Geometry Dash news. One background picture, the Geode logo,
//! a header with the brand name and the date, a separator line and a
//! wrapped caption are flattened into a single `post.png`.
//!
//! # Architecture: Pick, Join, Compose
//!
//! ```text
//! 1. Pick      image dialog  ┐
//!              folder dialog ┘ concurrently, either order
//! 2. Join      PendingPost   →  PostTargets     (fires exactly once)
//! 3. Compose   PostConfig    →  {output_dir}/post.png
//! ```
//!
//! Composition is a plain function from a [`config::PostConfig`] to a file on
//! disk. Everything interactive lives behind the [`host::Host`] trait, so the
//! same flow runs inside the game, from the CLI, and in tests.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`compose`] | Layout, rendering, PNG encoding and the atomic write of `post.png` |
//! | [`config`] | `post.toml` loading, merging over stock defaults, validation |
//! | [`date`] | The header date and its `MM/D/YYYY` format |
//! | [`error`] | [`error::PostError`], the failure taxonomy of a post request |
//! | [`host`] | The [`host::Host`] seam and the post-button click handler |
//! | [`imaging`] | Pure-Rust image decoding, layout math and text measurement |
//! | [`logging`] | `tracing` subscriber setup |
//! | [`output`] | CLI output formatting |
//! | [`request`] | The join point for the two pick completions |
//!
//! # Design Decisions
//!
//! ## An Explicit Join Point
//!
//! The image and output folder are picked by two dialogs that finish in any
//! order. Rather than each completion checking shared flags, both are fed
//! into a [`request::PendingPost`] state machine. It reports `Ready` once,
//! when both picks have succeeded, and ignores everything after it has fired
//! or aborted. A request can never compose twice or compose after a failure.
//!
//! ## Real Glyph Metrics
//!
//! Caption wrapping measures words with the caption font's own advances and
//! kerning (`ab_glyph`), the same metrics used to rasterize them. A line
//! that is measured to fit is drawn to fit.
//!
//! ## Write-Then-Rename
//!
//! `post.png` is encoded in memory and written through a temporary file in
//! the output directory, then renamed over the target. A failed request
//! never leaves a truncated image behind or clobbers yesterday's post.
//!
//! ## Pure-Rust Imaging
//!
//! Decoding, resampling, compositing and text rendering use the `image`,
//! `imageproc` and `ab_glyph` crates. There are no system libraries to
//! install and no platform-specific code paths.

pub mod compose;
pub mod config;
pub mod date;
pub mod error;
pub mod host;
pub mod imaging;
pub mod logging;
pub mod output;
pub mod request;

#[cfg(test)]
pub(crate) mod test_helpers;
