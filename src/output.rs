//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Post
//!
//! ```text
//! Post 03/5/2024 → out/post.png
//!     Canvas: 2560x1707
//!     Caption: 2 lines
//!         Twelve new levels were rated
//!         this week
//! ```
//!
//! ## Check
//!
//! ```text
//! Canvas: 2560x1707
//! Date: 03/5/2024
//! Background: 1920x1080
//! Logo: 128x128
//! Caption: 1 line
//!     Weekly showcase
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::compose::{ComposedPost, PostCheck};

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn dimensions(width: u32, height: u32) -> String {
    format!("{width}x{height}")
}

/// `Caption: N line(s)` followed by each line one level deeper.
fn caption_lines(lines: &[String], depth: usize) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len() + 1);
    let noun = if lines.len() == 1 { "line" } else { "lines" };
    out.push(format!("{}Caption: {} {noun}", indent(depth), lines.len()));
    for line in lines {
        out.push(format!("{}{line}", indent(depth + 1)));
    }
    out
}

// ============================================================================
// Post
// ============================================================================

/// Format the result of composing a post.
pub fn format_post_output(post: &ComposedPost) -> Vec<String> {
    let mut lines = vec![
        format!("Post {} → {}", post.date, post.path.display()),
        format!("{}Canvas: {}", indent(1), dimensions(post.width, post.height)),
    ];
    lines.extend(caption_lines(&post.caption_lines, 1));
    lines
}

pub fn print_post_output(post: &ComposedPost) {
    for line in format_post_output(post) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format what `check` found for a config.
pub fn format_check_output(report: &PostCheck) -> Vec<String> {
    let background = match report.background {
        Some((w, h)) => dimensions(w, h),
        None => "picked at request time".to_string(),
    };
    let mut lines = vec![
        format!("Canvas: {}", dimensions(report.width, report.height)),
        format!("Date: {}", report.date),
        format!("Background: {background}"),
        format!("Logo: {}", dimensions(report.logo.0, report.logo.1)),
    ];
    lines.extend(caption_lines(&report.caption_lines, 0));
    lines
}

pub fn print_check_output(report: &PostCheck) {
    for line in format_check_output(report) {
        println!("{}", line);
    }
}
