//! Error taxonomy for a post request.
//!
//! Every failure is terminal for the current request; nothing is retried.
//! The one outcome that is not a real failure is [`PostError::PickCancelled`]:
//! the user dismissed a dialog, so the request is dropped without an alert.

use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostError {
    #[error("Failed to decode image {}: {reason}", path.display())]
    ImageDecodeFailed { path: PathBuf, reason: String },
    #[error("No image source: {0}")]
    NoImageSource(String),
    #[error("Failed to load font {}: {reason}", path.display())]
    FontLoadFailed { path: PathBuf, reason: String },
    #[error("PNG encode failed: {0}")]
    EncodeFailed(String),
    #[error("Selection cancelled")]
    PickCancelled,
    #[error("Selection failed: {0}")]
    PickFailed(String),
    #[error("Failed to create output directory {}: {source}", path.display())]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PostError {
    /// True when the user dismissed a dialog rather than something breaking.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, PostError::PickCancelled)
    }
}
