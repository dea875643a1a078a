//! Join point for the two picks that precede a post.
//!
//! A post needs a background image and an output folder. Both come from
//! independent dialogs that may finish in either order, and either may fail
//! or be cancelled. [`PendingPost`] receives their completions one at a time
//! and settles exactly once:
//!
//! | Received so far | [`JoinState`] |
//! |---|---|
//! | one success | `Waiting` |
//! | both successes | `Ready(targets)` |
//! | any failure | `Aborted(error)` |
//! | anything after settling | `Settled` |

use crate::config::PostConfig;
use crate::error::PostError;
use std::path::PathBuf;

/// Result of one pick dialog.
pub type PickResult = Result<PathBuf, PostError>;

/// A finished pick, tagged with what it was picking.
#[derive(Debug)]
pub enum Completion {
    Image(PickResult),
    OutputDir(PickResult),
}

/// Both picked paths, ready to be applied to a config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTargets {
    pub image: PathBuf,
    pub output_dir: PathBuf,
}

impl PostTargets {
    /// Copy of `template` that reads from and writes to the picked paths.
    pub fn apply(&self, template: &PostConfig) -> PostConfig {
        let mut config = template.clone();
        config.source.image = Some(self.image.clone());
        config.output_dir = self.output_dir.clone();
        config
    }
}

/// What the join point decided after a completion.
#[derive(Debug)]
pub enum JoinState {
    /// Still missing the other pick.
    Waiting,
    /// Both picks succeeded. Returned once.
    Ready(PostTargets),
    /// A pick failed or was cancelled. Returned once.
    Aborted(PostError),
    /// The request already fired or aborted; the completion was ignored.
    Settled,
}

#[derive(Debug)]
enum Phase {
    Open {
        image: Option<PathBuf>,
        output_dir: Option<PathBuf>,
    },
    Settled,
}

/// Accumulates pick completions for one post request.
#[derive(Debug)]
pub struct PendingPost {
    phase: Phase,
}

impl Default for PendingPost {
    fn default() -> Self {
        Self::new()
    }
}

impl PendingPost {
    pub fn new() -> Self {
        Self {
            phase: Phase::Open {
                image: None,
                output_dir: None,
            },
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.phase, Phase::Settled)
    }

    /// Record a completion and report whether the request can fire.
    pub fn accept(&mut self, completion: Completion) -> JoinState {
        let Phase::Open { image, output_dir } = &mut self.phase else {
            return JoinState::Settled;
        };

        let (slot, result) = match completion {
            Completion::Image(result) => (&mut *image, result),
            Completion::OutputDir(result) => (&mut *output_dir, result),
        };
        match result {
            Ok(path) => *slot = Some(path),
            Err(err) => {
                self.phase = Phase::Settled;
                return JoinState::Aborted(err);
            }
        }

        if let (Some(image), Some(output_dir)) = (image.as_ref(), output_dir.as_ref()) {
            let targets = PostTargets {
                image: image.clone(),
                output_dir: output_dir.clone(),
            };
            self.phase = Phase::Settled;
            return JoinState::Ready(targets);
        }
        JoinState::Waiting
    }
}
