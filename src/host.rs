//! The seam between the post creator and whatever hosts it.
//!
//! The [`Host`] trait covers the two things a post request needs from its
//! surroundings: a file/folder pick dialog and an alert box. The game mod
//! implements it with native dialogs; the CLI implements it with paths from
//! the command line; tests use a recording mock.
//!
//! [`on_post_button`] is the click handler. It opens the image pick and the
//! output-folder pick concurrently, joins them through a
//! [`PendingPost`](crate::request::PendingPost), and composes once both
//! succeed.

use crate::compose::{ComposedPost, compose};
use crate::config::PostConfig;
use crate::error::PostError;
use crate::request::{Completion, JoinState, PendingPost, PickResult};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use tracing::debug;

/// Which kind of dialog to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickMode {
    OpenFile,
    OpenFolder,
}

/// One named group of glob patterns shown in a pick dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickFilter {
    pub description: String,
    pub patterns: Vec<String>,
}

/// Everything a pick dialog is opened with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickOptions {
    /// Where the dialog starts. `None` leaves it to the host.
    pub default_path: Option<PathBuf>,
    pub filters: Vec<PickFilter>,
}

/// Options for the background image pick: png, jpg, jpeg and bmp files.
pub fn image_pick_options() -> PickOptions {
    PickOptions {
        default_path: None,
        filters: vec![PickFilter {
            description: "Image Files".to_string(),
            patterns: ["*.png", "*.jpg", "*.jpeg", "*.bmp"]
                .into_iter()
                .map(String::from)
                .collect(),
        }],
    }
}

/// Options for the output folder pick.
pub fn output_pick_options() -> PickOptions {
    PickOptions {
        default_path: None,
        filters: vec![PickFilter {
            description: "Output Folder".to_string(),
            patterns: vec!["*".to_string()],
        }],
    }
}

/// Dialogs and alerts provided by the embedding application.
///
/// `Sync` so both picks can be driven from separate threads.
pub trait Host: Sync {
    /// Open a pick dialog and block until the user chooses or dismisses it.
    ///
    /// Dismissal is `Err(PostError::PickCancelled)`; any other error means the
    /// dialog itself failed.
    fn pick(&self, mode: PickMode, options: &PickOptions) -> PickResult;

    /// Show a modal message to the user.
    fn alert(&self, title: &str, message: &str);
}

/// How a button click ended when nothing went wrong.
#[derive(Debug)]
pub enum PostOutcome {
    Composed(ComposedPost),
    /// The user dismissed a dialog; nothing was written and nothing was shown.
    Cancelled,
}

/// Handle a click on the post button.
///
/// The template supplies everything but the two picked paths. Real failures
/// are shown once through [`Host::alert`] and also returned.
pub fn on_post_button(host: &dyn Host, template: &PostConfig) -> Result<PostOutcome, PostError> {
    request_post(host, template, compose)
}

/// [`on_post_button`] with the final compose step injected.
pub fn request_post<F>(
    host: &dyn Host,
    template: &PostConfig,
    fire: F,
) -> Result<PostOutcome, PostError>
where
    F: FnOnce(&PostConfig) -> Result<ComposedPost, PostError>,
{
    let mut template = template.clone();
    template.stamp_today();
    debug!(date = ?template.date, "Post requested");

    let decision = match gather_targets(host) {
        JoinState::Ready(targets) => {
            debug!(
                image = %targets.image.display(),
                output_dir = %targets.output_dir.display(),
                "Both picks completed"
            );
            fire(&targets.apply(&template))
        }
        JoinState::Aborted(err) => Err(err),
        JoinState::Waiting | JoinState::Settled => Err(PostError::PickFailed(
            "pick dialogs closed without a result".to_string(),
        )),
    };

    match decision {
        Ok(post) => Ok(PostOutcome::Composed(post)),
        Err(err) if err.is_cancellation() => {
            debug!("Post request cancelled");
            Ok(PostOutcome::Cancelled)
        }
        Err(err) => {
            host.alert("Error", &err.to_string());
            Err(err)
        }
    }
}

/// Run both picks at once and return the first settled join state.
fn gather_targets(host: &dyn Host) -> JoinState {
    let (tx, rx) = mpsc::channel();
    let image_options = image_pick_options();
    let output_options = output_pick_options();

    thread::scope(|scope| {
        let image_tx = tx.clone();
        scope.spawn(move || {
            let result = host.pick(PickMode::OpenFile, &image_options);
            // The receiver is gone once the request has settled.
            let _ = image_tx.send(Completion::Image(result));
        });
        scope.spawn(move || {
            let result = host.pick(PickMode::OpenFolder, &output_options);
            let _ = tx.send(Completion::OutputDir(result));
        });

        let mut pending = PendingPost::new();
        rx.iter()
            .map(|completion| pending.accept(completion))
            .find(|state| !matches!(state, JoinState::Waiting))
            .unwrap_or(JoinState::Waiting)
    })
}
