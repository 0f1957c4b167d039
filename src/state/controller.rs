/// The app's sequencing logic
///
/// `AppController` owns the session and decides what each event does to it.
/// It never touches iced directly: scheduling the delay is returned to the
/// caller as a `ScheduledTransition`, and saving goes through a `SaveTarget`.

use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info, warn};

use super::session::{Generation, Session, ViewState};
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::media::export::SaveTarget;
use crate::media::DataUrl;

/// A completion the caller must deliver back after `delay`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTransition {
    pub generation: Generation,
    pub delay: Duration,
}

/// What happened to an upload
#[derive(Debug, Clone)]
pub enum UploadOutcome {
    /// Accepted; deliver `complete_processing` after the delay
    Scheduled(ScheduledTransition),
    /// Arrived outside Idle and was dropped
    Rejected,
    /// The file could not be read; the state is unchanged
    Failed(AppError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Saved(PathBuf),
    /// The user closed the save dialog
    Cancelled,
    /// Nothing to download yet
    Unavailable,
}

#[derive(Debug)]
pub struct AppController {
    session: Session,
    delay: Duration,
    download_filename: String,
}

impl AppController {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            session: Session::new(),
            delay: config.processing_delay(),
            download_filename: config.download_filename.clone(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn view_state(&self) -> ViewState {
        self.session.view_state()
    }

    pub fn generation(&self) -> Generation {
        self.session.generation()
    }

    /// Handle the result of reading an uploaded file
    pub fn accept_upload(&mut self, loaded: AppResult<DataUrl>) -> UploadOutcome {
        let image = match loaded {
            Ok(image) => image,
            Err(err) => {
                warn!(error = %err, "upload failed, staying in {:?}", self.view_state());
                return UploadOutcome::Failed(err);
            }
        };

        match self.session.begin_processing(image) {
            Some(next) => {
                self.session = next;
                let generation = self.session.generation();
                info!(
                    generation = generation.value(),
                    mime = self.session.original().map(DataUrl::mime),
                    delay_ms = self.delay.as_millis() as u64,
                    "processing started"
                );
                UploadOutcome::Scheduled(ScheduledTransition {
                    generation,
                    delay: self.delay,
                })
            }
            None => {
                debug!(state = ?self.view_state(), "upload ignored outside Idle");
                UploadOutcome::Rejected
            }
        }
    }

    /// Apply a scheduled completion. Returns false when it was stale.
    pub fn complete_processing(&mut self, generation: Generation) -> bool {
        match self.session.complete(generation) {
            Some(next) => {
                self.session = next;
                info!(generation = generation.value(), "processing complete");
                true
            }
            None => {
                debug!(
                    generation = generation.value(),
                    current = self.generation().value(),
                    "stale completion discarded"
                );
                false
            }
        }
    }

    /// Back to Idle from any state
    pub fn reset(&mut self) {
        let from = self.view_state();
        self.session = self.session.reset();
        info!(?from, generation = self.generation().value(), "reset to Idle");
    }

    /// Export the enhanced image under the configured filename
    pub fn download(&self, target: &mut impl SaveTarget) -> AppResult<DownloadOutcome> {
        let Some(enhanced) = self.session.enhanced() else {
            debug!("download requested without an enhanced image");
            return Ok(DownloadOutcome::Unavailable);
        };

        match target.save(&self.download_filename, enhanced)? {
            Some(path) => Ok(DownloadOutcome::Saved(path)),
            None => Ok(DownloadOutcome::Cancelled),
        }
    }
}
