//! The uploader component: selection guard, submission controller, and the
//! state the renderer reads.
//!
//! One [`OcrUploader`] owns everything the original form component owned:
//! the staged file and the [`RequestState`] machine. All mutation goes
//! through its methods, and the methods take `&mut self`, so no shared
//! mutable state exists and at most one submission can be outstanding —
//! a second `submit` cannot even start while the first is awaited.
//!
//! ## State machine
//!
//! ```text
//! Idle ──select(valid)──▶ Idle (file staged)
//! Idle ──select(other)──▶ Failed("Please select a PDF file")
//! Idle ──submit────────▶ Pending ──▶ Succeeded | Failed
//! any  ──reset─────────▶ Idle
//! ```
//!
//! Every exit path of [`OcrUploader::submit`] assigns a terminal state, so
//! `Pending` can never survive the call returning — the UI-stuck-on-spinner
//! failure mode is ruled out structurally.

use crate::config::UploadConfig;
use crate::error::UploadError;
use crate::selection::SelectedFile;
use crate::state::RequestState;
use crate::submit;
use tracing::{debug, info, warn};

/// Stages one PDF and submits it to the configured OCR endpoint.
///
/// # Example
/// ```rust,no_run
/// use pdf_ocr_upload::{OcrUploader, SelectedFile, UploadConfig};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = UploadConfig::new("http://localhost:8080/ocr")?;
/// let mut uploader = OcrUploader::new(config);
///
/// uploader.select(Some(SelectedFile::from_path("report.pdf").await?));
/// uploader.submit().await;
///
/// if let Some(resp) = uploader.state().response() {
///     println!("{} pages", resp.total_pages);
/// }
/// # Ok(())
/// # }
/// ```
pub struct OcrUploader {
    config: UploadConfig,
    client: reqwest::Client,
    staged: Option<SelectedFile>,
    state: RequestState,
}

impl OcrUploader {
    pub fn new(config: UploadConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            staged: None,
            state: RequestState::Idle,
        }
    }

    /// The currently staged file, if any.
    pub fn staged_file(&self) -> Option<&SelectedFile> {
        self.staged.as_ref()
    }

    /// The current request lifecycle state.
    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Selection guard: handle a picker change exposing zero or one file.
    ///
    /// * `None` — state left unchanged.
    /// * declared type not `application/pdf` — staged file and any prior
    ///   result are cleared, the validation message is surfaced.
    /// * valid PDF — staged; any prior error or result is cleared.
    pub fn select(&mut self, picked: Option<SelectedFile>) {
        let Some(file) = picked else {
            return;
        };

        if !file.is_pdf() {
            warn!(
                "Rejected '{}': declared type '{}' is not PDF",
                file.name, file.mime_type
            );
            self.staged = None;
            self.state = RequestState::Failed(UploadError::NotAPdf.to_string());
            return;
        }

        debug!("Staged '{}' ({} bytes)", file.name, file.bytes.len());
        self.staged = Some(file);
        self.state = RequestState::Idle;
    }

    /// Remove the staged file and clear any error.
    ///
    /// A prior successful result stays visible until [`OcrUploader::reset`]
    /// or a new selection replaces it. There is no sticky picker-control
    /// value here: the same filename can be re-selected immediately.
    pub fn remove(&mut self) {
        self.staged = None;
        if matches!(self.state, RequestState::Failed(_)) {
            self.state = RequestState::Idle;
        }
    }

    /// Clear staged file, result, and error, returning to `Idle`.
    pub fn reset(&mut self) {
        self.staged = None;
        self.state = RequestState::Idle;
    }

    /// Submit the staged file to the OCR endpoint.
    ///
    /// A no-op when no file is staged or a request is already in flight.
    /// Otherwise transitions to `Pending`, issues one multipart POST, and
    /// settles into `Succeeded` or `Failed` — exactly one completion path
    /// runs, and all of them replace `Pending`.
    pub async fn submit(&mut self) -> &RequestState {
        if self.state.is_pending() {
            debug!("submit ignored: a request is already in flight");
            return &self.state;
        }
        let Some(file) = self.staged.clone() else {
            debug!("submit ignored: no file staged");
            return &self.state;
        };

        self.state = RequestState::Pending;

        let outcome = submit::post_file(&self.client, &self.config.endpoint, &file).await;

        self.state = match outcome {
            Ok(response) => {
                if !response.page_count_consistent() {
                    warn!(
                        "Endpoint reported {} pages but returned {}",
                        response.total_pages,
                        response.pages.len()
                    );
                }
                info!(
                    "OCR succeeded for '{}': {} pages",
                    file.name, response.total_pages
                );
                RequestState::Succeeded(response)
            }
            Err(err) => {
                warn!("OCR submission failed for '{}': {}", file.name, err);
                RequestState::Failed(err.to_string())
            }
        };

        &self.state
    }

    /// Synchronous wrapper around [`OcrUploader::submit`].
    ///
    /// Creates a temporary tokio runtime internally; for callers without an
    /// async context of their own.
    pub fn submit_blocking(&mut self) -> Result<&RequestState, UploadError> {
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| UploadError::Internal(format!("Failed to create tokio runtime: {e}")))?;
        runtime.block_on(self.submit());
        Ok(&self.state)
    }
}
