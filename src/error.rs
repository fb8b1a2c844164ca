//! Error types for the pdf-ocr-upload library.
//!
//! The taxonomy mirrors where each failure is detected:
//!
//! * [`UploadError::NotAPdf`] — **Validation**: caught synchronously at
//!   selection time; the file never reaches the network.
//! * [`UploadError::ServiceFailure`] — **Service**: the endpoint answered
//!   with a non-2xx status. The response body is deliberately not surfaced;
//!   callers see one fixed, generic message.
//! * [`UploadError::Transport`] — **Transport**: network-level failure
//!   (unreachable host, DNS, aborted request) or a 2xx response whose body
//!   could not be parsed as an OCR result.
//! * [`UploadError::InvalidConfig`] — **Configuration**: construction-time
//!   only, surfaced before any uploader exists. Never folded into request
//!   state.
//!
//! Every submission-time error is caught at the submission boundary and
//! converted into [`crate::state::RequestState::Failed`] with its `Display`
//! text; none propagate further up the runtime.

use std::path::PathBuf;
use thiserror::Error;

/// Fallback message for transport failures that carry no text of their own.
pub const TRANSPORT_FALLBACK: &str = "An error occurred";

/// All errors produced by the pdf-ocr-upload library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// Declared MIME type of the chosen file is not `application/pdf`.
    #[error("Please select a PDF file")]
    NotAPdf,

    /// The OCR endpoint answered with a non-2xx status.
    ///
    /// The status code is retained for logging; the user-visible message is
    /// fixed and never quotes the response body.
    #[error("Failed to process OCR request")]
    ServiceFailure { status: u16 },

    /// Network-level failure or malformed response body.
    ///
    /// Construct via [`UploadError::transport`] so an empty description
    /// falls back to [`TRANSPORT_FALLBACK`].
    #[error("{message}")]
    Transport { message: String },

    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'")]
    FileNotFound { path: PathBuf },

    /// Input file exists but could not be read.
    #[error("Failed to read '{path}': {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    /// Configuration validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl UploadError {
    /// Build a transport error, substituting the generic fallback message
    /// when the underlying failure has no text.
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            UploadError::Transport {
                message: TRANSPORT_FALLBACK.to_string(),
            }
        } else {
            UploadError::Transport { message }
        }
    }
}
