//! The four-way request lifecycle, modelled as a sum type.
//!
//! `Idle → Pending → {Succeeded | Failed} → Idle` — reset returns to `Idle`
//! from any terminal state, and a new valid selection implicitly does the
//! same by clearing the prior result or error.
//!
//! A single enum rather than independent `loading`/`result`/`error` flags
//! makes the illegal combinations (Pending and Failed at once, a result
//! alongside an error) unrepresentable.

use crate::response::OcrResponse;

/// Lifecycle of one OCR submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    /// No submission outstanding, no result or error to show.
    #[default]
    Idle,
    /// One request is in flight; re-submission is a no-op until it settles.
    Pending,
    /// The endpoint answered 2xx with a well-formed body.
    Succeeded(OcrResponse),
    /// Validation, transport, or service failure — one display message.
    Failed(String),
}

impl RequestState {
    pub fn is_idle(&self) -> bool {
        matches!(self, RequestState::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    /// Whether the machine is in a terminal state (`Succeeded` or `Failed`).
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestState::Succeeded(_) | RequestState::Failed(_))
    }

    /// The parsed response, when the last submission succeeded.
    pub fn response(&self) -> Option<&OcrResponse> {
        match self {
            RequestState::Succeeded(resp) => Some(resp),
            _ => None,
        }
    }

    /// The display message, when the machine holds an error.
    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        assert!(RequestState::default().is_idle());
    }

    #[test]
    fn accessors_match_variant() {
        let resp = OcrResponse {
            success: true,
            total_pages: 0,
            pages: vec![],
        };

        let succeeded = RequestState::Succeeded(resp.clone());
        assert!(succeeded.is_terminal());
        assert_eq!(succeeded.response(), Some(&resp));
        assert_eq!(succeeded.error(), None);

        let failed = RequestState::Failed("boom".into());
        assert!(failed.is_terminal());
        assert_eq!(failed.error(), Some("boom"));
        assert_eq!(failed.response(), None);

        assert!(!RequestState::Pending.is_terminal());
        assert!(RequestState::Pending.is_pending());
        assert!(!RequestState::Idle.is_terminal());
    }
}
