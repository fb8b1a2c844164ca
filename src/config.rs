//! Uploader configuration.
//!
//! The endpoint URL is the one required configuration value, injected
//! explicitly at construction rather than read from a module-level global —
//! that keeps the uploader testable without environment mutation. A missing
//! or empty URL is a construction-time error; it never reaches the request
//! state machine.

use crate::error::UploadError;

/// Configuration for an [`crate::uploader::OcrUploader`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    /// OCR endpoint URL the multipart POST is sent to.
    pub endpoint: String,
}

impl UploadConfig {
    /// Validate and build the configuration.
    ///
    /// # Errors
    /// [`UploadError::InvalidConfig`] when the endpoint is empty or
    /// whitespace-only.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, UploadError> {
        let endpoint = endpoint.into();
        if endpoint.trim().is_empty() {
            return Err(UploadError::InvalidConfig(
                "OCR endpoint URL must not be empty".into(),
            ));
        }
        Ok(Self { endpoint })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_empty_endpoint() {
        let config = UploadConfig::new("http://localhost:8080/ocr").expect("valid config");
        assert_eq!(config.endpoint, "http://localhost:8080/ocr");
    }

    #[test]
    fn rejects_empty_endpoint() {
        assert!(matches!(
            UploadConfig::new(""),
            Err(UploadError::InvalidConfig(_))
        ));
        assert!(matches!(
            UploadConfig::new("   "),
            Err(UploadError::InvalidConfig(_))
        ));
    }
}
