//! The staged file: an in-memory handle to a user-chosen local PDF.
//!
//! A [`SelectedFile`] carries the name, declared MIME type, and bytes of one
//! chosen file — the same three attributes a browser file picker exposes.
//! Whether it may be staged is decided by the selection guard in
//! [`crate::uploader::OcrUploader::select`]: only a declared MIME type of
//! exactly `application/pdf` is accepted.
//!
//! [`SelectedFile::from_path`] is the CLI-side stand-in for the picker. It
//! derives the MIME type the way an OS file dialog would (extension), then
//! double-checks the `%PDF` magic bytes so a renamed text file is declared
//! `application/octet-stream` and rejected by the guard instead of being
//! shipped to the endpoint.

use crate::error::UploadError;
use std::path::Path;
use tracing::debug;

/// The only MIME type the selection guard accepts.
pub const PDF_MIME: &str = "application/pdf";

const OCTET_STREAM: &str = "application/octet-stream";
const PDF_MAGIC: &[u8; 4] = b"%PDF";

/// A user-chosen local file, staged but not yet submitted.
///
/// Created on selection, replaced or cleared on re-selection, removal, or
/// reset. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Original filename, forwarded verbatim as the multipart filename.
    pub name: String,
    /// Declared MIME type, as a picker or OS would report it.
    pub mime_type: String,
    /// Raw file content.
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Whether the declared MIME type is exactly `application/pdf`.
    pub fn is_pdf(&self) -> bool {
        self.mime_type == PDF_MIME
    }

    /// Load a file from disk, deriving its declared MIME type.
    ///
    /// The type is `application/pdf` only when the extension is `.pdf`
    /// (case-insensitive) and the content starts with the `%PDF` magic
    /// bytes; anything else is `application/octet-stream` and will be
    /// rejected by the selection guard.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, UploadError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(UploadError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| UploadError::ReadFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let pdf_extension = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        let pdf_magic = bytes.len() >= PDF_MAGIC.len() && &bytes[..PDF_MAGIC.len()] == PDF_MAGIC;

        let mime_type = if pdf_extension && pdf_magic {
            PDF_MIME
        } else {
            OCTET_STREAM
        };

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.pdf".to_string());

        debug!(
            "Loaded '{}': {} bytes, declared type {}",
            name,
            bytes.len(),
            mime_type
        );

        Ok(Self::new(name, mime_type, bytes))
    }
}
