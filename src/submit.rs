//! The submission boundary: one multipart POST to the OCR endpoint.
//!
//! The request body is a multipart form with exactly one part, field name
//! `file`, carrying the staged bytes under the original filename. No other
//! fields, headers, or query parameters are added beyond what the multipart
//! encoding itself requires.
//!
//! Failure mapping (see [`crate::error`]):
//! * non-2xx status → [`UploadError::ServiceFailure`], body not inspected
//! * send failure or unparseable 2xx body → [`UploadError::transport`]
//!
//! No retry, no cancellation, no timeout of our own — the transport's
//! defaults apply, and a single request runs to completion.

use crate::error::UploadError;
use crate::response::OcrResponse;
use crate::selection::SelectedFile;
use reqwest::multipart::{Form, Part};
use tracing::{debug, warn};

/// POST the staged file to the endpoint and parse the per-page result.
pub(crate) async fn post_file(
    client: &reqwest::Client,
    endpoint: &str,
    file: &SelectedFile,
) -> Result<OcrResponse, UploadError> {
    let part = Part::bytes(file.bytes.clone())
        .file_name(file.name.clone())
        .mime_str(&file.mime_type)
        .map_err(|e| UploadError::Internal(format!("multipart part: {e}")))?;
    let form = Form::new().part("file", part);

    debug!(
        "POST {} — '{}', {} bytes",
        endpoint,
        file.name,
        file.bytes.len()
    );

    let response = client
        .post(endpoint)
        .multipart(form)
        .send()
        .await
        .map_err(transport_error)?;

    let status = response.status();
    if !status.is_success() {
        warn!("OCR endpoint answered {}", status);
        return Err(UploadError::ServiceFailure {
            status: status.as_u16(),
        });
    }

    // A 2xx body that fails to parse is a transport failure, same as a
    // dropped connection: the caller sees the parser's message.
    response
        .json::<OcrResponse>()
        .await
        .map_err(transport_error)
}

fn transport_error(e: reqwest::Error) -> UploadError {
    UploadError::transport(e.to_string())
}
