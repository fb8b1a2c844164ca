//! # pdf-ocr-upload
//!
//! Stage a local PDF, submit it to a remote OCR endpoint as a one-part
//! multipart POST, and render the returned per-page text.
//!
//! The OCR itself lives behind the endpoint; this crate is the client-side
//! workflow around it, split into three small pieces:
//!
//! ```text
//! select ──▶ submit ──▶ render
//! (guard)    (one POST)  (pure text mapping)
//! ```
//!
//! 1. **Selection guard** — only a declared MIME type of exactly
//!    `application/pdf` may be staged ([`uploader::OcrUploader::select`])
//! 2. **Submission controller** — one request at a time, lifecycle modelled
//!    as the [`RequestState`] sum type so Pending/Failed/Succeeded can never
//!    coexist ([`uploader::OcrUploader::submit`])
//! 3. **Result renderer** — pure functions from state to display text,
//!    pluralized banner and verbatim page content ([`render`])
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf_ocr_upload::{render, OcrUploader, SelectedFile, UploadConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = UploadConfig::new("http://localhost:8080/ocr")?;
//!     let mut uploader = OcrUploader::new(config);
//!
//!     uploader.select(Some(SelectedFile::from_path("report.pdf").await?));
//!     uploader.submit().await;
//!
//!     if let Some(view) = render::render_state(uploader.state()) {
//!         println!("{view}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Wire contract
//!
//! Outbound: `POST <endpoint>` with a multipart body containing exactly one
//! part, field name `file`. Inbound on success:
//! `{ "success": bool, "totalPages": uint, "pages": [{ "pageNumber": uint,
//! "text": string }] }`. A non-2xx status or malformed body surfaces as a
//! single display message; see [`error`] for the taxonomy.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf-ocr` binary (clap + anyhow + tracing-subscriber + indicatif) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod render;
pub mod response;
pub mod selection;
pub mod state;
mod submit;
pub mod uploader;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::UploadConfig;
pub use error::UploadError;
pub use response::{OcrPage, OcrResponse};
pub use selection::{SelectedFile, PDF_MIME};
pub use state::RequestState;
pub use uploader::OcrUploader;
