//! Wire types for the OCR endpoint's JSON result.
//!
//! The endpoint answers a successful upload with camelCase JSON:
//!
//! ```json
//! {
//!   "success": true,
//!   "totalPages": 2,
//!   "pages": [
//!     { "pageNumber": 1, "text": "Hello\nWorld" },
//!     { "pageNumber": 2, "text": "" }
//!   ]
//! }
//! ```
//!
//! `pages` is kept in the order the service returned it — page order on the
//! wire is page order on screen. `totalPages` is reported by the service and
//! is not required to equal `pages.len()`; the uploader logs a warning on
//! mismatch but stays permissive.

use serde::{Deserialize, Serialize};

/// One extracted page. Immutable once received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrPage {
    /// 1-based page number as assigned by the service.
    pub page_number: u32,
    /// Extracted text. May be empty; whitespace and newlines are significant
    /// and must be preserved verbatim through rendering.
    pub text: String,
}

/// The full result of one submission.
///
/// Owned by the uploader's transient state; discarded on reset or
/// re-submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrResponse {
    pub success: bool,
    /// Page count as reported by the service.
    pub total_pages: u32,
    /// Extracted pages in service order.
    pub pages: Vec<OcrPage>,
}

impl OcrResponse {
    /// Whether the reported page count matches the number of pages returned.
    pub fn page_count_consistent(&self) -> bool {
        self.pages.len() as u64 == u64::from(self.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_camel_case_response() {
        let json = r#"{
            "success": true,
            "totalPages": 2,
            "pages": [
                { "pageNumber": 1, "text": "Hello\nWorld" },
                { "pageNumber": 2, "text": "" }
            ]
        }"#;

        let resp: OcrResponse = serde_json::from_str(json).expect("valid response");
        assert!(resp.success);
        assert_eq!(resp.total_pages, 2);
        assert_eq!(resp.pages.len(), 2);
        assert_eq!(resp.pages[0].page_number, 1);
        assert_eq!(resp.pages[0].text, "Hello\nWorld");
        assert_eq!(resp.pages[1].text, "");
        assert!(resp.page_count_consistent());
    }

    #[test]
    fn snake_case_keys_are_rejected() {
        let json = r#"{ "success": true, "total_pages": 0, "pages": [] }"#;
        assert!(serde_json::from_str::<OcrResponse>(json).is_err());
    }

    #[test]
    fn page_count_mismatch_is_representable() {
        let resp = OcrResponse {
            success: true,
            total_pages: 3,
            pages: vec![OcrPage {
                page_number: 1,
                text: "only one".into(),
            }],
        };
        assert!(!resp.page_count_consistent());
    }
}
