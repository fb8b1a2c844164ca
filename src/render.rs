//! Result rendering: pure mapping from request state to display text.
//!
//! Nothing here touches the uploader or the network — each function is
//! `&T → String`, so the exact banner wording, pluralization, and verbatim
//! page text are all unit-testable without a request ever being made.
//! Surfaces (the CLI, or any host UI) decide colours, scrolling, and layout;
//! this module decides only the words.

use crate::response::{OcrPage, OcrResponse};
use crate::state::RequestState;

/// Success banner with exact pluralization: "1 page processed successfully"
/// vs "N pages processed successfully" for every N ≠ 1 (including 0).
pub fn banner(total_pages: u32) -> String {
    if total_pages == 1 {
        "1 page processed successfully".to_string()
    } else {
        format!("{total_pages} pages processed successfully")
    }
}

/// Heading for one page block: "Page {pageNumber}".
pub fn page_heading(page_number: u32) -> String {
    format!("Page {page_number}")
}

/// One page block: heading, newline, then the text verbatim.
///
/// The text is reproduced character-for-character — embedded newlines and
/// whitespace included — so `page_block(p)` minus its heading line recovers
/// `p.text` exactly.
pub fn page_block(page: &OcrPage) -> String {
    format!("{}\n{}", page_heading(page.page_number), page.text)
}

/// Full success view: banner, total count, then one block per page in the
/// order the service returned them.
pub fn render_success(response: &OcrResponse) -> String {
    let mut out = String::new();
    out.push_str(&banner(response.total_pages));
    out.push('\n');
    out.push_str(&format!("Total pages: {}\n", response.total_pages));

    for page in &response.pages {
        out.push('\n');
        out.push_str(&page_block(page));
        out.push('\n');
    }

    out
}

/// Map the request state to its display text.
///
/// `Idle` and `Pending` show nothing (the surface drives its own busy
/// indicator while `Pending`); `Failed` shows the message verbatim;
/// `Succeeded` shows the full success view.
pub fn render_state(state: &RequestState) -> Option<String> {
    match state {
        RequestState::Idle | RequestState::Pending => None,
        RequestState::Failed(message) => Some(message.clone()),
        RequestState::Succeeded(response) => Some(render_success(response)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: u32, text: &str) -> OcrPage {
        OcrPage {
            page_number: n,
            text: text.to_string(),
        }
    }

    #[test]
    fn banner_singular_only_for_one() {
        assert_eq!(banner(1), "1 page processed successfully");
        for n in [0, 2, 17, 100] {
            assert_eq!(banner(n), format!("{n} pages processed successfully"));
        }
    }

    #[test]
    fn page_block_round_trips_text_verbatim() {
        let texts = [
            "Hello\nWorld",
            "",
            "  leading and trailing  \n\n",
            "tabs\tand\nnewlines\n",
        ];
        for text in texts {
            let p = page(7, text);
            let block = page_block(&p);
            let recovered = block
                .strip_prefix("Page 7\n")
                .expect("block starts with heading");
            assert_eq!(recovered, text);
        }
    }

    #[test]
    fn success_view_preserves_page_order() {
        let resp = OcrResponse {
            success: true,
            total_pages: 3,
            // Deliberately out of numeric order — service order wins.
            pages: vec![page(2, "two"), page(1, "one"), page(3, "three")],
        };

        let view = render_success(&resp);
        let p2 = view.find("Page 2").expect("page 2 present");
        let p1 = view.find("Page 1").expect("page 1 present");
        let p3 = view.find("Page 3").expect("page 3 present");
        assert!(p2 < p1 && p1 < p3, "blocks must follow service order");
    }

    #[test]
    fn success_view_example_scenario() {
        let resp = OcrResponse {
            success: true,
            total_pages: 2,
            pages: vec![page(1, "Hello\nWorld"), page(2, "")],
        };

        let view = render_success(&resp);
        assert!(view.starts_with("2 pages processed successfully\n"));
        assert!(view.contains("Total pages: 2"));
        assert!(view.contains("Page 1\nHello\nWorld"));
        assert!(view.contains("Page 2\n"));
    }

    #[test]
    fn idle_and_pending_render_nothing() {
        assert_eq!(render_state(&RequestState::Idle), None);
        assert_eq!(render_state(&RequestState::Pending), None);
    }

    #[test]
    fn failed_renders_message_verbatim() {
        let state = RequestState::Failed("Failed to process OCR request".into());
        assert_eq!(
            render_state(&state).as_deref(),
            Some("Failed to process OCR request")
        );
    }
}
