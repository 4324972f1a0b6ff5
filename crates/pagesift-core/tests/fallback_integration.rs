//! Integration tests for the fallback chain.
//!
//! These tests use scripted mock backends only, so no real PDF engine is
//! exercised and no document needs to be parsable.

use std::sync::Arc;

use pagesift_core::backend::mock::{MockBackend, MockResponse};
use pagesift_core::{BackendRegistry, Config, Coordinator, ExtractError, PdfBackend};

fn pages(texts: &[&str]) -> MockResponse {
    MockResponse::Pages(texts.iter().map(|t| t.to_string()).collect())
}

fn coordinator(backends: Vec<Arc<dyn PdfBackend>>) -> Coordinator {
    Coordinator::new(BackendRegistry::new(backends, &Config::default()))
}

#[test]
fn page_level_failure_in_the_winning_backend_keeps_page_count() {
    // Backend 1 fails outright; backend 2 processed a 3-page document where
    // page 2 was undecodable and came back empty.
    let first = Arc::new(MockBackend::new(
        "first",
        MockResponse::Error("internal decode error".into()),
    ));
    let second = Arc::new(MockBackend::new(
        "second",
        pages(&["intro text", "", "closing text"]),
    ));
    let coordinator = coordinator(vec![first, second.clone()]);

    let doc = coordinator.extract(b"%PDF-").unwrap();
    assert_eq!(doc.page_count(), 3);
    assert_eq!(
        doc.pages.iter().map(|p| p.page).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(doc.pages[0].text, "intro text");
    assert_eq!(doc.pages[1].text, "");
    assert_eq!(doc.pages[2].text, "closing text");
}

#[test]
fn failed_probe_excludes_a_backend_for_every_request() {
    let broken = Arc::new(MockBackend::unavailable("broken"));
    let working = Arc::new(MockBackend::new("working", pages(&["ok"])));
    let coordinator = coordinator(vec![broken.clone(), working]);

    // Two requests; the unavailable backend is never consulted again.
    coordinator.extract(b"%PDF-").unwrap();
    coordinator.extract(b"%PDF-").unwrap();
    assert_eq!(broken.call_count(), 0);
}

#[test]
fn winning_output_is_returned_untouched_after_earlier_failures() {
    // However many earlier backends fail, the result is exactly the first
    // successful backend's output.
    let chain: Vec<Arc<dyn PdfBackend>> = vec![
        Arc::new(MockBackend::new("a", MockResponse::Error("bad xref".into()))),
        Arc::new(MockBackend::new("b", MockResponse::Error("bad stream".into()))),
        Arc::new(MockBackend::new("c", pages(&["only the winner's text"]))),
        Arc::new(MockBackend::new("d", pages(&["never reached"]))),
    ];
    let coordinator = coordinator(chain);

    let doc = coordinator.extract(b"%PDF-").unwrap();
    assert_eq!(doc.page_count(), 1);
    assert_eq!(doc.pages[0].text, "only the winner's text");
}

#[test]
fn missing_input_wins_over_missing_backends() {
    // Input check happens before the registry is consulted at all.
    let coordinator = coordinator(Vec::new());
    assert_eq!(coordinator.extract(b""), Err(ExtractError::MissingInput));
}

#[test]
fn sequenced_backend_failures_do_not_leak_partial_results() {
    // A backend that fails on the first call and would succeed on a second
    // is still only invoked once per request.
    let flaky = Arc::new(MockBackend::with_sequence(
        "flaky",
        vec![
            MockResponse::Error("transient".into()),
            pages(&["would have worked"]),
        ],
    ));
    let steady = Arc::new(MockBackend::new("steady", pages(&["steady text"])));
    let coordinator = coordinator(vec![flaky.clone(), steady]);

    let doc = coordinator.extract(b"%PDF-").unwrap();
    assert_eq!(doc.pages[0].text, "steady text");
    assert_eq!(flaky.call_count(), 1);
}
