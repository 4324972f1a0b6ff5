//! Mock extraction backend for testing.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{BackendError, PdfBackend};

/// A configurable mock response for [`MockBackend`].
#[derive(Clone, Debug)]
pub enum MockResponse {
    /// Simulate a successful extraction with the given per-page texts.
    Pages(Vec<String>),
    /// Simulate a whole-backend failure.
    Error(String),
}

/// A hand-rolled mock implementing [`PdfBackend`] for tests.
///
/// Supports:
/// - A fixed response (used for every call), **or**
/// - A sequence of responses (one per call, repeating the last if exhausted).
/// - A failing probe, to simulate an unavailable engine.
/// - Call counting via [`call_count()`](MockBackend::call_count).
pub struct MockBackend {
    name: &'static str,
    /// If non-empty, each call pops the next response (last is repeated
    /// once exhausted).
    responses: Mutex<Vec<MockResponse>>,
    /// Fallback when the sequence is empty (or single-response mode).
    fallback: MockResponse,
    probe_error: Option<String>,
    call_count: AtomicUsize,
}

impl MockBackend {
    /// Create a mock that always returns `response`.
    pub fn new(name: &'static str, response: MockResponse) -> Self {
        Self {
            name,
            responses: Mutex::new(Vec::new()),
            fallback: response,
            probe_error: None,
            call_count: AtomicUsize::new(0),
        }
    }

    /// Create a mock that returns responses in order, repeating the last one.
    pub fn with_sequence(name: &'static str, mut responses: Vec<MockResponse>) -> Self {
        assert!(
            !responses.is_empty(),
            "sequence must have at least one response"
        );
        // Reverse so we can pop() from the front cheaply.
        responses.reverse();
        let fallback = responses.first().cloned().unwrap();
        Self {
            name,
            responses: Mutex::new(responses),
            fallback,
            probe_error: None,
            call_count: AtomicUsize::new(0),
        }
    }

    /// Create a mock whose probe fails, i.e. an engine that is not usable.
    pub fn unavailable(name: &'static str) -> Self {
        let mut mock = Self::new(name, MockResponse::Error("unavailable".into()));
        mock.probe_error = Some("engine failed to initialize".into());
        mock
    }

    /// How many times `extract_pages()` has been called.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    fn next_response(&self) -> MockResponse {
        let mut seq = self.responses.lock().unwrap();
        if let Some(resp) = seq.pop() {
            resp
        } else {
            self.fallback.clone()
        }
    }
}

impl PdfBackend for MockBackend {
    fn name(&self) -> &str {
        self.name
    }

    fn probe(&self) -> Result<(), BackendError> {
        match &self.probe_error {
            Some(msg) => Err(BackendError::OpenError(msg.clone())),
            None => Ok(()),
        }
    }

    fn extract_pages(&self, _data: &[u8]) -> Result<Vec<String>, BackendError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        match self.next_response() {
            MockResponse::Pages(texts) => Ok(texts),
            MockResponse::Error(msg) => Err(BackendError::ExtractionError(msg)),
        }
    }
}
