use thiserror::Error;

use crate::document::ExtractedDocument;
use crate::registry::BackendRegistry;

/// Terminal failure of one extraction request.
///
/// The `Display` strings are the wire error payloads: individual backend
/// failures are absorbed by the fallback chain and never surface here.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtractError {
    /// The request carried no document payload. No backend was attempted.
    #[error("no file")]
    MissingInput,
    /// Every available backend failed, or none is available.
    #[error("no extractor available")]
    NoExtractorAvailable,
}

/// Applies the fallback chain for a single request.
///
/// Holds no per-request state; the registry snapshot is read-only after
/// startup, so one coordinator serves concurrent requests without locking.
pub struct Coordinator {
    registry: BackendRegistry,
}

impl Coordinator {
    pub fn new(registry: BackendRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &BackendRegistry {
        &self.registry
    }

    /// Extract per-page text from `document`, trying each available backend
    /// in priority order.
    ///
    /// The first backend to return a well-formed page sequence wins (an
    /// empty sequence for a zero-page document counts); its output is
    /// returned untouched. A backend error is a soft failure: it is logged
    /// and discarded, and the next backend is tried. No backend is invoked
    /// more than once per request and no outputs are ever merged.
    pub fn extract(&self, document: &[u8]) -> Result<ExtractedDocument, ExtractError> {
        if document.is_empty() {
            return Err(ExtractError::MissingInput);
        }

        for backend in self.registry.available() {
            tracing::debug!(backend = backend.name(), "attempting extraction");
            match backend.extract_pages(document) {
                Ok(texts) => {
                    tracing::debug!(
                        backend = backend.name(),
                        pages = texts.len(),
                        "extraction succeeded"
                    );
                    return Ok(ExtractedDocument::from_page_texts(texts));
                }
                Err(e) => {
                    tracing::warn!(
                        backend = backend.name(),
                        error = %e,
                        "extraction failed, falling through to next backend"
                    );
                }
            }
        }

        Err(ExtractError::NoExtractorAvailable)
    }
}
