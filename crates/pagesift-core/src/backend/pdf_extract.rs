use std::panic::{self, AssertUnwindSafe};

use super::{BackendError, PdfBackend};

/// Pure-Rust backend built on `pdf-extract`.
///
/// Better text reconstruction than `lopdf` on most documents, so it sits
/// ahead of it in the chain. The library panics on some malformed inputs;
/// panics are caught here and reported as ordinary extraction failures so
/// the fallback chain can continue.
#[derive(Debug, Default)]
pub struct PdfExtractBackend;

impl PdfExtractBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for PdfExtractBackend {
    fn name(&self) -> &str {
        "pdf-extract"
    }

    fn extract_pages(&self, data: &[u8]) -> Result<Vec<String>, BackendError> {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(data)
        }));

        match outcome {
            Ok(Ok(pages)) => Ok(pages),
            Ok(Err(e)) => Err(BackendError::ExtractionError(e.to_string())),
            Err(_) => Err(BackendError::ExtractionError(
                "pdf-extract panicked".to_string(),
            )),
        }
    }
}
