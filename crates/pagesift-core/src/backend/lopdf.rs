use lopdf::Document;

use super::{BackendError, PdfBackend};

/// Pure-Rust backend built on `lopdf`.
///
/// Slowest and least layout-aware of the chain, but has no native
/// dependencies, so it is registered last as the always-present fallback.
#[derive(Debug, Default)]
pub struct LopdfBackend;

impl LopdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for LopdfBackend {
    fn name(&self) -> &str {
        "lopdf"
    }

    fn extract_pages(&self, data: &[u8]) -> Result<Vec<String>, BackendError> {
        let doc = Document::load_mem(data).map_err(|e| BackendError::OpenError(e.to_string()))?;

        let mut texts = Vec::new();
        for page_num in doc.get_pages().keys() {
            // An undecodable page becomes an empty string; the page count
            // stays intact and the invocation still succeeds.
            texts.push(doc.extract_text(&[*page_num]).unwrap_or_default());
        }
        Ok(texts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::HELLO_PDF;

    #[test]
    fn rejects_garbage_input() {
        let backend = LopdfBackend::new();
        let err = backend.extract_pages(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, BackendError::OpenError(_)));
    }

    #[test]
    fn rejects_empty_input() {
        let backend = LopdfBackend::new();
        assert!(backend.extract_pages(b"").is_err());
    }

    #[test]
    fn extracts_single_page() {
        let backend = LopdfBackend::new();
        let pages = backend.extract_pages(HELLO_PDF).unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].contains("Hello World"), "got: {:?}", pages[0]);
    }
}
