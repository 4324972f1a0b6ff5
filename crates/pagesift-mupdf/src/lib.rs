use mupdf::{Document, TextPageFlags};

use pagesift_core::{BackendError, PdfBackend};

/// MuPDF-based implementation of [`PdfBackend`].
///
/// This crate is the sole AGPL island — it isolates the mupdf dependency
/// (which is AGPL-3.0) so that the pure-Rust extraction chain does not
/// transitively depend on it. The fastest and most decode-capable backend,
/// registered at the head of the fallback chain.
#[derive(Debug, Default)]
pub struct MupdfBackend;

/// Minimal one-page PDF opened by [`MupdfBackend::probe`] to verify the
/// native library initializes.
const PROBE_PDF: &[u8] = b"%PDF-1.4\n\
1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n\
2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n\
3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>\nendobj\n\
4 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>\nendobj\n\
5 0 obj\n<< /Length 42 >>\nstream\nBT /F1 12 Tf 72 720 Td (Hello World) Tj ET\nendstream\nendobj\n\
xref\n0 6\n\
0000000000 65535 f \n\
0000000009 00000 n \n\
0000000058 00000 n \n\
0000000115 00000 n \n\
0000000241 00000 n \n\
0000000311 00000 n \n\
trailer\n<< /Size 6 /Root 1 0 R >>\nstartxref\n403\n%%EOF\n";

impl MupdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for MupdfBackend {
    fn name(&self) -> &str {
        "mupdf"
    }

    fn probe(&self) -> Result<(), BackendError> {
        Document::from_bytes(PROBE_PDF, "pdf")
            .map(|_| ())
            .map_err(|e| BackendError::OpenError(e.to_string()))
    }

    fn extract_pages(&self, data: &[u8]) -> Result<Vec<String>, BackendError> {
        let document =
            Document::from_bytes(data, "pdf").map_err(|e| BackendError::OpenError(e.to_string()))?;

        let mut texts = Vec::new();
        for page_result in document
            .pages()
            .map_err(|e| BackendError::ExtractionError(e.to_string()))?
        {
            // An undecodable page keeps its slot as an empty string so the
            // page count stays intact.
            texts.push(page_text(page_result).unwrap_or_default());
        }
        Ok(texts)
    }
}

fn page_text(page_result: Result<mupdf::Page, mupdf::Error>) -> Result<String, mupdf::Error> {
    let page = page_result?;
    let text_page = page.to_text_page(TextPageFlags::empty())?;

    // Use block/line iteration to match PyMuPDF's get_text() behavior
    let mut page_text = String::new();
    for block in text_page.blocks() {
        for line in block.lines() {
            let line_text: String = line
                .chars()
                .map(|c| c.char().unwrap_or('\u{FFFD}'))
                .collect();
            page_text.push_str(&line_text);
            page_text.push('\n');
        }
    }
    Ok(page_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_succeeds_with_linked_library() {
        assert!(MupdfBackend::new().probe().is_ok());
    }

    #[test]
    fn rejects_garbage_input() {
        let backend = MupdfBackend::new();
        assert!(backend.extract_pages(b"definitely not a pdf").is_err());
    }

    #[test]
    fn extracts_single_page() {
        let backend = MupdfBackend::new();
        let pages = backend.extract_pages(PROBE_PDF).unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].contains("Hello World"), "got: {:?}", pages[0]);
    }
}
