use serde::Serialize;

/// A single page of extracted text.
///
/// `page` is 1-based and matches the physical page order of the source
/// document. `text` may be empty when the page had no extractable text or
/// when a per-page decode failure was absorbed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub page: u32,
    pub text: String,
}

/// The complete per-page text of one document, produced by exactly one
/// backend. Either every page of the source document is present, in order,
/// or no `ExtractedDocument` exists at all — partial results never leave
/// the coordinator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedDocument {
    pub pages: Vec<Page>,
}

impl ExtractedDocument {
    /// Build a document from per-page texts, assigning contiguous 1-based
    /// page numbers. Backends return plain `Vec<String>` so they cannot
    /// produce gaps or reordered numbering.
    pub fn from_page_texts(texts: Vec<String>) -> Self {
        let pages = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Page {
                page: i as u32 + 1,
                text,
            })
            .collect();
        Self { pages }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
