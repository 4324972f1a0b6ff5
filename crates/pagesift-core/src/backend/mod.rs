//! Extraction backend trait and implementations.

pub mod lopdf;
pub mod mock;
pub mod pdf_extract;

use thiserror::Error;

pub use self::lopdf::LopdfBackend;
pub use self::pdf_extract::PdfExtractBackend;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
}

/// A PDF text extraction backend wrapping one third-party engine.
///
/// Backends are registered once at process start in a fixed priority order
/// (see [`crate::BackendRegistry`]) and invoked at most once per request by
/// the fallback chain in [`crate::Coordinator`].
pub trait PdfBackend: Send + Sync {
    /// Stable name used in the registry, configuration, and diagnostics.
    fn name(&self) -> &str;

    /// Verify the underlying engine is usable. Called exactly once, at
    /// registry construction; a failing probe excludes the backend for the
    /// remainder of the process lifetime.
    fn probe(&self) -> Result<(), BackendError> {
        Ok(())
    }

    /// Extract the text of every page, in physical page order.
    ///
    /// A failure to decode one page must not abort the document: the backend
    /// substitutes an empty string for that page and preserves the page
    /// count. Returning `Err` means the whole invocation failed and the
    /// caller falls through to the next backend.
    fn extract_pages(&self, data: &[u8]) -> Result<Vec<String>, BackendError>;
}

/// Minimal one-page PDF ("Hello World") used by engine smoke tests.
#[cfg(test)]
pub(crate) const HELLO_PDF: &[u8] = b"%PDF-1.4\n\
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
