use pagesift_core::{ExtractError, ExtractedDocument};
use serde::Serialize;

// ── Success payload ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct PagesResponse {
    pub pages: Vec<PageJson>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageJson {
    pub page: u32,
    pub text: String,
}

impl From<&ExtractedDocument> for PagesResponse {
    fn from(doc: &ExtractedDocument) -> Self {
        PagesResponse {
            pages: doc
                .pages
                .iter()
                .map(|p| PageJson {
                    page: p.page,
                    text: p.text.clone(),
                })
                .collect(),
        }
    }
}

// ── Error payload ───────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&ExtractError> for ErrorResponse {
    fn from(e: &ExtractError) -> Self {
        ErrorResponse {
            error: e.to_string(),
        }
    }
}

// ── Health payload ──────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub backends: Vec<String>,
}
