//! Backend registry and fallback coordinator for per-page PDF text extraction.
//!
//! A fixed, priority-ordered set of extraction backends is probed once at
//! process start ([`BackendRegistry`]); each request walks the available
//! backends in order and returns the first complete per-page result
//! ([`Coordinator`]).

pub mod backend;
pub mod config;
pub mod coordinator;
pub mod document;
pub mod registry;

pub use backend::{BackendError, PdfBackend};
pub use config::Config;
pub use coordinator::{Coordinator, ExtractError};
pub use document::{ExtractedDocument, Page};
pub use registry::BackendRegistry;
