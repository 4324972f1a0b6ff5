use std::sync::Arc;

use crate::backend::PdfBackend;
use crate::config::Config;

/// The fixed, ordered set of extraction backends available to this process.
///
/// Built exactly once at startup: each candidate is probed a single time,
/// and a backend whose probe fails (or that is disabled by configuration)
/// is excluded for the remainder of the process lifetime — it is never
/// re-probed per request. The order of `candidates` is the priority order
/// and is never changed afterwards.
pub struct BackendRegistry {
    backends: Vec<Arc<dyn PdfBackend>>,
}

impl BackendRegistry {
    pub fn new(candidates: Vec<Arc<dyn PdfBackend>>, config: &Config) -> Self {
        let mut backends = Vec::with_capacity(candidates.len());

        for backend in candidates {
            if config.is_disabled(backend.name()) {
                tracing::info!(backend = backend.name(), "backend disabled by configuration");
                continue;
            }
            match backend.probe() {
                Ok(()) => {
                    tracing::info!(backend = backend.name(), "backend available");
                    backends.push(backend);
                }
                Err(e) => {
                    tracing::warn!(
                        backend = backend.name(),
                        error = %e,
                        "backend unavailable, excluded from registry"
                    );
                }
            }
        }

        Self { backends }
    }

    /// The available backends, in priority order.
    pub fn available(&self) -> &[Arc<dyn PdfBackend>] {
        &self.backends
    }

    pub fn names(&self) -> Vec<String> {
        self.backends.iter().map(|b| b.name().to_string()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::{MockBackend, MockResponse};

    fn pages(texts: &[&str]) -> MockResponse {
        MockResponse::Pages(texts.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn preserves_candidate_order() {
        let registry = BackendRegistry::new(
            vec![
                Arc::new(MockBackend::new("first", pages(&["a"]))),
                Arc::new(MockBackend::new("second", pages(&["b"]))),
                Arc::new(MockBackend::new("third", pages(&["c"]))),
            ],
            &Config::default(),
        );
        assert_eq!(registry.names(), vec!["first", "second", "third"]);
    }

    #[test]
    fn excludes_backends_with_failing_probe() {
        let registry = BackendRegistry::new(
            vec![
                Arc::new(MockBackend::unavailable("broken")),
                Arc::new(MockBackend::new("working", pages(&["a"]))),
            ],
            &Config::default(),
        );
        assert_eq!(registry.names(), vec!["working"]);
    }

    #[test]
    fn excludes_disabled_backends_case_insensitively() {
        let config = Config {
            disabled_backends: vec!["First".into()],
        };
        let registry = BackendRegistry::new(
            vec![
                Arc::new(MockBackend::new("first", pages(&["a"]))),
                Arc::new(MockBackend::new("second", pages(&["b"]))),
            ],
            &config,
        );
        assert_eq!(registry.names(), vec!["second"]);
    }

    #[test]
    fn empty_registry_is_reported() {
        let registry = BackendRegistry::new(Vec::new(), &Config::default());
        assert!(registry.is_empty());
        assert!(registry.available().is_empty());
    }
}
