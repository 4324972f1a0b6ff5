/// Startup-time configuration for the extraction core.
///
/// Read once before the registry is built; nothing here is consulted again
/// after process start.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Backend names excluded from the registry, matched case-insensitively
    /// against [`crate::PdfBackend::name`].
    pub disabled_backends: Vec<String>,
}

impl Config {
    /// Build a config from the environment.
    ///
    /// `PAGESIFT_DISABLED_BACKENDS` is a comma-separated list of backend
    /// names, e.g. `PAGESIFT_DISABLED_BACKENDS=mupdf,lopdf`.
    pub fn from_env() -> Self {
        let disabled_backends = std::env::var("PAGESIFT_DISABLED_BACKENDS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self { disabled_backends }
    }

    pub fn is_disabled(&self, name: &str) -> bool {
        self.disabled_backends
            .iter()
            .any(|d| d.eq_ignore_ascii_case(name))
    }
}
