use pagesift_core::Coordinator;

/// Shared application state: the coordinator over the startup-time backend
/// registry. Immutable after construction, so concurrent requests share it
/// without locking.
pub struct AppState {
    pub coordinator: Coordinator,
}
