use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use pagesift_core::backend::{LopdfBackend, PdfExtractBackend};
use pagesift_core::{BackendRegistry, Config, Coordinator, PdfBackend};
use pagesift_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("pagesift_core=info".parse()?)
                .add_directive("pagesift_web=info".parse()?),
        )
        .init();

    let config = Config::from_env();

    // Fixed priority order, fastest and most decode-capable first. Evaluated
    // exactly once; a backend that fails its probe here stays out of the
    // registry for the life of the process.
    let mut candidates: Vec<Arc<dyn PdfBackend>> = Vec::new();
    #[cfg(feature = "mupdf")]
    candidates.push(Arc::new(pagesift_mupdf::MupdfBackend::new()));
    candidates.push(Arc::new(PdfExtractBackend::new()));
    candidates.push(Arc::new(LopdfBackend::new()));

    let registry = BackendRegistry::new(candidates, &config);
    if registry.is_empty() {
        tracing::warn!("no extraction backend available; every request will fail with 501");
    } else {
        tracing::info!(backends = ?registry.names(), "extraction backends ready");
    }

    let state = Arc::new(AppState {
        coordinator: Coordinator::new(registry),
    });

    let max_upload_mb: usize = env_or("PAGESIFT_MAX_UPLOAD_MB", 100);
    let host = std::env::var("PAGESIFT_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env_or("PAGESIFT_PORT", 5000);

    let app = pagesift_web::app(state, max_upload_mb * 1024 * 1024);

    let addr = format!("{host}:{port}");
    tracing::info!("pagesift listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
