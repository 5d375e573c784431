use std::sync::OnceLock;

/// Ensure tracing is initialized only once across the application
static TRACING: OnceLock<()> = OnceLock::new();

/// Initialize tracing once, safe to call multiple times
pub fn init_tracing_once() {
    TRACING.get_or_init(|| {
        let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
            .with_target(false)
            .compact()
            .try_init();
        tracing::debug!("tracing initialized");
    });
}
