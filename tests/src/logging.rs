use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

static LOGGING: OnceLock<()> = OnceLock::new();

/// Installs a test-writer subscriber once per test binary.
///
/// Filter with `RUST_LOG`, e.g. `RUST_LOG=simsci_core=debug`.
pub fn init() {
    LOGGING.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
