pub mod builders;
pub mod fakes;
#[cfg(unix)]
pub mod stub;

use std::future::Future;
use std::sync::Once;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

/// Upper bound for any single awaited step in a test.
pub const TEST_DEADLINE: Duration = Duration::from_secs(5);

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once per test binary.
///
/// Filter comes from `VULA_BRIDGE_LOG` (same variable as the binary), falling
/// back to `debug` so failing tests show every process event.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_env("VULA_BRIDGE_LOG")
            .unwrap_or_else(|_| EnvFilter::new("vula_bridge=debug"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Await `fut`, failing the test if it takes longer than [`TEST_DEADLINE`].
///
/// Keeps a hung stub process from stalling the whole suite.
pub async fn with_timeout<F: Future>(fut: F) -> F::Output {
    match tokio::time::timeout(TEST_DEADLINE, fut).await {
        Ok(out) => out,
        Err(_) => panic!("test step did not finish within {TEST_DEADLINE:?}"),
    }
}
