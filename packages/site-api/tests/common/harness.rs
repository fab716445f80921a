//! Test harness wiring SiteApi to recording mocks.

use std::sync::Arc;

use site_api::kernel::{MockBackend, MockNotifier};
use site_api::SiteApi;

pub struct TestHarness {
    pub api: SiteApi,
    pub backend: Arc<MockBackend>,
    pub notifier: Arc<MockNotifier>,
}

impl TestHarness {
    /// Build a harness around a preconfigured backend.
    pub fn with_backend(backend: MockBackend) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let backend = Arc::new(backend);
        let notifier = Arc::new(MockNotifier::new());
        let api = SiteApi::new(backend.clone(), notifier.clone());

        Self {
            api,
            backend,
            notifier,
        }
    }
}
