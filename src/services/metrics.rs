//! Prometheus exporter wiring.
//!
//! The recorder is installed once at startup; handlers and middleware record
//! through the `metrics` macros and `/metrics` renders the accumulated state.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the global Prometheus recorder. Call once from `main` before the
/// server starts; a second call panics.
pub fn init_metrics() {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    if METRICS_HANDLE.set(handle).is_err() {
        panic!("metrics recorder already initialized");
    }
}

/// Render the current metrics in Prometheus text exposition format.
///
/// Safe to call before `init_metrics`; integration-test servers skip recorder
/// installation and get the placeholder line instead.
pub fn get_metrics() -> String {
    match METRICS_HANDLE.get() {
        Some(handle) => handle.render(),
        None => "# metrics recorder not initialized\n".to_string(),
    }
}
