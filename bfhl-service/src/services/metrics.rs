//! Prometheus exposition for the `metrics` facade.

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::sync::{Mutex, OnceLock, PoisonError};

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

// Serializes recorder installation; the global recorder can only be set once.
static INSTALL_LOCK: Mutex<()> = Mutex::new(());

/// Install the global Prometheus recorder. Calling it again is a no-op.
pub fn init_metrics() -> Result<(), BuildError> {
    let _guard = INSTALL_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    if METRICS_HANDLE.get().is_some() {
        return Ok(());
    }

    let handle = PrometheusBuilder::new().install_recorder()?;
    let _ = METRICS_HANDLE.set(handle);
    Ok(())
}

/// Current metrics in text format, if the recorder is installed.
pub fn get_metrics() -> Option<String> {
    METRICS_HANDLE.get().map(PrometheusHandle::render)
}
