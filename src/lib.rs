pub mod core;
pub mod form;
pub mod providers;

use tracing_subscriber::EnvFilter;

use crate::core::errors::AppResult;
use form::controller::FormController;
use providers::presence_api::{ApiConfig, HttpPresenceApi};

fn log_filter_from_env() -> EnvFilter {
    let directives = std::env::var("PRESENSI_LOG").unwrap_or_else(|_| "info".to_string());
    EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global tracing subscriber, honoring `PRESENSI_LOG`.
/// Repeated calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter_from_env())
        .try_init();
}

/// Build a controller wired to the live HTTP endpoints.
pub fn connect(config: ApiConfig) -> AppResult<FormController<HttpPresenceApi>> {
    Ok(FormController::new(HttpPresenceApi::new(config)?))
}
