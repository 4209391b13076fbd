//! Shared application state handed to every axum handler via `Extension`.

use std::sync::Arc;

use pollmq_core::BrokerState;

use crate::config::AppConfig;

/// Everything a handler needs: the broker itself plus the facade's own
/// tunables (admin key, default/never-expire ttl). Cheap to clone — it's an
/// `Arc` and a small config struct.
#[derive(Clone)]
pub struct AppState {
	pub broker: Arc<BrokerState>,
	pub config: Arc<AppConfig>,
}

impl AppState {
	pub fn new(broker: Arc<BrokerState>, config: AppConfig) -> Self {
		Self {
			broker,
			config: Arc::new(config),
		}
	}
}
