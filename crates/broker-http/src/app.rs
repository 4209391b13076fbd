//! Router assembly, kept separate from `main` so integration tests can build
//! the same app without binding a real socket.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use pollmq_core::BrokerState;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::routes;
use crate::state::AppState;

/// Build the full axum [`Router`] for the broker's HTTP surface (§6).
pub fn build_router(broker: Arc<BrokerState>, config: AppConfig) -> Router {
	let state = AppState::new(broker, config);

	Router::new()
		.route("/api/register", post(routes::register))
		.route("/api/publish/{*topic}", post(routes::publish))
		.route("/api/subscribe", get(routes::list_subscriptions))
		.route(
			"/api/subscribe/{*topic}",
			post(routes::subscribe).delete(routes::unsubscribe),
		)
		.route("/api/receive", get(routes::receive))
		.route("/api/acknowledge", post(routes::acknowledge))
		.route("/api/admin/topics", get(routes::admin_topics))
		.route("/api/admin/messages/{*topic}", get(routes::admin_messages))
		.route("/healthz", get(routes::healthz))
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}
