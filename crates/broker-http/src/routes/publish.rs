use axum::extract::{Path, State};
use axum::Json;
use pollmq_proto::{PublishRequest, PublishResponse};

use crate::extract::resolve_ttl;
use crate::state::AppState;

/// `POST /api/publish/<topic>` — never fails in-process (§4.2); an absent or
/// unparseable `ttl` falls back to the default rather than rejecting the
/// request.
pub async fn publish(
	State(state): State<AppState>,
	Path(topic): Path<String>,
	Json(body): Json<PublishRequest>,
) -> Json<PublishResponse> {
	let ttl = resolve_ttl(body.ttl.as_ref(), &state.config);
	let message = state.broker.publish(topic, body.data, ttl);
	Json(PublishResponse {
		status: "success",
		message_id: message.message_id.to_string(),
		timestamp: message.timestamp,
	})
}
