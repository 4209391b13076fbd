use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;
use pollmq_core::SessionId;
use pollmq_proto::{PublicMessage, ReceiveResponse};
use serde::Deserialize;

use crate::error::ApiError;
use crate::extract::resolve_session_id;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SessionQuery {
	#[serde(default)]
	pub session_id: Option<String>,
}

/// `GET /api/receive` — runs the sweeper first so polls observe freshly
/// expired state (§4.4, §4.5), then returns every unacknowledged message on
/// the caller's subscribed topics, newest-first. 404 on unknown session,
/// distinguishing "no session" from "no messages" (§7).
pub async fn receive(
	State(state): State<AppState>,
	headers: HeaderMap,
	Query(query): Query<SessionQuery>,
) -> Result<Json<ReceiveResponse>, ApiError> {
	let session_id = resolve_session_id(&headers, None, query.session_id.as_deref())
		.ok_or(ApiError::UnknownSessionNotFound)?;

	state.broker.expire();

	let messages = state
		.broker
		.receive(&SessionId::from(session_id))
		.ok_or(ApiError::UnknownSessionNotFound)?;

	Ok(Json(ReceiveResponse {
		messages: messages.iter().map(PublicMessage::from).collect(),
	}))
}
