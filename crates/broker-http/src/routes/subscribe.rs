use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use pollmq_core::SessionId;
use pollmq_proto::{SessionScopedRequest, StatusResponse, TopicsResponse};
use serde::Deserialize;

use crate::error::ApiError;
use crate::extract::resolve_session_id;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SessionQuery {
	#[serde(default)]
	pub session_id: Option<String>,
}

/// `GET /api/subscribe` — list the topics the caller's session is
/// subscribed to. 400 if the session is unknown (§6).
pub async fn list_subscriptions(
	State(state): State<AppState>,
	headers: HeaderMap,
	Query(query): Query<SessionQuery>,
) -> Result<Json<TopicsResponse>, ApiError> {
	let session_id = resolve_session_id(&headers, None, query.session_id.as_deref())
		.ok_or(ApiError::MissingField("session_id"))?;
	let topics = state
		.broker
		.session_topics(&SessionId::from(session_id))
		.ok_or(ApiError::UnknownSessionBadRequest)?;
	Ok(Json(TopicsResponse { topics }))
}

/// `POST /api/subscribe/<topic>` — 400 unknown session, 404 already
/// subscribed (§6).
pub async fn subscribe(
	State(state): State<AppState>,
	Path(topic): Path<String>,
	headers: HeaderMap,
	Json(body): Json<SessionScopedRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
	let session_id =
		resolve_session_id(&headers, body.session_id.as_deref(), None).ok_or(ApiError::MissingField("session_id"))?;
	let session_id = SessionId::from(session_id);

	if !state.broker.has_session(&session_id) {
		return Err(ApiError::UnknownSessionBadRequest);
	}
	if !state.broker.subscribe(&session_id, &topic) {
		return Err(ApiError::AlreadySubscribed);
	}
	Ok(Json(StatusResponse::subscribed()))
}

/// `DELETE /api/subscribe/<topic>` — 404 not subscribed, which also covers a
/// missing or unknown session: `message_queue.py::unsubscribe` has no
/// missing-session special case, it just falls through to the same
/// not-subscribed path as any other session it has no record of (§6).
pub async fn unsubscribe(
	State(state): State<AppState>,
	Path(topic): Path<String>,
	headers: HeaderMap,
	Json(body): Json<SessionScopedRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
	let Some(session_id) = resolve_session_id(&headers, body.session_id.as_deref(), None) else {
		return Err(ApiError::NotSubscribed);
	};
	let session_id = SessionId::from(session_id);

	if !state.broker.unsubscribe(&session_id, &topic) {
		return Err(ApiError::NotSubscribed);
	}
	Ok(Json(StatusResponse::success()))
}
