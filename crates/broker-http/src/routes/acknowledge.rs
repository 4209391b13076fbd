use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use pollmq_core::{MessageId, SessionId};
use pollmq_proto::{AcknowledgeRequest, StatusResponse};

use crate::error::ApiError;
use crate::extract::resolve_session_id;
use crate::state::AppState;

/// `POST /api/acknowledge` — 400 missing field, 404 not found (topic not
/// subscribed or message unknown under it) (§6).
pub async fn acknowledge(
	State(state): State<AppState>,
	headers: HeaderMap,
	Json(body): Json<AcknowledgeRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
	let session_id =
		resolve_session_id(&headers, body.session_id.as_deref(), None).ok_or(ApiError::MissingField("session_id"))?;
	let topic = body.topic.ok_or(ApiError::MissingField("topic"))?;
	let message_id = body.message_id.ok_or(ApiError::MissingField("message_id"))?;

	let accepted = state
		.broker
		.acknowledge(&SessionId::from(session_id), &topic, &MessageId::from(message_id));
	if !accepted {
		return Err(ApiError::NotSubscribed);
	}
	Ok(Json(StatusResponse::success()))
}
