use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use pollmq_proto::{AdminMessage, AdminMessagesResponse, TopicsResponse};
use serde::Deserialize;

use crate::error::ApiError;
use crate::extract::is_admin_authorized;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AdminAuthQuery {
	#[serde(default)]
	pub key: Option<String>,
}

/// `GET /api/admin/topics` — 401 without a matching key (§6).
pub async fn admin_topics(
	State(state): State<AppState>,
	headers: HeaderMap,
	Query(query): Query<AdminAuthQuery>,
) -> Result<Json<TopicsResponse>, ApiError> {
	if !is_admin_authorized(&headers, query.key.as_deref(), &state.config) {
		return Err(ApiError::Unauthorized);
	}
	Ok(Json(TopicsResponse {
		topics: state.broker.get_topics(),
	}))
}

/// `GET /api/admin/messages/<topic>` — topic may itself contain `/`; axum's
/// wildcard capture keeps it as one segment (§6).
pub async fn admin_messages(
	State(state): State<AppState>,
	Path(topic): Path<String>,
	headers: HeaderMap,
	Query(query): Query<AdminAuthQuery>,
) -> Result<Json<AdminMessagesResponse>, ApiError> {
	if !is_admin_authorized(&headers, query.key.as_deref(), &state.config) {
		return Err(ApiError::Unauthorized);
	}
	let messages = state.broker.get_messages(&topic);
	Ok(Json(AdminMessagesResponse {
		messages: messages.iter().map(AdminMessage::from).collect(),
	}))
}
