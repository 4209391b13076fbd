//! Mapping from broker/request outcomes to HTTP status codes (§7).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Every way a request can fail to produce a success response.
///
/// Broker operations themselves never raise exceptions (§7) — this enum
/// exists purely at the HTTP facade, translating a boolean/`None` result
/// plus request-shape validation into a status code and JSON body.
#[derive(Debug, Error)]
pub enum ApiError {
	/// Caller presented a `session_id` the broker has no record of, on an
	/// endpoint where that is a 400 (subscribe/unsubscribe/acknowledge).
	#[error("unknown session")]
	UnknownSessionBadRequest,

	/// Same condition, on an endpoint where it is a 404 (receive).
	#[error("unknown session")]
	UnknownSessionNotFound,

	/// `subscribe` rejected because the session is already subscribed.
	#[error("already subscribed")]
	AlreadySubscribed,

	/// `unsubscribe`/`acknowledge` rejected because the session is not
	/// subscribed to the topic, or the message was not found under it.
	#[error("not subscribed")]
	NotSubscribed,

	/// A required field was missing from the request body.
	#[error("missing required field: {0}")]
	MissingField(&'static str),

	/// Admin key did not match `AUTH_KEY`.
	#[error("unauthorized")]
	Unauthorized,
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let status = match self {
			ApiError::UnknownSessionBadRequest => StatusCode::BAD_REQUEST,
			ApiError::UnknownSessionNotFound => StatusCode::NOT_FOUND,
			ApiError::AlreadySubscribed => StatusCode::NOT_FOUND,
			ApiError::NotSubscribed => StatusCode::NOT_FOUND,
			ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
			ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
		};
		let body = Json(json!({ "error": self.to_string() }));
		(status, body).into_response()
	}
}
