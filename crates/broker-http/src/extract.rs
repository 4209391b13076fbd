//! Request-shape concerns that don't belong in the broker: session id
//! resolution, ttl parsing, and admin auth (§4.5, §6).

use axum::http::HeaderMap;
use pollmq_proto::TtlValue;

use crate::config::AppConfig;

/// Resolve a session id from, in order: the `Session-Id` header, a body
/// field, then (for GETs) a query parameter.
///
/// Each source is optional at the call site — pass `None` for whichever
/// doesn't apply to the endpoint's request shape.
pub fn resolve_session_id(
	headers: &HeaderMap,
	body_session_id: Option<&str>,
	query_session_id: Option<&str>,
) -> Option<String> {
	headers
		.get("Session-Id")
		.and_then(|v| v.to_str().ok())
		.map(str::to_string)
		.or_else(|| body_session_id.map(str::to_string))
		.or_else(|| query_session_id.map(str::to_string))
}

/// Parse a publish's `ttl` field per the facade's lenient rule: integers and
/// digit-only strings are accepted; negative values become the never-expire
/// sentinel; a missing field, or one that is neither an integer nor a string
/// of digits, falls back to the default ttl.
///
/// `str.isdigit()` (the reference's ground truth, `original_source/httpmq`)
/// never matches a leading `-`, so a negative ttl can only arrive as a JSON
/// integer — a string `"-1"` is not a digit string and is treated as
/// unparseable, not as a negative number. This never fails the request
/// (§4.2: publish never fails in-process); there is no invalid-ttl error
/// response.
pub fn resolve_ttl(ttl: Option<&TtlValue>, config: &AppConfig) -> u64 {
	let raw: i64 = match ttl {
		None => return config.default_ttl,
		Some(TtlValue::Int(n)) => *n,
		Some(TtlValue::Text(s)) => {
			let s = s.trim();
			if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
				return config.default_ttl;
			}
			match s.parse() {
				Ok(n) => n,
				Err(_) => return config.default_ttl,
			}
		}
	};
	if raw < 0 {
		config.never_expire_ttl
	} else {
		raw as u64
	}
}

/// Whether `key`/headers authorize an admin request: a query `key`, an
/// `Authorization` header, or an `Auth-Key` header — any match authorizes
/// (§4.5). Checked in that order; the first present value must match.
pub fn is_admin_authorized(headers: &HeaderMap, query_key: Option<&str>, config: &AppConfig) -> bool {
	if let Some(key) = query_key {
		return key == config.auth_key;
	}
	if let Some(auth) = headers.get(axum::http::header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
		return auth == config.auth_key;
	}
	if let Some(auth_key) = headers.get("Auth-Key").and_then(|v| v.to_str().ok()) {
		return auth_key == config.auth_key;
	}
	false
}
