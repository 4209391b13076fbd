//! JSON wire shapes for the broker's HTTP contract.
//!
//! Everything here is a snapshot: constructed from a [`pollmq_core::Message`]
//! (or similar) without holding the broker's lock, then serialized. None of
//! these types round-trip back into core records — the HTTP facade only ever
//! builds them from live state, never parses them back.

use pollmq_core::Message;
use serde::{Deserialize, Serialize};

/// `{message_id, topic, data, timestamp, ttl}` — what subscribers see.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicMessage {
	pub message_id: String,
	pub topic: String,
	pub data: serde_json::Value,
	pub timestamp: u64,
	pub ttl: u64,
}

impl From<&Message> for PublicMessage {
	fn from(message: &Message) -> Self {
		Self {
			message_id: message.message_id.as_str().to_string(),
			topic: message.topic.clone(),
			data: message.data.clone(),
			timestamp: message.timestamp,
			ttl: message.ttl,
		}
	}
}

/// Public fields plus `expire_ts` and `clients_acknowledged` — admin only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminMessage {
	pub message_id: String,
	pub topic: String,
	pub data: serde_json::Value,
	pub timestamp: u64,
	pub ttl: u64,
	pub expire_ts: u64,
	pub clients_acknowledged: Vec<String>,
}

impl From<&Message> for AdminMessage {
	fn from(message: &Message) -> Self {
		Self {
			message_id: message.message_id.as_str().to_string(),
			topic: message.topic.clone(),
			data: message.data.clone(),
			timestamp: message.timestamp,
			ttl: message.ttl,
			expire_ts: message.expire_ts,
			clients_acknowledged: message
				.clients_acknowledged
				.iter()
				.map(|id| id.as_str().to_string())
				.collect(),
		}
	}
}

/// `POST /api/register` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
	pub session_id: String,
}

/// `POST /api/publish/<topic>` request body. `data` is required; `ttl` is an
/// optional integer-or-digit-string per the HTTP facade's parsing rule.
#[derive(Debug, Clone, Deserialize)]
pub struct PublishRequest {
	pub data: serde_json::Value,
	#[serde(default)]
	pub ttl: Option<TtlValue>,
}

/// Accepts either a JSON integer or a string of digits for `ttl`, matching
/// the reference's lenient parsing (§4.5).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TtlValue {
	Int(i64),
	Text(String),
}

/// `POST /api/publish/<topic>` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishResponse {
	pub status: &'static str,
	pub message_id: String,
	pub timestamp: u64,
}

/// `GET /api/subscribe` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicsResponse {
	pub topics: Vec<String>,
}

/// Generic `{status: "..."}` body used by subscribe/unsubscribe/acknowledge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
	pub status: &'static str,
}

impl StatusResponse {
	pub fn success() -> Self {
		Self { status: "success" }
	}

	pub fn subscribed() -> Self {
		Self { status: "subscribed" }
	}
}

/// `GET /api/receive` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiveResponse {
	pub messages: Vec<PublicMessage>,
}

/// `GET /api/admin/messages/<topic>` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminMessagesResponse {
	pub messages: Vec<AdminMessage>,
}

/// Body shared by subscribe, unsubscribe, and acknowledge requests; each
/// field is read only if the corresponding endpoint needs it (§6: session id
/// may also arrive via header or query, so this struct's `session_id` is
/// optional at the type level even though individual endpoints require it).
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SessionScopedRequest {
	#[serde(default)]
	pub session_id: Option<String>,
}

/// `POST /api/acknowledge` request body.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AcknowledgeRequest {
	#[serde(default)]
	pub session_id: Option<String>,
	#[serde(default)]
	pub topic: Option<String>,
	#[serde(default)]
	pub message_id: Option<String>,
}
