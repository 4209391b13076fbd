//! The immutable-after-publish message record.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use crate::ids::{MessageId, SessionId};

/// A single published item and its per-session acknowledgement bookkeeping.
///
/// Identity (equality, hashing) is defined solely by [`Message::message_id`];
/// everything else may vary without affecting whether two handles refer to
/// "the same" message.
#[derive(Debug, Clone)]
pub struct Message {
	/// Opaque unique id assigned at publish.
	pub message_id: MessageId,
	/// The topic this was published under.
	pub topic: String,
	/// Opaque payload; the broker never interprets this.
	pub data: serde_json::Value,
	/// Seconds-since-epoch at publish.
	pub timestamp: u64,
	/// Time-to-live in seconds (may be a "never expire" sentinel chosen by the caller).
	pub ttl: u64,
	/// `timestamp + ttl`, compared against wall clock for expiry.
	pub expire_ts: u64,
	/// Sessions that have acknowledged this message.
	pub clients_acknowledged: HashSet<SessionId>,
}

impl Message {
	/// Construct a new message with fresh acknowledgement state.
	pub fn new(message_id: MessageId, topic: String, data: serde_json::Value, timestamp: u64, ttl: u64) -> Self {
		Self {
			message_id,
			topic,
			data,
			timestamp,
			ttl,
			expire_ts: timestamp.saturating_add(ttl),
			clients_acknowledged: HashSet::new(),
		}
	}

	/// Whether this message has passed its expiry time as of `now`.
	pub fn is_expired(&self, now: u64) -> bool {
		self.expire_ts < now
	}
}

impl PartialEq for Message {
	fn eq(&self, other: &Self) -> bool {
		self.message_id == other.message_id
	}
}

impl Eq for Message {}

impl Hash for Message {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.message_id.hash(state);
	}
}

/// Comparator for "newest published first", tie-broken by `message_id` so
/// that sort order is stable across calls even when timestamps collide.
///
/// This is the order `receive` and `get_messages` return results in (§4.2,
/// §4.3); it is a free function rather than `Ord` on [`Message`] because
/// identity and display order are deliberately different relations.
pub fn by_publish_order_desc(a: &Message, b: &Message) -> Ordering {
	b.timestamp
		.cmp(&a.timestamp)
		.then_with(|| a.message_id.cmp(&b.message_id))
}
