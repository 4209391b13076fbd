//! Per-client session state: subscriptions, acknowledgements, activity.

use std::collections::HashSet;

use crate::ids::{MessageId, SessionId};

/// A server-tracked client identity with its own subscription set and
/// acknowledgement record.
///
/// These methods only touch the session's own fields — they never reach into
/// the broker's topic map. [`crate::state::BrokerState`] combines them with
/// topic/message lookups to implement the full operations of §4.2.
#[derive(Debug, Clone)]
pub struct Session {
	/// Opaque unique id.
	pub session_id: SessionId,
	/// Topics this session currently wants delivery for.
	pub subscribed_topics: HashSet<String>,
	/// Messages this session has already acknowledged.
	pub acknowledged_messages: HashSet<MessageId>,
	/// Seconds-since-epoch of the last activity that refreshed this session.
	pub last_active: u64,
}

impl Session {
	/// Create a new session, active as of `now`.
	pub fn new(session_id: SessionId, now: u64) -> Self {
		Self {
			session_id,
			subscribed_topics: HashSet::new(),
			acknowledged_messages: HashSet::new(),
			last_active: now,
		}
	}

	/// Refresh the activity timestamp. Called by subscribe/unsubscribe,
	/// receive, and acknowledge — never by publish (§9 open question 3).
	pub fn refresh(&mut self, now: u64) {
		self.last_active = now;
	}

	/// Subscribe to `topic`. Returns `false` if already subscribed (no-op).
	pub fn subscribe(&mut self, topic: &str) -> bool {
		if self.subscribed_topics.contains(topic) {
			return false;
		}
		self.subscribed_topics.insert(topic.to_string());
		true
	}

	/// Unsubscribe from `topic`. Returns `false` if not subscribed (no-op).
	///
	/// Does not prune `acknowledged_messages` for the topic (§9 open
	/// question 2): stale acknowledgements are harmless since the messages
	/// they reference are eventually swept.
	pub fn unsubscribe(&mut self, topic: &str) -> bool {
		self.subscribed_topics.remove(topic)
	}

	/// Acknowledge `message_id` under `topic_name`. Rejected (returns
	/// `false`) if the session is not subscribed to the topic. Idempotent:
	/// acknowledging the same message twice still returns `true`.
	pub fn acknowledge(&mut self, topic_name: &str, message_id: MessageId) -> bool {
		if !self.subscribed_topics.contains(topic_name) {
			return false;
		}
		self.acknowledged_messages.insert(message_id);
		true
	}
}
