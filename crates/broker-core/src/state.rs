//! The broker's single authoritative in-memory store.
//!
//! # Mental model
//!
//! - [`BrokerState`] owns two maps — `sessions` and `topic_messages` — behind
//!   one [`std::sync::Mutex`]. Every operation below acquires that lock for
//!   its full duration and releases it before returning; nothing here ever
//!   suspends or performs I/O while holding it (§5).
//! - Messages and sessions are created only by [`BrokerState::publish`] and
//!   [`BrokerState::register`], and destroyed only by [`BrokerState::expire`]
//!   (plus the bookkeeping-only removals in `unsubscribe`/`acknowledge`
//!   described on [`crate::session::Session`]).
//! - `receive` is a filter over the live per-topic set, not a cursor: a
//!   subscription sees every unexpired, unacknowledged message under its
//!   topics regardless of when the subscription was created (§4.3).
//!
//! # Invariants
//!
//! 1. `message_id` is unique for the process lifetime — enforced by
//!    generating it fresh, once, per [`BrokerState::publish`] call.
//! 2. A topic with no publishes yet is not an error: `get_topics`,
//!    `get_messages`, and `receive` all treat a missing topic as empty,
//!    matching the Python reference's `defaultdict(set)`.
//! 3. `receive` returns `None` (not `Some(vec![])`) for an unknown session id
//!    so the HTTP facade can tell "no messages" from "no such session" apart
//!    (§7).
//! 4. Results from `receive`/`get_messages` are sorted newest-first by
//!    publish timestamp, message-id-ascending on ties
//!    ([`crate::message::by_publish_order_desc`]).

use std::collections::HashMap;
use std::sync::Mutex;

use crate::clock::{Clock, SystemClock};
use crate::config::BrokerConfig;
use crate::ids::{IdGenerator, MessageId, SessionId, UuidGenerator};
use crate::message::{by_publish_order_desc, Message};
use crate::session::Session;

#[derive(Default)]
struct Inner {
	sessions: HashMap<SessionId, Session>,
	topic_messages: HashMap<String, HashMap<MessageId, Message>>,
}

/// Outcome of a single [`BrokerState::expire`] pass, for logging and tests.
#[derive(Debug, Default, Clone)]
pub struct ExpiryReport {
	/// Sessions removed for being idle past the session TTL.
	pub expired_sessions: Vec<SessionId>,
	/// Messages removed for having passed their `expire_ts`.
	pub expired_messages: Vec<MessageId>,
}

/// The broker's authoritative, concurrency-safe in-memory state.
pub struct BrokerState {
	inner: Mutex<Inner>,
	config: BrokerConfig,
	clock: Box<dyn Clock>,
	message_ids: Box<dyn IdGenerator>,
}

impl BrokerState {
	/// Create broker state with default configuration, real clock, and a
	/// UUIDv4 message id generator.
	pub fn new(config: BrokerConfig) -> Self {
		Self::with_parts(config, Box::new(SystemClock), Box::new(UuidGenerator))
	}

	/// Create broker state with an injected clock and id generator, for
	/// deterministic tests.
	pub fn with_parts(config: BrokerConfig, clock: Box<dyn Clock>, message_ids: Box<dyn IdGenerator>) -> Self {
		Self {
			inner: Mutex::new(Inner::default()),
			config,
			clock,
			message_ids,
		}
	}

	fn now(&self) -> u64 {
		self.clock.now()
	}

	/// Create a new session with the given id and install it, replacing any
	/// existing session of the same id with no acknowledgement history
	/// retained (§4.2: acceptable since ids are generated fresh by the HTTP
	/// facade).
	pub fn register(&self, session_id: SessionId) -> SessionId {
		let now = self.now();
		let mut inner = self.inner.lock().unwrap();
		inner
			.sessions
			.insert(session_id.clone(), Session::new(session_id.clone(), now));
		session_id
	}

	/// Whether a session with this id is currently registered.
	pub fn has_session(&self, session_id: &SessionId) -> bool {
		self.inner.lock().unwrap().sessions.contains_key(session_id)
	}

	/// List the topics `session_id` is subscribed to, or `None` if the
	/// session is unknown.
	pub fn session_topics(&self, session_id: &SessionId) -> Option<Vec<String>> {
		let inner = self.inner.lock().unwrap();
		let session = inner.sessions.get(session_id)?;
		Some(session.subscribed_topics.iter().cloned().collect())
	}

	/// Publish `data` under `topic` with the given `ttl` (seconds). Always
	/// succeeds; a topic with no prior entries is created implicitly.
	///
	/// Does not touch any session's `last_active` (§9 open question 3):
	/// publishing does not keep a session alive, only
	/// subscribe/receive/acknowledge do.
	pub fn publish(&self, topic: impl Into<String>, data: serde_json::Value, ttl: u64) -> Message {
		let topic = topic.into();
		let now = self.now();
		let message_id = MessageId(self.message_ids.generate());
		let message = Message::new(message_id.clone(), topic.clone(), data, now, ttl);

		let mut inner = self.inner.lock().unwrap();
		inner
			.topic_messages
			.entry(topic)
			.or_default()
			.insert(message_id, message.clone());
		message
	}

	/// Subscribe `session_id` to `topic`.
	///
	/// Returns `true` only if the session exists and the topic was newly
	/// added. Use [`Self::has_session`] first to tell "unknown session" from
	/// "already subscribed" apart, as the HTTP facade does (§6).
	pub fn subscribe(&self, session_id: &SessionId, topic: &str) -> bool {
		let now = self.now();
		let mut inner = self.inner.lock().unwrap();
		let Some(session) = inner.sessions.get_mut(session_id) else {
			return false;
		};
		let added = session.subscribe(topic);
		if added {
			session.refresh(now);
		}
		added
	}

	/// Unsubscribe `session_id` from `topic`. Returns `true` only on a real
	/// removal; `false` if the session is unknown or was not subscribed.
	///
	/// Does not prune the session's acknowledgement set for the topic (§9
	/// open question 2).
	pub fn unsubscribe(&self, session_id: &SessionId, topic: &str) -> bool {
		let now = self.now();
		let mut inner = self.inner.lock().unwrap();
		let Some(session) = inner.sessions.get_mut(session_id) else {
			return false;
		};
		let removed = session.unsubscribe(topic);
		if removed {
			session.refresh(now);
		}
		removed
	}

	/// Acknowledge `message_id` under `topic` for `session_id`.
	///
	/// Accepted only if the session exists, is subscribed to `topic`, and
	/// the message still exists under that topic. Idempotent: acknowledging
	/// the same pair twice still returns `true`.
	pub fn acknowledge(&self, session_id: &SessionId, topic: &str, message_id: &MessageId) -> bool {
		let now = self.now();
		let mut inner = self.inner.lock().unwrap();

		let message_exists = inner
			.topic_messages
			.get(topic)
			.is_some_and(|messages| messages.contains_key(message_id));
		if !message_exists {
			return false;
		}

		let Some(session) = inner.sessions.get_mut(session_id) else {
			return false;
		};
		let accepted = session.acknowledge(topic, message_id.clone());
		if !accepted {
			return false;
		}
		session.refresh(now);

		// Safe: message_exists was just checked under the same lock hold.
		if let Some(messages) = inner.topic_messages.get_mut(topic) {
			if let Some(message) = messages.get_mut(message_id) {
				message.clients_acknowledged.insert(session_id.clone());
			}
		}
		true
	}

	/// Return every unacknowledged, unexpired message visible to
	/// `session_id`'s current subscriptions, newest-first.
	///
	/// Returns `None` if the session is unknown, so callers can distinguish
	/// "no session" from "no messages" (§7). Refreshes the session's
	/// activity timestamp on success.
	pub fn receive(&self, session_id: &SessionId) -> Option<Vec<Message>> {
		let now = self.now();
		let mut inner = self.inner.lock().unwrap();
		let session = inner.sessions.get(session_id)?.clone();

		let mut out = Vec::new();
		for topic in &session.subscribed_topics {
			let Some(messages) = inner.topic_messages.get(topic) else {
				continue;
			};
			for message in messages.values() {
				if !session.acknowledged_messages.contains(&message.message_id) {
					out.push(message.clone());
				}
			}
		}
		out.sort_by(by_publish_order_desc);

		if let Some(session) = inner.sessions.get_mut(session_id) {
			session.refresh(now);
		}
		Some(out)
	}

	/// Every topic currently present, in unspecified order.
	pub fn get_topics(&self) -> Vec<String> {
		self.inner.lock().unwrap().topic_messages.keys().cloned().collect()
	}

	/// All messages under `topic`, newest-first. An unknown topic yields an
	/// empty list rather than an error (admin-only; §4.2).
	pub fn get_messages(&self, topic: &str) -> Vec<Message> {
		let inner = self.inner.lock().unwrap();
		let mut messages: Vec<Message> = inner
			.topic_messages
			.get(topic)
			.map(|m| m.values().cloned().collect())
			.unwrap_or_default();
		messages.sort_by(by_publish_order_desc);
		messages
	}

	/// Reconcile all three TTL clocks against the current wall time (§4.4).
	///
	/// 1. Sweeps sessions idle past `session_ttl_secs`, discarding their
	///    subscriptions and acknowledgement sets.
	/// 2. Sweeps messages whose `expire_ts` has passed, per topic.
	/// 3. Compacts every surviving session's `acknowledged_messages` by
	///    removing ids that were just swept in step 2 — by message id, not
	///    by topic name (§9 open question 1: the Python reference's
	///    `difference_update` against a set of *topic* strings can never
	///    match entries that are message ids, so it never actually
	///    compacts; this is treated as a bug and fixed here).
	pub fn expire(&self) -> ExpiryReport {
		let now = self.now();
		let mut inner = self.inner.lock().unwrap();
		let mut report = ExpiryReport::default();

		let expired_sessions: Vec<SessionId> = inner
			.sessions
			.iter()
			.filter(|(_, session)| now.saturating_sub(session.last_active) > self.config.session_ttl_secs)
			.map(|(id, _)| id.clone())
			.collect();
		for session_id in &expired_sessions {
			inner.sessions.remove(session_id);
		}
		report.expired_sessions = expired_sessions;

		let mut expired_messages = Vec::new();
		for messages in inner.topic_messages.values_mut() {
			let dead: Vec<MessageId> = messages
				.values()
				.filter(|m| m.is_expired(now))
				.map(|m| m.message_id.clone())
				.collect();
			for id in &dead {
				messages.remove(id);
			}
			expired_messages.extend(dead);
		}
		report.expired_messages = expired_messages;

		if !report.expired_messages.is_empty() {
			for session in inner.sessions.values_mut() {
				for id in &report.expired_messages {
					session.acknowledged_messages.remove(id);
				}
			}
		}

		if !report.expired_sessions.is_empty() || !report.expired_messages.is_empty() {
			tracing::debug!(
				expired_sessions = report.expired_sessions.len(),
				expired_messages = report.expired_messages.len(),
				"swept expired state"
			);
		}

		report
	}
}
