use serde_json::json;

use super::{register, test_state};
use crate::config::BrokerConfig;

#[test]
fn messages_past_their_ttl_are_swept_and_stop_being_delivered() {
	let (state, clock) = test_state(1_000, BrokerConfig::default());
	let subscriber = register(&state, "s1");
	state.subscribe(&subscriber, "weather");
	state.publish("weather", json!({"temp": 72}), 10);

	clock.advance(11);
	let report = state.expire();
	assert_eq!(report.expired_messages.len(), 1);
	assert_eq!(state.receive(&subscriber).unwrap(), vec![]);
	assert_eq!(state.get_messages("weather"), vec![]);
}

#[test]
fn messages_within_ttl_survive_a_sweep() {
	let (state, clock) = test_state(1_000, BrokerConfig::default());
	state.publish("weather", json!({}), 100);

	clock.advance(50);
	let report = state.expire();
	assert!(report.expired_messages.is_empty());
	assert_eq!(state.get_messages("weather").len(), 1);
}

#[test]
fn idle_sessions_past_the_session_ttl_are_removed() {
	let config = BrokerConfig {
		session_ttl_secs: 60,
	};
	let (state, clock) = test_state(1_000, config);
	let id = register(&state, "s1");

	clock.advance(61);
	let report = state.expire();
	assert_eq!(report.expired_sessions, vec![id.clone()]);
	assert!(!state.has_session(&id));
}

#[test]
fn activity_refreshes_a_session_and_prevents_expiry() {
	let config = BrokerConfig {
		session_ttl_secs: 60,
	};
	let (state, clock) = test_state(1_000, config);
	let id = register(&state, "s1");

	clock.advance(50);
	state.subscribe(&id, "weather"); // refreshes last_active

	clock.advance(50); // 100s since register, but only 50s since refresh
	let report = state.expire();
	assert!(report.expired_sessions.is_empty());
	assert!(state.has_session(&id));
}

#[test]
fn expiring_a_message_compacts_it_out_of_every_sessions_acknowledgement_set() {
	let (state, clock) = test_state(1_000, BrokerConfig::default());
	let subscriber = register(&state, "s1");
	state.subscribe(&subscriber, "weather");
	let message = state.publish("weather", json!({}), 10);
	state.acknowledge(&subscriber, "weather", &message.message_id);

	clock.advance(11);
	state.expire();

	// Republishing a message that reuses no id is unaffected either way; the
	// real assertion is that the stale ack no longer references a dead
	// message id, which publish/receive/acknowledge never expose directly.
	// We verify indirectly: a fresh message on the same topic is still
	// delivered (i.e. the old ack didn't leak into suppressing new ones).
	let fresh = state.publish("weather", json!({"v": 2}), 3600);
	let received = state.receive(&subscriber).unwrap();
	assert_eq!(received.len(), 1);
	assert_eq!(received[0].message_id, fresh.message_id);
}
