use std::sync::Arc;
use std::thread;

use serde_json::json;

use super::test_state;
use crate::config::BrokerConfig;
use crate::ids::SessionId;

/// 10 sessions, each publishing and receiving concurrently against one
/// shared topic, for a total of 1000 operations. Nothing here asserts
/// ordering across threads — only that the broker never panics, never loses
/// a published message, and every session can always read a consistent
/// snapshot.
#[test]
fn concurrent_publish_and_receive_across_many_sessions_is_safe() {
	let (state, _clock) = test_state(1_000, BrokerConfig::default());
	let state = Arc::new(state);

	let sessions: Vec<SessionId> = (0..10)
		.map(|i| {
			let id = state.register(SessionId::from(format!("s{i}")));
			state.subscribe(&id, "load");
			id
		})
		.collect();

	let handles: Vec<_> = sessions
		.into_iter()
		.map(|session_id| {
			let state = Arc::clone(&state);
			thread::spawn(move || {
				for n in 0..100 {
					state.publish("load", json!({"n": n}), 3600);
					let _ = state.receive(&session_id);
				}
			})
		})
		.collect();

	for handle in handles {
		handle.join().expect("worker thread panicked");
	}

	// 10 sessions * 100 publishes each = 1000 messages, none lost.
	assert_eq!(state.get_messages("load").len(), 1000);
}

/// Acknowledging from many sessions concurrently must never double count or
/// corrupt the shared message's acknowledgement set.
#[test]
fn concurrent_acknowledge_from_many_sessions_is_safe() {
	let (state, _clock) = test_state(1_000, BrokerConfig::default());
	let state = Arc::new(state);
	let message = state.publish("weather", json!({}), 3600);

	let sessions: Vec<SessionId> = (0..10)
		.map(|i| {
			let id = state.register(SessionId::from(format!("s{i}")));
			state.subscribe(&id, "weather");
			id
		})
		.collect();

	let handles: Vec<_> = sessions
		.into_iter()
		.map(|session_id| {
			let state = Arc::clone(&state);
			let message_id = message.message_id.clone();
			thread::spawn(move || {
				assert!(state.acknowledge(&session_id, "weather", &message_id));
			})
		})
		.collect();

	for handle in handles {
		handle.join().expect("worker thread panicked");
	}
}
