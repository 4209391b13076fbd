use serde_json::json;

use super::{register, test_state};
use crate::config::BrokerConfig;
use crate::ids::MessageId;

#[test]
fn acknowledged_messages_no_longer_appear_in_receive() {
	let (state, _clock) = test_state(1_000, BrokerConfig::default());
	let subscriber = register(&state, "s1");
	state.subscribe(&subscriber, "weather");
	let message = state.publish("weather", json!({"temp": 72}), 3600);

	assert!(state.acknowledge(&subscriber, "weather", &message.message_id));
	assert_eq!(state.receive(&subscriber).unwrap(), vec![]);
}

#[test]
fn acknowledge_is_idempotent() {
	let (state, _clock) = test_state(1_000, BrokerConfig::default());
	let subscriber = register(&state, "s1");
	state.subscribe(&subscriber, "weather");
	let message = state.publish("weather", json!({}), 3600);

	assert!(state.acknowledge(&subscriber, "weather", &message.message_id));
	assert!(state.acknowledge(&subscriber, "weather", &message.message_id));
}

#[test]
fn acknowledge_rejected_if_session_is_not_subscribed_to_the_topic() {
	let (state, _clock) = test_state(1_000, BrokerConfig::default());
	let subscriber = register(&state, "s1");
	let message = state.publish("weather", json!({}), 3600);

	assert!(!state.acknowledge(&subscriber, "weather", &message.message_id));
}

#[test]
fn acknowledge_rejected_for_unknown_message_or_session() {
	let (state, _clock) = test_state(1_000, BrokerConfig::default());
	let subscriber = register(&state, "s1");
	state.subscribe(&subscriber, "weather");

	assert!(!state.acknowledge(&subscriber, "weather", &MessageId::from("ghost")));
	assert!(!state.acknowledge(
		&crate::ids::SessionId::from("ghost"),
		"weather",
		&MessageId::from("ghost")
	));
}

#[test]
fn acknowledgement_is_per_session_not_global() {
	let (state, _clock) = test_state(1_000, BrokerConfig::default());
	let a = register(&state, "a");
	let b = register(&state, "b");
	state.subscribe(&a, "weather");
	state.subscribe(&b, "weather");
	let message = state.publish("weather", json!({}), 3600);

	assert!(state.acknowledge(&a, "weather", &message.message_id));
	assert_eq!(state.receive(&a).unwrap(), vec![]);
	assert_eq!(state.receive(&b).unwrap().len(), 1);
}
