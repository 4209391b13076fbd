use serde_json::json;

use super::{register, test_state};
use crate::config::BrokerConfig;

#[test]
fn receive_only_returns_messages_on_subscribed_topics() {
	let (state, _clock) = test_state(1_000, BrokerConfig::default());
	let subscriber = register(&state, "s1");
	state.subscribe(&subscriber, "weather");

	state.publish("weather", json!({"temp": 72}), 3600);
	state.publish("sports", json!({"score": "3-1"}), 3600);

	let received = state.receive(&subscriber).unwrap();
	assert_eq!(received.len(), 1);
	assert_eq!(received[0].topic, "weather");
}

#[test]
fn receive_sees_messages_published_before_the_subscription_existed() {
	let (state, _clock) = test_state(1_000, BrokerConfig::default());
	state.publish("weather", json!({"temp": 72}), 3600);

	let subscriber = register(&state, "s1");
	state.subscribe(&subscriber, "weather");

	let received = state.receive(&subscriber).unwrap();
	assert_eq!(received.len(), 1);
}

#[test]
fn multiple_subscribers_each_receive_their_own_copy() {
	let (state, _clock) = test_state(1_000, BrokerConfig::default());
	let a = register(&state, "a");
	let b = register(&state, "b");
	state.subscribe(&a, "weather");
	state.subscribe(&b, "weather");

	state.publish("weather", json!({"temp": 72}), 3600);

	assert_eq!(state.receive(&a).unwrap().len(), 1);
	assert_eq!(state.receive(&b).unwrap().len(), 1);
}

#[test]
fn unknown_topic_yields_no_messages_and_no_error() {
	let (state, _clock) = test_state(1_000, BrokerConfig::default());
	assert_eq!(state.get_messages("never-published"), vec![]);
	assert!(!state.get_topics().contains(&"never-published".to_string()));
}

#[test]
fn get_topics_reflects_every_topic_ever_published_to() {
	let (state, _clock) = test_state(1_000, BrokerConfig::default());
	state.publish("weather", json!({}), 3600);
	state.publish("sports", json!({}), 3600);

	let mut topics = state.get_topics();
	topics.sort();
	assert_eq!(topics, vec!["sports".to_string(), "weather".to_string()]);
}
