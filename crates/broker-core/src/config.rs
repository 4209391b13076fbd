//! Broker-wide tunables that affect the state machine itself.
//!
//! TTL parsing for publish requests (default/negative/sentinel handling) is
//! an HTTP-facade concern (§4.5) and lives in `pollmq-http`; this config only
//! covers what `BrokerState` itself needs to enforce.

/// Default session idle timeout: 3600 seconds, per spec.
pub const DEFAULT_SESSION_TTL_SECS: u64 = 3600;

/// Tunables for [`crate::state::BrokerState`].
#[derive(Debug, Clone)]
pub struct BrokerConfig {
	/// Seconds of inactivity after which an idle session is swept.
	pub session_ttl_secs: u64,
}

impl Default for BrokerConfig {
	fn default() -> Self {
		Self {
			session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
		}
	}
}
