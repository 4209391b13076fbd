//! Opaque identifier types for sessions and messages.

use std::fmt;

/// Unique identifier for a registered session.
///
/// Carries no structure other people's code may rely on; it is generated
/// fresh by the HTTP facade and treated as an opaque string everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

/// Unique identifier for a published message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub String);

impl SessionId {
	/// Borrow the underlying string.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl MessageId {
	/// Borrow the underlying string.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for SessionId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl fmt::Display for MessageId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<String> for SessionId {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl From<String> for MessageId {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl From<&str> for SessionId {
	fn from(value: &str) -> Self {
		Self(value.to_string())
	}
}

impl From<&str> for MessageId {
	fn from(value: &str) -> Self {
		Self(value.to_string())
	}
}

/// Produces opaque, globally unique identifier strings.
///
/// No component other than the generator itself is allowed to assume
/// anything about the structure of the strings it returns.
pub trait IdGenerator: Send + Sync {
	/// Generate a fresh, globally unique identifier.
	fn generate(&self) -> String;
}

/// Production identifier generator backed by UUIDv4.
#[derive(Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
	fn generate(&self) -> String {
		uuid::Uuid::new_v4().to_string()
	}
}

#[doc(hidden)]
pub mod test_support {
	use std::sync::atomic::{AtomicU64, Ordering};

	use super::IdGenerator;

	/// Deterministic id generator for tests that need predictable,
	/// monotonically increasing ids (e.g. to assert tiebreak ordering).
	#[derive(Debug, Default)]
	pub struct SequentialGenerator {
		next: AtomicU64,
		prefix: &'static str,
	}

	impl SequentialGenerator {
		/// Create a generator that yields `"{prefix}-1"`, `"{prefix}-2"`, ...
		pub fn new(prefix: &'static str) -> Self {
			Self {
				next: AtomicU64::new(1),
				prefix,
			}
		}
	}

	impl IdGenerator for SequentialGenerator {
		fn generate(&self) -> String {
			let n = self.next.fetch_add(1, Ordering::SeqCst);
			format!("{}-{n}", self.prefix)
		}
	}
}
