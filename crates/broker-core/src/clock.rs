//! Wall-clock abstraction so TTL expiry can be tested deterministically.
//!
//! Every timestamp in this crate is integer seconds since the Unix epoch, per
//! the wire contract. Production code uses [`SystemClock`]; tests use
//! [`FakeClock`] to advance time without sleeping.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current wall-clock time, in seconds since the Unix epoch.
pub trait Clock: Send + Sync + 'static {
	/// Current time in integer seconds since the Unix epoch.
	fn now(&self) -> u64;
}

/// Real wall-clock time via [`SystemTime`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now(&self) -> u64 {
		SystemTime::now()
			.duration_since(UNIX_EPOCH)
			.expect("system clock is before the Unix epoch")
			.as_secs()
	}
}

/// A clock that only advances when told to; for deterministic TTL tests.
#[derive(Debug, Default)]
pub struct FakeClock {
	secs: AtomicU64,
}

impl FakeClock {
	/// Create a fake clock starting at the given time.
	pub fn new(start_secs: u64) -> Self {
		Self {
			secs: AtomicU64::new(start_secs),
		}
	}

	/// Advance the clock by `delta` seconds.
	pub fn advance(&self, delta: u64) {
		self.secs.fetch_add(delta, Ordering::SeqCst);
	}

	/// Set the clock to an absolute time.
	pub fn set(&self, secs: u64) {
		self.secs.store(secs, Ordering::SeqCst);
	}
}

impl Clock for FakeClock {
	fn now(&self) -> u64 {
		self.secs.load(Ordering::SeqCst)
	}
}
