mod acknowledge;
mod concurrency;
mod delivery;
mod expiry;

use std::sync::Arc;

use crate::clock::FakeClock;
use crate::config::BrokerConfig;
use crate::ids::test_support::SequentialGenerator;
use crate::ids::SessionId;
use crate::state::BrokerState;

/// Build a `BrokerState` with a fake clock (starting at `start_secs`) and a
/// sequential id generator, for deterministic assertions.
fn test_state(start_secs: u64, config: BrokerConfig) -> (BrokerState, Arc<FakeClock>) {
	let clock = Arc::new(FakeClock::new(start_secs));
	let state = BrokerState::with_parts(
		config,
		Box::new(ArcClock(clock.clone())),
		Box::new(SequentialGenerator::new("msg")),
	);
	(state, clock)
}

/// Adapter so a shared `Arc<FakeClock>` (kept by the test for `advance`/`set`)
/// can also be boxed as the `Box<dyn Clock>` that `BrokerState` owns.
struct ArcClock(Arc<FakeClock>);

impl crate::clock::Clock for ArcClock {
	fn now(&self) -> u64 {
		self.0.now()
	}
}

fn register(state: &BrokerState, id: &str) -> SessionId {
	state.register(SessionId::from(id))
}
