use chronos_core::Timestamp;
use chronos_ports::Clock;

use crate::SystemClock;

/// Clock frozen at a single instant
///
/// Always returns the instant captured at construction, however many
/// calls are made and however much wall-clock time passes between them.
/// Inject this where production code takes a [`Clock`] to make
/// time-dependent logic deterministic and reproducible in tests.
pub struct FrozenClock {
    frozen_at: Timestamp,
}

impl FrozenClock {
    /// Pin the clock to the given instant
    pub fn at(frozen_at: Timestamp) -> Self {
        Self { frozen_at }
    }

    /// Pin the clock to the current instant, captured once at this call
    pub fn from_now() -> Self {
        Self::at(SystemClock::new().now())
    }

    /// The instant this clock is pinned to
    pub fn frozen_at(&self) -> Timestamp {
        self.frozen_at
    }
}

impl Clock for FrozenClock {
    fn now(&self) -> Timestamp {
        self.frozen_at
    }

    fn name(&self) -> &str {
        "FrozenClock"
    }
}
