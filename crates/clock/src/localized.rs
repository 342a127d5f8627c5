use chrono::Utc;
use chronos_core::{TimeZone, Timestamp};
use chronos_ports::Clock;

/// Clock reporting the current instant in a fixed time zone
///
/// Reads the same host real-time source as
/// [`SystemClock`](crate::SystemClock) but annotates the result with the
/// configured zone's offset instead of the host's. Only the zone is
/// fixed; the instant advances with every call.
pub struct LocalizedClock {
    zone: TimeZone,
}

impl LocalizedClock {
    /// Create a clock fixed to the given time zone
    pub fn with_zone(zone: TimeZone) -> Self {
        Self { zone }
    }

    /// Create a clock fixed to UTC
    pub fn utc() -> Self {
        Self::with_zone(TimeZone::UTC)
    }

    /// The time zone this clock reports in
    pub fn zone(&self) -> TimeZone {
        self.zone
    }
}

impl Clock for LocalizedClock {
    fn now(&self) -> Timestamp {
        self.zone.localize(Utc::now())
    }

    fn name(&self) -> &str {
        "LocalizedClock"
    }
}
