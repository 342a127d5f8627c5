use chrono::Local;
use chronos_core::Timestamp;
use chronos_ports::Clock;

/// Real system clock for production use
///
/// Queries the host's real-time clock at every call and returns it with
/// the host's local UTC offset. Successive calls may return any values:
/// monotonicity is not guaranteed, since the host clock can be adjusted
/// externally.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Local::now().fixed_offset()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}
