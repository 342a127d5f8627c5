use chronos_core::{TimeZone, Timestamp};
use serde::{Deserialize, Serialize};

/// Declarative clock selection
///
/// Lets a host application pick its time source from configuration
/// instead of hard-wiring one: real time in production, a pinned
/// instant in test fixtures, a fixed reporting zone where needed.
/// Build the source with [`create_clock`](crate::create_clock).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum ClockConfig {
    /// Host real-time clock with the host's local offset
    #[default]
    System,
    /// Clock pinned to the given instant
    Frozen { at: Timestamp },
    /// Host clock reported in the given time zone
    Localized { zone: TimeZone },
}
