use chrono::{DateTime, FixedOffset};

mod time_zone;

pub use time_zone::TimeZone;

/// An instant in time carrying its UTC-offset annotation
///
/// Nanosecond precision. Equality and ordering compare the absolute
/// instant, not the offset it is rendered in.
pub type Timestamp = DateTime<FixedOffset>;
