//! Chronos Core Domain
//!
//! Pure time value types for the chronos clock library.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod error;
pub mod values;

// Re-export commonly used types at crate root
pub use error::ParseTimeZoneError;
pub use values::{TimeZone, Timestamp};
