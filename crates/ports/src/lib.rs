//! Chronos Ports
//!
//! Port definitions (traits) for the chronos clock library.
//! These define the boundary between time-dependent logic and the
//! time sources that feed it.

mod clock;

pub use clock::Clock;
