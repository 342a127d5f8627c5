//! Chronos Clock Infrastructure
//!
//! Provides the time sources behind the [`Clock`] port:
//!
//! - [`SystemClock`]: the host real-time clock, annotated with the
//!   host's local UTC offset. Use in production.
//! - [`FrozenClock`]: a single instant captured at construction,
//!   returned forever. Use to make time-dependent logic deterministic
//!   in tests.
//! - [`LocalizedClock`]: the host real-time clock, annotated with a
//!   fixed time zone. Use for zone-specific reporting.
//!
//! ## Usage
//!
//! ```ignore
//! use chronos_clock::{Clock, FrozenClock, LocalizedClock, SystemClock};
//!
//! // Production: real host time
//! let clock = SystemClock::new();
//!
//! // Tests: pin time so assertions are reproducible
//! let frozen = FrozenClock::at("2024-01-15T10:00:00Z".parse().unwrap());
//! assert_eq!(frozen.now(), frozen.now());
//!
//! // Reporting: same instant, New York offset
//! let nyc = LocalizedClock::with_zone("America/New_York".parse().unwrap());
//! println!("{}", nyc.now());
//! ```

mod config;
mod frozen;
mod localized;
mod system;

pub use config::ClockConfig;
pub use frozen::FrozenClock;
pub use localized::LocalizedClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use chronos_ports::Clock;

/// Factory function to create a clock source from configuration
pub fn create_clock(config: &ClockConfig) -> Box<dyn Clock> {
    log::debug!("Creating clock source from config: {:?}", config);
    match config {
        ClockConfig::System => Box::new(SystemClock::new()),
        ClockConfig::Frozen { at } => Box::new(FrozenClock::at(*at)),
        ClockConfig::Localized { zone } => Box::new(LocalizedClock::with_zone(*zone)),
    }
}
