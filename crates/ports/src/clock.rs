use chronos_core::Timestamp;

/// Port for time abstraction
///
/// This allows a host application to inject different time sources:
/// - Real system time for production
/// - A frozen instant for deterministic tests
/// - Zone-localized time for reporting
///
/// `now()` is infallible and side-effect free; it never mutates the
/// source, so implementations are shared freely across threads
/// (e.g. as `Arc<dyn Clock>`).
pub trait Clock: Send + Sync {
    /// Get the current time according to this clock
    fn now(&self) -> Timestamp;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}
