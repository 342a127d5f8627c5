use thiserror::Error;

/// Errors from parsing a [`TimeZone`](crate::TimeZone) out of its text form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseTimeZoneError {
    #[error("Invalid UTC offset: {0}")]
    InvalidOffset(String),

    #[error("Unrecognized time zone: {0}")]
    Unrecognized(String),
}
