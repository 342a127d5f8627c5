use std::fmt;
use std::str::FromStr;

use chrono::TimeZone as _;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseTimeZoneError;
use crate::values::Timestamp;

/// Time-zone identifier: a named IANA region or a fixed UTC offset
///
/// Named zones resolve their offset per instant (DST-aware); fixed zones
/// apply the same offset at every instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeZone {
    /// IANA region zone, e.g. `America/New_York`
    Named(Tz),
    /// Constant UTC offset, e.g. `+05:30`
    Fixed(FixedOffset),
}

impl TimeZone {
    /// The UTC zone
    pub const UTC: TimeZone = TimeZone::Named(Tz::UTC);

    /// Returns this zone's UTC offset at the given instant
    pub fn offset_at(&self, instant: DateTime<Utc>) -> FixedOffset {
        match self {
            TimeZone::Named(tz) => tz.offset_from_utc_datetime(&instant.naive_utc()).fix(),
            TimeZone::Fixed(offset) => *offset,
        }
    }

    /// Re-annotates the given instant with this zone's offset
    ///
    /// The result is the same absolute instant; only the offset it is
    /// rendered in changes.
    pub fn localize(&self, instant: DateTime<Utc>) -> Timestamp {
        instant.with_timezone(&self.offset_at(instant))
    }
}

impl Default for TimeZone {
    fn default() -> Self {
        TimeZone::UTC
    }
}

impl From<Tz> for TimeZone {
    fn from(tz: Tz) -> Self {
        TimeZone::Named(tz)
    }
}

impl From<FixedOffset> for TimeZone {
    fn from(offset: FixedOffset) -> Self {
        TimeZone::Fixed(offset)
    }
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeZone::Named(tz) => write!(f, "{}", tz.name()),
            TimeZone::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

impl FromStr for TimeZone {
    type Err = ParseTimeZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(tz) = s.parse::<Tz>() {
            return Ok(TimeZone::Named(tz));
        }
        if s.starts_with('+') || s.starts_with('-') {
            return s
                .parse::<FixedOffset>()
                .map(TimeZone::Fixed)
                .map_err(|_| ParseTimeZoneError::InvalidOffset(s.to_string()));
        }
        Err(ParseTimeZoneError::Unrecognized(s.to_string()))
    }
}

// Serialized as the text form (IANA name or ±HH:MM) so configuration
// files stay readable.
impl Serialize for TimeZone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeZone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone as _;

    #[test]
    fn test_named_zone_applies_dst_aware_offset() {
        let zone: TimeZone = "America/New_York".parse().unwrap();

        let summer = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let localized = zone.localize(summer);
        assert_eq!(localized.to_rfc3339(), "2024-06-01T08:00:00-04:00");
        assert_eq!(localized, summer);

        let winter = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(
            zone.localize(winter).to_rfc3339(),
            "2024-01-15T07:00:00-05:00"
        );
    }

    #[test]
    fn test_fixed_zone_applies_constant_offset() {
        let zone: TimeZone = "+05:30".parse().unwrap();
        let expected = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();

        let summer = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let winter = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(zone.offset_at(summer), expected);
        assert_eq!(zone.offset_at(winter), expected);
        assert_eq!(
            zone.localize(summer).to_rfc3339(),
            "2024-06-01T17:30:00+05:30"
        );
    }

    #[test]
    fn test_utc_constant() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let localized = TimeZone::UTC.localize(instant);
        assert_eq!(localized.to_rfc3339(), "2024-01-15T10:00:00+00:00");
        assert_eq!(TimeZone::UTC, "UTC".parse().unwrap());
    }

    #[test]
    fn test_default_is_utc() {
        assert_eq!(TimeZone::default(), TimeZone::UTC);
    }

    #[test]
    fn test_from_chrono_tz_and_offset() {
        assert_eq!(
            TimeZone::from(Tz::Europe__Paris),
            "Europe/Paris".parse().unwrap()
        );
        let offset = FixedOffset::west_opt(4 * 3600).unwrap();
        assert_eq!(TimeZone::from(offset), "-04:00".parse().unwrap());
    }

    #[test]
    fn test_display_round_trip() {
        for text in ["America/New_York", "Europe/Paris", "UTC", "+05:30", "-04:00"] {
            let zone: TimeZone = text.parse().unwrap();
            assert_eq!(zone.to_string(), text);
            assert_eq!(zone.to_string().parse::<TimeZone>().unwrap(), zone);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_region() {
        let err = "Atlantis/Foo".parse::<TimeZone>().unwrap_err();
        assert_eq!(err, ParseTimeZoneError::Unrecognized("Atlantis/Foo".into()));
    }

    #[test]
    fn test_parse_rejects_out_of_range_offset() {
        let err = "+99:00".parse::<TimeZone>().unwrap_err();
        assert_eq!(err, ParseTimeZoneError::InvalidOffset("+99:00".into()));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let zone: TimeZone = "  Europe/Paris  ".parse().unwrap();
        assert_eq!(zone, TimeZone::Named(Tz::Europe__Paris));
    }

    #[test]
    fn test_serde_uses_text_form() {
        let zone: TimeZone = "America/New_York".parse().unwrap();
        let json = serde_json::to_string(&zone).unwrap();
        assert_eq!(json, "\"America/New_York\"");
        assert_eq!(serde_json::from_str::<TimeZone>(&json).unwrap(), zone);

        let offset: TimeZone = "+05:30".parse().unwrap();
        let json = serde_json::to_string(&offset).unwrap();
        assert_eq!(json, "\"+05:30\"");
        assert_eq!(serde_json::from_str::<TimeZone>(&json).unwrap(), offset);

        assert!(serde_json::from_str::<TimeZone>("\"Atlantis/Foo\"").is_err());
    }
}
