//! Time handling for phenomenon and result time aggregates.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A time range whose ends may each be unset.
///
/// Absence is a first-class state: a period with no start has no minimum,
/// it does not have an epoch minimum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePeriod {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
}

impl TimePeriod {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// A period covering a single instant.
    pub fn instant(time: DateTime<Utc>) -> Self {
        Self::new(time, time)
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Start is not after end whenever both are set.
    pub fn is_ordered(&self) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= end,
            _ => true,
        }
    }

    pub fn contains(&self, dt: &DateTime<Utc>) -> bool {
        self.start.map_or(true, |s| &s <= dt) && self.end.map_or(true, |e| dt <= &e)
    }

    /// Widen this period so it covers `other`. Unset ends adopt the other's value.
    pub fn extend(&mut self, other: &TimePeriod) {
        self.start = match (self.start, other.start) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.end = match (self.end, other.end) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
    }

    /// Widen this period so it covers `time`.
    pub fn extend_to_instant(&mut self, time: DateTime<Utc>) {
        self.extend(&TimePeriod::instant(time));
    }

    /// Parse an ISO 8601 instant or a "start/end" interval.
    pub fn parse(s: &str) -> Result<Self, TimeParseError> {
        if let Some((start, end)) = s.split_once('/') {
            return Ok(Self::new(parse_iso8601(start)?, parse_iso8601(end)?));
        }
        Ok(Self::instant(parse_iso8601(s)?))
    }
}

impl From<DateTime<Utc>> for TimePeriod {
    fn from(time: DateTime<Utc>) -> Self {
        TimePeriod::instant(time)
    }
}

/// Parse an ISO 8601 timestamp; values without an offset are taken as UTC.
pub fn parse_iso8601(s: &str) -> Result<DateTime<Utc>, TimeParseError> {
    let s = s.trim();

    // Try full datetime with timezone
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    // Try without timezone (assume UTC)
    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&ndt));
    }

    // Try date only
    if let Ok(ndt) =
        NaiveDateTime::parse_from_str(&format!("{}T00:00:00", s), "%Y-%m-%dT%H:%M:%S")
    {
        return Ok(Utc.from_utc_datetime(&ndt));
    }

    Err(TimeParseError::InvalidFormat(s.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum TimeParseError {
    #[error("Invalid time format: {0}")]
    InvalidFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn t(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_iso8601() {
        let dt = parse_iso8601("2024-01-15T12:00:00Z").unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.day(), 15);
        assert_eq!(dt.hour(), 12);

        let date_only = parse_iso8601("2024-01-15").unwrap();
        assert_eq!(date_only.hour(), 0);
    }

    #[test]
    fn test_parse_period() {
        let period = TimePeriod::parse("2024-01-15T00:00:00Z/2024-01-15T06:00:00Z").unwrap();
        assert_eq!(period, TimePeriod::new(t(0), t(6)));
        assert!(TimePeriod::parse("yesterday").is_err());
    }

    #[test]
    fn test_extend_widens_only() {
        let mut period = TimePeriod::new(t(2), t(8));
        period.extend_to_instant(t(5));
        assert_eq!(period, TimePeriod::new(t(2), t(8)));

        period.extend_to_instant(t(10));
        assert_eq!(period, TimePeriod::new(t(2), t(10)));

        period.extend(&TimePeriod::new(t(1), t(3)));
        assert_eq!(period, TimePeriod::new(t(1), t(10)));
    }

    #[test]
    fn test_extend_unset_adopts_incoming() {
        let mut period = TimePeriod::default();
        assert!(period.is_empty());
        period.extend(&TimePeriod::instant(t(4)));
        assert_eq!(period, TimePeriod::instant(t(4)));
    }

    #[test]
    fn test_ordering() {
        assert!(TimePeriod::new(t(1), t(2)).is_ordered());
        assert!(!TimePeriod::new(t(3), t(2)).is_ordered());
        assert!(TimePeriod {
            start: Some(t(3)),
            end: None
        }
        .is_ordered());
    }
}
