//! Countdown targets parsed from listing timestamps.
use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::listing::ListingKind;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %I:%M %p",
];

const NAIVE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

/// The instant a countdown runs toward.
///
/// `Invalid` stands for a missing or unparseable timestamp; it has no
/// distance to any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deadline {
    /// Milliseconds since the Unix epoch, UTC.
    At(i64),
    Invalid,
}

impl Deadline {
    /// Parse a timestamp string.
    ///
    /// RFC 3339 and RFC 2822 carry their own offset; naive date-times and
    /// bare dates are read as UTC.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        parse_millis(raw.trim()).map_or(Self::Invalid, Self::At)
    }

    /// Parse an optional timestamp, treating `None` as invalid.
    #[must_use]
    pub fn from_optional(raw: Option<&str>) -> Self {
        raw.map_or(Self::Invalid, Self::parse)
    }

    /// Pick the timestamp that governs `kind` and parse it; the other one is
    /// never read.
    #[must_use]
    pub fn select(kind: ListingKind, flash_deal_end: Option<&str>, auction_end: Option<&str>) -> Self {
        match kind {
            ListingKind::FlashDeal => Self::from_optional(flash_deal_end),
            ListingKind::Auction => Self::from_optional(auction_end),
        }
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::At(_))
    }

    /// Signed milliseconds from `now_ms` until the deadline.
    #[must_use]
    pub const fn distance_from(self, now_ms: i64) -> Option<i64> {
        match self {
            Self::At(target) => Some(target.saturating_sub(now_ms)),
            Self::Invalid => None,
        }
    }
}

fn parse_millis(raw: &str) -> Option<i64> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.timestamp_millis());
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }
    for format in NAIVE_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return date
                .and_hms_opt(0, 0, 0)
                .map(|dt| dt.and_utc().timestamp_millis());
        }
    }
    None
}
