//! Millisecond distance decomposition and countdown formatting.
use std::fmt;

pub const MILLIS_PER_SECOND: u64 = 1_000;
pub const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: u64 = 24 * MILLIS_PER_HOUR;

/// Display shown before a countdown has computed its first tick.
pub const ZERO_DISPLAY: &str = "00:00:00:00";

/// Whole days contained in `distance`.
#[must_use]
pub const fn days(distance: u64) -> u64 {
    distance / MILLIS_PER_DAY
}

/// Whole hours left over after removing full days, in `0..=23`.
#[must_use]
pub const fn hours(distance: u64) -> u64 {
    (distance % MILLIS_PER_DAY) / MILLIS_PER_HOUR
}

/// Whole minutes left over after removing full hours, in `0..=59`.
#[must_use]
pub const fn minutes(distance: u64) -> u64 {
    (distance % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE
}

/// Whole seconds left over after removing full minutes, in `0..=59`.
#[must_use]
pub const fn seconds(distance: u64) -> u64 {
    (distance % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND
}

/// Join components with `:`, left-padding single digits with one `0`.
///
/// Multi-digit components are never truncated, so a 100-day auction renders
/// as `100:01:01:01`.
#[must_use]
pub fn format_components(components: &[u64]) -> String {
    components
        .iter()
        .map(|&value| pad_component(value))
        .collect::<Vec<_>>()
        .join(":")
}

fn pad_component(value: u64) -> String {
    if value > 9 {
        value.to_string()
    } else {
        format!("0{value}")
    }
}

/// A distance split into calendar-like components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Remaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Remaining {
    #[must_use]
    pub const fn from_millis(distance: u64) -> Self {
        Self {
            days: days(distance),
            hours: hours(distance),
            minutes: minutes(distance),
            seconds: seconds(distance),
        }
    }

    /// Whole seconds represented by the components (sub-second remainder dropped).
    #[must_use]
    pub const fn total_seconds(&self) -> u64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_components(&[
            self.days,
            self.hours,
            self.minutes,
            self.seconds,
        ]))
    }
}
