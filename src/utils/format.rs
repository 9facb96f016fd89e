//! Formatting utilities for durations and coordinates

use std::fmt;
use std::time::Duration;

/// Elapsed time split into clock fields.
///
/// `hours` is unbounded; the other fields wrap at their natural limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedTime {
    pub total: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub milliseconds: u64,
}

impl ElapsedTime {
    pub fn from_millis(total: u64) -> Self {
        Self {
            total,
            hours: total / 3_600_000,
            minutes: total / 60_000 % 60,
            seconds: total / 1000 % 60,
            milliseconds: total % 1000,
        }
    }
}

impl From<Duration> for ElapsedTime {
    fn from(duration: Duration) -> Self {
        Self::from_millis(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }
}

/// Renders as `H:MM:SS.mmm`
impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{:02}:{:02}.{:03}",
            self.hours, self.minutes, self.seconds, self.milliseconds
        )
    }
}

/// Format coordinates with two decimals, comma separated
pub fn format_coords(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{:.2}", v))
        .collect::<Vec<_>>()
        .join(", ")
}
