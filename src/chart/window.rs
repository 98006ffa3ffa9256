//! Chart time windows and their bucket granularity.

use chrono::{DateTime, TimeDelta, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SolSpyError;

/// Span of time shown on a wallet activity chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeWindow {
    #[serde(rename = "12h")]
    TwelveHours,
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHours,
    #[serde(rename = "7d")]
    SevenDays,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 3] = [
        TimeWindow::TwelveHours,
        TimeWindow::TwentyFourHours,
        TimeWindow::SevenDays,
    ];

    /// Number of buckets on the chart axis.
    pub fn bucket_count(self) -> usize {
        match self {
            TimeWindow::TwelveHours => 12,
            TimeWindow::TwentyFourHours => 24,
            TimeWindow::SevenDays => 7,
        }
    }

    pub fn granularity(self) -> Granularity {
        match self {
            TimeWindow::TwelveHours | TimeWindow::TwentyFourHours => Granularity::Hourly,
            TimeWindow::SevenDays => Granularity::Daily,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeWindow::TwelveHours => "12h",
            TimeWindow::TwentyFourHours => "24h",
            TimeWindow::SevenDays => "7d",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeWindow {
    type Err = SolSpyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "12h" => Ok(TimeWindow::TwelveHours),
            "24h" => Ok(TimeWindow::TwentyFourHours),
            "7d" => Ok(TimeWindow::SevenDays),
            other => Err(SolSpyError::InvalidArgument(format!(
                "unknown time window '{}' (expected 12h, 24h or 7d)",
                other
            ))),
        }
    }
}

/// Width of a single chart bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    Hourly,
    Daily,
}

impl Granularity {
    /// Nominal distance between two consecutive buckets. Daily axes are
    /// stepped over calendar dates rather than by this amount.
    pub fn step(self) -> TimeDelta {
        match self {
            Granularity::Hourly => TimeDelta::hours(1),
            Granularity::Daily => TimeDelta::days(1),
        }
    }

    /// `strftime` pattern of a bucket label: 2-digit hour, or `day.month`.
    pub fn label_format(self) -> &'static str {
        match self {
            Granularity::Hourly => "%H",
            Granularity::Daily => "%d.%m",
        }
    }

    /// Label of the bucket containing `at`, in `at`'s own time zone.
    pub fn label<Tz: TimeZone>(self, at: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        at.format(self.label_format()).to_string()
    }
}
