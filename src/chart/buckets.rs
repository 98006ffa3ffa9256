//! Clock-derived chart axis.

use chrono::{DateTime, Days, Local, TimeDelta, TimeZone, Timelike};
use std::fmt;

use super::window::{Granularity, TimeWindow};

/// Drop the minutes, seconds and sub-second part of `now`.
pub fn truncate_to_hour<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let into_hour = TimeDelta::minutes(i64::from(now.minute()))
        + TimeDelta::seconds(i64::from(now.second()))
        + TimeDelta::nanoseconds(i64::from(now.nanosecond()));
    now.clone() - into_hour
}

/// Bucket labels for `window`, oldest first, ending with the bucket of `now`.
///
/// Hourly windows truncate `now` to its hour and step back one hour at a
/// time. The 7-day window steps back over calendar dates of `now`, so a
/// daylight-saving change never skips or repeats a day. Labels are rendered
/// in `now`'s time zone, so the same instant viewed from different zones
/// yields different axes.
pub fn generate_fixed_buckets<Tz: TimeZone>(window: TimeWindow, now: &DateTime<Tz>) -> Vec<String>
where
    Tz::Offset: fmt::Display,
{
    let granularity = window.granularity();
    let count = window.bucket_count();

    let mut labels: Vec<String> = match granularity {
        Granularity::Hourly => {
            let step = granularity.step();
            let anchor = truncate_to_hour(now);
            (0..count)
                .map(|i| granularity.label(&(anchor.clone() - step * i as i32)))
                .collect()
        }
        Granularity::Daily => {
            let today = now.date_naive();
            (0..count)
                .filter_map(|i| today.checked_sub_days(Days::new(i as u64)))
                .map(|day| day.format(granularity.label_format()).to_string())
                .collect()
        }
    };
    labels.reverse();
    labels
}

/// [`generate_fixed_buckets`] against the local wall clock.
pub fn generate_fixed_buckets_now(window: TimeWindow) -> Vec<String> {
    generate_fixed_buckets(window, &Local::now())
}
