//! Bucket generator tests: axis length, ordering and labelling.

mod common;

use chrono::{FixedOffset, TimeZone, Timelike};
use chrono_tz::Europe::Kyiv;
use solspy_sdk::chart::{generate_fixed_buckets, truncate_to_hour, Granularity, TimeWindow};

fn hours(labels: &[String]) -> Vec<u32> {
    labels.iter().map(|l| l.parse().unwrap()).collect()
}

// ---------------------------------------------------------------------------
// TimeWindow
// ---------------------------------------------------------------------------

#[test]
fn window_bucket_counts() {
    assert_eq!(TimeWindow::TwelveHours.bucket_count(), 12);
    assert_eq!(TimeWindow::TwentyFourHours.bucket_count(), 24);
    assert_eq!(TimeWindow::SevenDays.bucket_count(), 7);
}

#[test]
fn window_granularity() {
    assert_eq!(TimeWindow::TwelveHours.granularity(), Granularity::Hourly);
    assert_eq!(TimeWindow::TwentyFourHours.granularity(), Granularity::Hourly);
    assert_eq!(TimeWindow::SevenDays.granularity(), Granularity::Daily);
}

#[test]
fn window_parses_and_displays() {
    for window in TimeWindow::ALL {
        let parsed: TimeWindow = window.to_string().parse().unwrap();
        assert_eq!(parsed, window);
    }
    assert_eq!(" 7D ".parse::<TimeWindow>().unwrap(), TimeWindow::SevenDays);
    assert!("30d".parse::<TimeWindow>().is_err());
}

#[test]
fn window_defaults_to_24h() {
    assert_eq!(TimeWindow::default(), TimeWindow::TwentyFourHours);
}

#[test]
fn window_serializes_as_short_code() {
    let json = serde_json::to_string(&TimeWindow::TwelveHours).unwrap();
    assert_eq!(json, "\"12h\"");
    let back: TimeWindow = serde_json::from_str("\"7d\"").unwrap();
    assert_eq!(back, TimeWindow::SevenDays);
}

// ---------------------------------------------------------------------------
// truncate_to_hour
// ---------------------------------------------------------------------------

#[test]
fn truncate_drops_minutes_and_below() {
    let now = common::utc("2026-10-16T14:37:12.345678Z");
    let truncated = truncate_to_hour(&now);
    assert_eq!(truncated, common::utc("2026-10-16T14:00:00Z"));
    assert_eq!(truncated.nanosecond(), 0);
}

#[test]
fn truncate_is_noop_on_the_hour() {
    let now = common::utc("2026-10-16T14:00:00Z");
    assert_eq!(truncate_to_hour(&now), now);
}

// ---------------------------------------------------------------------------
// generate_fixed_buckets
// ---------------------------------------------------------------------------

#[test]
fn buckets_have_expected_length() {
    let now = common::utc("2026-10-16T14:37:12Z");
    for window in TimeWindow::ALL {
        assert_eq!(
            generate_fixed_buckets(window, &now).len(),
            window.bucket_count(),
            "window {}",
            window
        );
    }
}

#[test]
fn hourly_buckets_end_at_current_hour() {
    let now = common::utc("2026-10-16T14:37:12Z");
    let labels = generate_fixed_buckets(TimeWindow::TwentyFourHours, &now);
    assert_eq!(labels.last().unwrap(), "14");
    assert_eq!(labels.first().unwrap(), "15");
}

#[test]
fn twelve_hour_buckets_span_half_a_day() {
    let now = common::utc("2026-10-16T14:59:59Z");
    let labels = generate_fixed_buckets(TimeWindow::TwelveHours, &now);
    assert_eq!(
        labels,
        vec!["03", "04", "05", "06", "07", "08", "09", "10", "11", "12", "13", "14"]
    );
}

#[test]
fn hourly_buckets_are_chronological_across_midnight() {
    let now = common::utc("2026-10-16T05:10:00Z");
    let labels = generate_fixed_buckets(TimeWindow::TwentyFourHours, &now);
    let hours = hours(&labels);
    for pair in hours.windows(2) {
        assert_eq!((pair[0] + 1) % 24, pair[1]);
    }
    assert_eq!(*hours.last().unwrap(), 5);
}

#[test]
fn hourly_labels_are_two_digits() {
    let now = common::utc("2026-10-16T03:00:00Z");
    let labels = generate_fixed_buckets(TimeWindow::TwelveHours, &now);
    assert!(labels.iter().all(|l| l.len() == 2));
    assert_eq!(labels.last().unwrap(), "03");
    assert!(labels.contains(&"00".to_string()));
}

#[test]
fn daily_buckets_cover_last_seven_days() {
    let now = common::utc("2026-10-16T14:37:12Z");
    let labels = generate_fixed_buckets(TimeWindow::SevenDays, &now);
    assert_eq!(
        labels,
        vec!["10.10", "11.10", "12.10", "13.10", "14.10", "15.10", "16.10"]
    );
}

#[test]
fn daily_buckets_cross_month_boundary() {
    let now = common::utc("2026-03-02T01:10:00Z");
    let labels = generate_fixed_buckets(TimeWindow::SevenDays, &now);
    assert_eq!(
        labels,
        vec!["24.02", "25.02", "26.02", "27.02", "28.02", "01.03", "02.03"]
    );
}

#[test]
fn daily_buckets_keep_every_date_when_clocks_go_forward() {
    // Kyiv moves from UTC+2 to UTC+3 on 29 March 2026.
    let now = Kyiv.with_ymd_and_hms(2026, 3, 30, 0, 30, 0).unwrap();
    let labels = generate_fixed_buckets(TimeWindow::SevenDays, &now);
    assert_eq!(
        labels,
        vec!["24.03", "25.03", "26.03", "27.03", "28.03", "29.03", "30.03"]
    );
}

#[test]
fn daily_buckets_keep_every_date_when_clocks_go_back() {
    // Kyiv moves from UTC+3 to UTC+2 on 25 October 2026.
    let now = Kyiv.with_ymd_and_hms(2026, 10, 26, 0, 30, 0).unwrap();
    let labels = generate_fixed_buckets(TimeWindow::SevenDays, &now);
    assert_eq!(
        labels,
        vec!["20.10", "21.10", "22.10", "23.10", "24.10", "25.10", "26.10"]
    );
}

#[test]
fn labels_follow_the_time_zone_of_now() {
    let kyiv = FixedOffset::east_opt(3 * 3600).unwrap();
    let local = kyiv.with_ymd_and_hms(2026, 10, 16, 23, 30, 0).unwrap();
    let same_instant_utc = local.with_timezone(&chrono::Utc);

    let local_labels = generate_fixed_buckets(TimeWindow::TwelveHours, &local);
    let utc_labels = generate_fixed_buckets(TimeWindow::TwelveHours, &same_instant_utc);

    assert_eq!(local_labels.last().unwrap(), "23");
    assert_eq!(utc_labels.last().unwrap(), "20");
}

#[test]
fn buckets_are_deterministic() {
    let now = common::utc("2026-10-16T14:37:12Z");
    for window in TimeWindow::ALL {
        assert_eq!(
            generate_fixed_buckets(window, &now),
            generate_fixed_buckets(window, &now)
        );
    }
}

#[test]
fn buckets_within_the_same_hour_agree() {
    let early = common::utc("2026-10-16T14:00:01Z");
    let late = common::utc("2026-10-16T14:59:59Z");
    assert_eq!(
        generate_fixed_buckets(TimeWindow::TwentyFourHours, &early),
        generate_fixed_buckets(TimeWindow::TwentyFourHours, &late)
    );
}
