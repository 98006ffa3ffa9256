//! Chart-ready series handed to the rendering layer.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::buckets::generate_fixed_buckets;
use super::reconcile::{observations_from_statistics, reconcile, ChartPoint, Observation};
use super::window::TimeWindow;
use crate::models::TrackedStatistics;

/// A gap-free, chronologically ordered activity series for one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub window: TimeWindow,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// Reconcile `observations` against the axis of `window` ending at `now`.
    pub fn build<Tz: TimeZone>(
        window: TimeWindow,
        observations: &[Observation],
        now: &DateTime<Tz>,
    ) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        let buckets = generate_fixed_buckets(window, now);
        Self {
            window,
            points: reconcile(observations, &buckets),
        }
    }

    /// Build straight from backend statistics, labelled in `now`'s time zone.
    pub fn from_statistics<Tz: TimeZone>(
        window: TimeWindow,
        stats: &[TrackedStatistics],
        now: &DateTime<Tz>,
    ) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        let observations = observations_from_statistics(stats, window, &now.timezone());
        Self::build(window, &observations, now)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }

    pub fn deal_counts(&self) -> Vec<u64> {
        self.points.iter().map(|p| p.deal_count).collect()
    }

    pub fn profits(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.profit).collect()
    }

    pub fn total_deals(&self) -> u64 {
        self.points.iter().map(|p| p.deal_count).sum()
    }

    pub fn total_profit(&self) -> f64 {
        self.points.iter().map(|p| p.profit).sum()
    }

    /// Whether every bucket is zero-filled.
    pub fn is_flat(&self) -> bool {
        self.points.iter().all(ChartPoint::is_zero)
    }
}
