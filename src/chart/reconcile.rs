//! Alignment of sparse backend observations onto the fixed chart axis.

use chrono::TimeZone;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::window::TimeWindow;
use crate::models::TrackedStatistics;

// ---------------------------------------------------------------------------
// Observation
// ---------------------------------------------------------------------------

/// One backend-reported statistics value, keyed by its bucket label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub label: String,
    #[serde(default)]
    pub deal_count: u64,
    #[serde(default)]
    pub profit: f64,
}

impl Observation {
    pub fn new(label: impl Into<String>, deal_count: u64, profit: f64) -> Self {
        Self {
            label: label.into(),
            deal_count,
            profit,
        }
    }

    /// Convert a statistics snapshot into an observation for `window`.
    ///
    /// The label is the snapshot time rendered in `tz` with the window's
    /// label format. Returns `None` when the snapshot has no usable
    /// timestamp. Missing counters read as zero.
    pub fn from_statistics<Tz: TimeZone>(
        stat: &TrackedStatistics,
        window: TimeWindow,
        tz: &Tz,
    ) -> Option<Self>
    where
        Tz::Offset: fmt::Display,
    {
        let at = stat.created_at_in(tz)?;
        let deal_count = stat.deal_count.unwrap_or(0).max(0) as u64;
        let profit = stat.earned_sol.filter(|p| p.is_finite()).unwrap_or(0.0);
        Some(Self {
            label: window.granularity().label(&at),
            deal_count,
            profit,
        })
    }
}

/// Convert every usable snapshot, preserving backend order.
pub fn observations_from_statistics<Tz: TimeZone>(
    stats: &[TrackedStatistics],
    window: TimeWindow,
    tz: &Tz,
) -> Vec<Observation>
where
    Tz::Offset: fmt::Display,
{
    stats
        .iter()
        .filter_map(|stat| {
            let obs = Observation::from_statistics(stat, window, tz);
            if obs.is_none() {
                tracing::warn!(
                    id = stat.id,
                    created_at = ?stat.created_at,
                    "dropping statistics record without a usable timestamp"
                );
            }
            obs
        })
        .collect()
}

// ---------------------------------------------------------------------------
// ChartPoint
// ---------------------------------------------------------------------------

/// One bucket of a reconciled chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub deal_count: u64,
    pub profit: f64,
}

impl ChartPoint {
    /// A bucket with no recorded activity.
    pub fn zero(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            deal_count: 0,
            profit: 0.0,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.deal_count == 0 && self.profit == 0.0
    }
}

/// Align `observations` onto `buckets`.
///
/// Produces exactly one point per bucket, in bucket order. Each bucket takes
/// the values of the first observation carrying its label; later duplicates
/// are ignored. Buckets with no observation are zero-filled, and observations
/// whose label is not on the axis are dropped.
pub fn reconcile(observations: &[Observation], buckets: &[String]) -> Vec<ChartPoint> {
    buckets
        .iter()
        .map(|label| match observations.iter().find(|o| &o.label == label) {
            Some(obs) => ChartPoint {
                label: label.clone(),
                deal_count: obs.deal_count,
                profit: obs.profit,
            },
            None => ChartPoint::zero(label.clone()),
        })
        .collect()
}
