//! Statistics queries against the `tracked-statistics` router.
//!
//! Besides the raw snapshots, this module turns them into reconciled
//! [`ChartSeries`] values for a chosen [`TimeWindow`].

use chrono::{DateTime, Local, TimeZone};
use serde_json::Value;
use std::fmt;

use crate::chart::{ChartSeries, TimeWindow};
use crate::config;
use crate::connection::Connection;
use crate::error::Result;
use crate::models::TrackedStatistics;

use super::tracked_wallets::require_address;

// ---------------------------------------------------------------------------
// StatisticsQuery
// ---------------------------------------------------------------------------

/// Query interface for tracked-wallet activity statistics.
pub struct StatisticsQuery<'a> {
    conn: &'a Connection,
}

impl<'a> StatisticsQuery<'a> {
    /// Create a new `StatisticsQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// All statistics snapshots recorded for a wallet, in backend order.
    ///
    /// The backend answers either with a bare array or with an object keyed
    /// by wallet address; both are accepted. Any other shape yields an empty
    /// list. Records that do not parse are logged and skipped.
    pub fn all(&self, address: &str) -> Result<Vec<TrackedStatistics>> {
        let address = require_address(address)?;
        let data: Value = self.conn.get(&config::wallet_statistics(address))?;
        let records = match data {
            Value::Array(arr) => arr,
            Value::Object(mut map) => match map.remove(address) {
                Some(Value::Array(arr)) => arr,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };
        let stats = records
            .into_iter()
            .filter_map(|r| match serde_json::from_value::<TrackedStatistics>(r) {
                Ok(stat) => Some(stat),
                Err(e) => {
                    tracing::warn!(%address, error = %e, "skipping malformed statistics record");
                    None
                }
            })
            .collect();
        Ok(stats)
    }

    /// Activity chart for a wallet over `window`, ending at the current local hour.
    pub fn chart(&self, address: &str, window: TimeWindow) -> Result<ChartSeries> {
        self.chart_at(address, window, &Local::now())
    }

    /// Activity chart for a wallet over `window`, ending at the hour of `now`.
    pub fn chart_at<Tz: TimeZone>(
        &self,
        address: &str,
        window: TimeWindow,
        now: &DateTime<Tz>,
    ) -> Result<ChartSeries>
    where
        Tz::Offset: fmt::Display,
    {
        let stats = self.all(address)?;
        Ok(ChartSeries::from_statistics(window, &stats, now))
    }
}
