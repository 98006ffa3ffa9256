//! Per-wallet statistics screen.
//!
//! Collects everything the wallet detail view shows (balance and profit
//! summary, recent transactions, activity chart) into a single
//! [`WalletDashboard`] value. The rendering layer only ever sees that value.

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::chart::{ChartSeries, TimeWindow};
use crate::connection::Connection;
use crate::error::Result;
use crate::models::{parse_timestamp, TrackedWallet, TrackedWalletTransaction};
use crate::queries::{StatisticsQuery, TrackedWalletQuery};

/// Display format of timestamps on the dashboard (`16.10.2026, 14:05:09`).
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

// ---------------------------------------------------------------------------
// WalletSummary
// ---------------------------------------------------------------------------

/// Headline figures for a tracked wallet. Unknown values read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletSummary {
    pub balance: f64,
    pub profit_7_days: f64,
    pub profit_14_days: f64,
    pub profit_30_days: f64,
    pub transaction_count: u64,
    /// Last activity formatted with [`TIMESTAMP_FORMAT`], if known.
    pub last_activity: Option<String>,
}

impl WalletSummary {
    /// Summarize a tracked wallet listing entry, rendering times in `tz`.
    pub fn from_wallet<Tz: TimeZone>(wallet: &TrackedWallet, tz: &Tz) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self {
            balance: wallet.sol_balance.unwrap_or(0.0),
            profit_7_days: wallet.profit_7_days.unwrap_or(0.0),
            profit_14_days: wallet.profit_14_days.unwrap_or(0.0),
            profit_30_days: wallet.profit_30_days.unwrap_or(0.0),
            transaction_count: wallet.transaction_count.unwrap_or(0),
            last_activity: wallet
                .last_activity_at
                .as_deref()
                .and_then(|raw| format_timestamp(raw, tz)),
        }
    }
}

/// Reformat a backend timestamp for display in `tz`.
pub fn format_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<String>
where
    Tz::Offset: fmt::Display,
{
    parse_timestamp(raw, tz).map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
}

// ---------------------------------------------------------------------------
// WalletDashboard
// ---------------------------------------------------------------------------

/// Everything shown on a tracked wallet's detail screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletDashboard {
    pub address: String,
    pub summary: WalletSummary,
    pub transactions: Vec<TrackedWalletTransaction>,
    pub chart: ChartSeries,
}

// ---------------------------------------------------------------------------
// DashboardQuery
// ---------------------------------------------------------------------------

/// Loads [`WalletDashboard`] values from the backend.
pub struct DashboardQuery<'a> {
    conn: &'a Connection,
}

impl<'a> DashboardQuery<'a> {
    /// Create a new `DashboardQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Load a wallet's dashboard with the chart ending at the current local hour.
    pub fn load(&self, address: &str, window: TimeWindow) -> Result<WalletDashboard> {
        self.load_at(address, window, &Local::now())
    }

    /// Load a wallet's dashboard with the chart ending at the hour of `now`.
    ///
    /// A wallet absent from the user's tracked list gets a zeroed summary.
    /// The transaction count always reflects the transactions actually
    /// fetched.
    pub fn load_at<Tz: TimeZone>(
        &self,
        address: &str,
        window: TimeWindow,
        now: &DateTime<Tz>,
    ) -> Result<WalletDashboard>
    where
        Tz::Offset: fmt::Display,
    {
        let tz = now.timezone();
        let wallets = TrackedWalletQuery::new(self.conn);

        let mut summary = match wallets.find(address)? {
            Some(wallet) => WalletSummary::from_wallet(&wallet, &tz),
            None => {
                tracing::warn!(%address, "wallet not in tracked list; summary left empty");
                WalletSummary::default()
            }
        };

        let transactions = wallets.transactions(address)?;
        summary.transaction_count = transactions.len() as u64;

        let chart = StatisticsQuery::new(self.conn).chart_at(address, window, now)?;

        Ok(WalletDashboard {
            address: address.trim().to_string(),
            summary,
            transactions,
            chart,
        })
    }
}
