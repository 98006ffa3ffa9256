//! Queries against the `copy_trading` router.

use crate::config;
use crate::connection::Connection;
use crate::error::Result;
use crate::models::{StartTrackingRequest, TrackingStarted, TrackingStatus};

use super::tracked_wallets::{require_address, TrackedWalletQuery};

/// Query interface for the backend's wallet trackers.
pub struct CopyTradingQuery<'a> {
    conn: &'a Connection,
}

impl<'a> CopyTradingQuery<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Start a passive tracker polling the wallet every `interval_seconds`.
    ///
    /// `None` leaves the interval to the backend default.
    pub fn start_monitoring(
        &self,
        address: &str,
        interval_seconds: Option<u32>,
    ) -> Result<TrackingStarted> {
        let address = require_address(address)?;
        let body = StartTrackingRequest {
            wallet_address: address.to_string(),
            interval_seconds,
        };
        self.conn.post(config::START_MONITORING, &body)
    }

    /// Start a tracker that also copies the wallet's trades.
    pub fn start_copy_trading(&self, address: &str) -> Result<TrackingStarted> {
        let address = require_address(address)?;
        let body = StartTrackingRequest {
            wallet_address: address.to_string(),
            interval_seconds: None,
        };
        self.conn.post(config::START_COPY_TRADING, &body)
    }

    /// Whether a tracker is running for the wallet.
    pub fn status(&self, address: &str) -> Result<TrackingStatus> {
        let address = require_address(address)?;
        self.conn.get(&config::tracking_status(address))
    }

    /// Re-enable tracking of a paused wallet and restart its tracker.
    ///
    /// Marks the wallet as tracked, then starts a monitor polling every
    /// [`RESUME_INTERVAL_SECONDS`](config::RESUME_INTERVAL_SECONDS).
    pub fn resume(&self, address: &str) -> Result<TrackingStarted> {
        TrackedWalletQuery::new(self.conn).start_tracking(address)?;
        self.start_monitoring(address, Some(config::RESUME_INTERVAL_SECONDS))
    }
}
