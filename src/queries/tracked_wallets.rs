//! Queries against the `tracked-wallet` router.

use crate::config;
use crate::connection::Connection;
use crate::error::{Result, SolSpyError};
use crate::models::{
    AddedTrackedWallet, ChangeFollowModeRequest, FollowMode, TrackWalletRequest, TrackedWallet,
    TrackedWalletTransaction,
};

// ---------------------------------------------------------------------------
// TrackedWalletQuery
// ---------------------------------------------------------------------------

/// Query interface for third-party wallets watched or copied by the bot.
pub struct TrackedWalletQuery<'a> {
    conn: &'a Connection,
}

impl<'a> TrackedWalletQuery<'a> {
    /// Create a new `TrackedWalletQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Start watching a wallet address.
    pub fn add(&self, address: &str) -> Result<AddedTrackedWallet> {
        let address = require_address(address)?;
        let body = TrackWalletRequest {
            wallet_address: address.to_string(),
        };
        self.conn.post(config::TRACKED_WALLETS, &body)
    }

    /// All wallets tracked by the current user's bot wallets.
    pub fn list(&self) -> Result<Vec<TrackedWallet>> {
        self.conn.get(config::BOT_TRACKING_WALLETS)
    }

    /// Look up one tracked wallet in the user's listing.
    ///
    /// Unlike [`get`](Self::get), an address the user does not track is
    /// `Ok(None)` rather than an error.
    pub fn find(&self, address: &str) -> Result<Option<TrackedWallet>> {
        let address = require_address(address)?;
        Ok(self
            .list()?
            .into_iter()
            .find(|w| w.wallet_address == address))
    }

    /// Fetch a tracked wallet by address.
    pub fn get(&self, address: &str) -> Result<TrackedWallet> {
        let address = require_address(address)?;
        self.conn.get(&config::tracked_wallet(address))
    }

    /// Switch a wallet between monitoring and copy trading.
    pub fn set_follow_mode(&self, address: &str, mode: FollowMode) -> Result<()> {
        let address = require_address(address)?;
        let body = ChangeFollowModeRequest {
            wallet_address: address.to_string(),
            follow_mode: mode,
        };
        self.conn.put(config::TRACKED_WALLET_STATUS, Some(&body))?;
        tracing::info!(%address, %mode, "follow mode changed");
        Ok(())
    }

    /// Mark a wallet as actively tracked.
    pub fn start_tracking(&self, address: &str) -> Result<()> {
        let address = require_address(address)?;
        self.conn.put::<()>(&config::start_tracking(address), None)?;
        Ok(())
    }

    /// Pause tracking of a wallet without deleting it.
    pub fn stop_tracking(&self, address: &str) -> Result<()> {
        let address = require_address(address)?;
        self.conn.put::<()>(&config::stop_tracking(address), None)?;
        Ok(())
    }

    /// Stop tracking a wallet and delete its record.
    pub fn delete(&self, address: &str) -> Result<()> {
        let address = require_address(address)?;
        self.conn.delete(&config::delete_tracked_wallet(address))?;
        Ok(())
    }

    /// Transactions recorded for a tracked wallet.
    pub fn transactions(&self, address: &str) -> Result<Vec<TrackedWalletTransaction>> {
        let address = require_address(address)?;
        self.conn.get(&config::wallet_transactions(address))
    }
}

/// Reject blank wallet addresses before they turn into malformed paths.
pub(crate) fn require_address(address: &str) -> Result<&str> {
    let trimmed = address.trim();
    if trimmed.is_empty() || trimmed.contains('/') {
        return Err(SolSpyError::InvalidArgument(format!(
            "invalid wallet address '{}'",
            address
        )));
    }
    Ok(trimmed)
}
