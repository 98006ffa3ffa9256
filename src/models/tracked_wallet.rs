use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// FollowMode / CopyMode — How the bot reacts to a tracked wallet
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowMode {
    /// Mirror the wallet's trades with the bot wallet.
    Copy,
    /// Record activity only.
    Monitor,
}

impl FollowMode {
    pub fn as_str(self) -> &'static str {
        match self {
            FollowMode::Copy => "copy",
            FollowMode::Monitor => "monitor",
        }
    }
}

impl fmt::Display for FollowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyMode {
    CopyPercent,
    CopyXpercent,
    CopyFix,
}

// ---------------------------------------------------------------------------
// TrackedWallet — Third-party wallet watched by the bot
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedWallet {
    pub id: i64,
    pub bot_wallet_id: i64,
    pub wallet_address: String,
    #[serde(default)]
    pub follow_mode: Option<FollowMode>,
    #[serde(default)]
    pub copy_mode: Option<CopyMode>,
    #[serde(default)]
    pub is_tracking: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_activity_at: Option<String>,
    #[serde(default)]
    pub sol_balance: Option<f64>,

    // -- Aggregates some backend versions attach to the listing --
    #[serde(default)]
    pub profit_7_days: Option<f64>,
    #[serde(default)]
    pub profit_14_days: Option<f64>,
    #[serde(default)]
    pub profit_30_days: Option<f64>,
    #[serde(default)]
    pub transaction_count: Option<u64>,
}

// ---------------------------------------------------------------------------
// TrackWalletRequest / ChangeFollowModeRequest — Request bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackWalletRequest {
    pub wallet_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeFollowModeRequest {
    pub wallet_address: String,
    pub follow_mode: FollowMode,
}

// ---------------------------------------------------------------------------
// AddedTrackedWallet — Acknowledgement of a newly tracked wallet
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddedTrackedWallet {
    #[serde(default)]
    pub message: Option<String>,
    pub wallet_address: String,
}

// ---------------------------------------------------------------------------
// TrackedWalletTransaction — Trade observed on a tracked wallet
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionAction {
    Buy,
    Sell,
    Transfer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    Success,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedWalletTransaction {
    pub id: i64,
    pub wallet_id: i64,
    #[serde(default)]
    pub transaction_action: Option<TransactionAction>,
    #[serde(default)]
    pub transaction_hash: Option<String>,
    #[serde(default)]
    pub status: Option<TransactionStatus>,
    #[serde(default)]
    pub token_address: Option<String>,
    #[serde(default)]
    pub token_symbol: Option<String>,
    #[serde(default)]
    pub buy_amount: Option<f64>,
    #[serde(default)]
    pub sell_amount: Option<f64>,
    #[serde(default)]
    pub transfer_amount: Option<f64>,
    #[serde(default)]
    pub dex_name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl TrackedWalletTransaction {
    /// The amount that matters for this transaction's action, if positive.
    ///
    /// Buys report `buy_amount`, sells `sell_amount` and transfers
    /// `transfer_amount`. Transactions without an action have no amount.
    pub fn traded_amount(&self) -> Option<f64> {
        let amount = match self.transaction_action? {
            TransactionAction::Buy => self.buy_amount,
            TransactionAction::Sell => self.sell_amount,
            TransactionAction::Transfer => self.transfer_amount,
        }?;
        (amount > 0.0).then_some(amount)
    }
}
