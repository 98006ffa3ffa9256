use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable overriding the backend base URL.
pub const ENV_API_URL: &str = "SOLSPY_API_URL";
/// Environment variable carrying a pre-issued bearer token.
pub const ENV_ACCESS_TOKEN: &str = "SOLSPY_ACCESS_TOKEN";

/// File name of the persisted bearer token inside the session directory.
pub const SESSION_FILE: &str = "session_token";

/// Polling interval the dashboard requests when it resumes monitoring a wallet.
pub const RESUME_INTERVAL_SECONDS: u32 = 5;

// -- Endpoints (relative to the base URL) -----------------------------------

pub const LOGIN: &str = "users/login";
pub const CURRENT_USER: &str = "users/user";

pub const ADD_BOT_WALLET: &str = "bot_wallets/add-wallet-for-bot";
pub const BOT_WALLETS: &str = "bot_wallets/user_wallets";

pub const TRACKED_WALLETS: &str = "tracked-wallet/";
pub const BOT_TRACKING_WALLETS: &str = "tracked-wallet/bot_tracking_wallets";
pub const TRACKED_WALLET_STATUS: &str = "tracked-wallet/status";

pub const START_MONITORING: &str = "copy_trading/start-tracking/";
pub const START_COPY_TRADING: &str = "copy_trading/start-tracking-and-copy-trading/";

pub fn tracked_wallet(address: &str) -> String {
    format!("tracked-wallet/{}", address)
}

pub fn start_tracking(address: &str) -> String {
    format!("tracked-wallet/start-tracking/{}", address)
}

pub fn stop_tracking(address: &str) -> String {
    format!("tracked-wallet/stop-tracking/{}", address)
}

pub fn delete_tracked_wallet(address: &str) -> String {
    format!("tracked-wallet/delete/{}", address)
}

pub fn wallet_transactions(address: &str) -> String {
    format!("tracked-wallet/transaction/{}", address)
}

pub fn wallet_statistics(address: &str) -> String {
    format!("tracked-statistics/all/{}", address)
}

pub fn tracking_status(address: &str) -> String {
    format!("copy_trading/tracking-status/{}", address)
}

pub fn default_session_dir() -> PathBuf {
    if let Some(config) = dirs::config_dir() {
        config.join("solspy-sdk")
    } else {
        PathBuf::from(".solspy-sdk")
    }
}
