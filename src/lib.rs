//! Sol-Spy SDK for Rust.
//!
//! Provides a high-level client for the Sol-Spy wallet-tracking bot backend:
//! logging in, registering bot wallets, tracking third-party wallets and
//! turning their activity statistics into gap-free chart series.
//!
//! # Quick start
//!
//! ```no_run
//! use solspy_sdk::{SolSpySdk, TimeWindow};
//!
//! let sdk = SolSpySdk::builder().build().unwrap();
//! sdk.login("alice", "secret").unwrap();
//!
//! // Track a wallet and chart its last 24 hours
//! sdk.tracked_wallets().add("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU").unwrap();
//! let chart = sdk
//!     .statistics()
//!     .chart("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU", TimeWindow::TwentyFourHours)
//!     .unwrap();
//! assert_eq!(chart.len(), 24);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod chart;
pub mod config;
pub mod connection;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod queries;
pub mod session;

#[cfg(feature = "async")]
pub use async_client::AsyncSolSpySdk;
pub use chart::{
    generate_fixed_buckets, reconcile, ChartPoint, ChartSeries, Observation, TimeWindow,
};
pub use connection::Connection;
pub use dashboard::{WalletDashboard, WalletSummary};
pub use error::{Result, SolSpyError};
pub use session::SessionStore;

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// SolSpySdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`SolSpySdk`] instance.
///
/// Use [`SolSpySdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](SolSpySdkBuilder::build) to create the SDK.
#[derive(Debug, Clone)]
pub struct SolSpySdkBuilder {
    base_url: String,
    timeout: Duration,
    access_token: Option<String>,
    session_dir: Option<PathBuf>,
}

impl Default for SolSpySdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            access_token: None,
            session_dir: None,
        }
    }
}

impl SolSpySdkBuilder {
    /// Start from the defaults, overridden by `SOLSPY_API_URL` and
    /// `SOLSPY_ACCESS_TOKEN` when those are set and non-empty.
    pub fn from_env() -> Self {
        let mut builder = Self::default();
        if let Some(url) = env_value(config::ENV_API_URL) {
            builder.base_url = url;
        }
        if let Some(token) = env_value(config::ENV_ACCESS_TOKEN) {
            builder.access_token = Some(token);
        }
        builder
    }

    /// Set the backend base URL (defaults to `http://127.0.0.1:8080/api`).
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Set the HTTP request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Start with an already issued access token instead of logging in.
    pub fn access_token(mut self, token: &str) -> Self {
        self.access_token = Some(token.to_string());
        self
    }

    /// Persist the session token in `path`.
    ///
    /// A token saved there by an earlier run is picked up on build.
    pub fn session_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.session_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Persist the session token in the platform config directory
    /// (e.g. `~/.config/solspy-sdk` on Linux), or keep it in memory only.
    ///
    /// Sessions are in-memory by default.
    pub fn persist_session(mut self, persist: bool) -> Self {
        self.session_dir = persist.then(config::default_session_dir);
        self
    }

    /// Build the SDK.
    ///
    /// No request is sent; an explicit [`access_token`](Self::access_token)
    /// takes precedence over a persisted one.
    pub fn build(self) -> Result<SolSpySdk> {
        let mut session = SessionStore::new(self.session_dir)?;
        if let Some(token) = self.access_token.as_deref() {
            session.set_token(token)?;
        }
        let conn = Connection::new(&self.base_url, self.timeout, session)?;
        Ok(SolSpySdk { conn })
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// SolSpySdk
// ---------------------------------------------------------------------------

/// The main entry point for the Sol-Spy SDK.
///
/// Wraps a [`Connection`] (which owns the HTTP client and session) and
/// exposes one lightweight borrowing query wrapper per backend area.
///
/// Created via [`SolSpySdk::builder()`].
pub struct SolSpySdk {
    conn: Connection,
}

impl SolSpySdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> SolSpySdkBuilder {
        SolSpySdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access login and profile queries.
    pub fn users(&self) -> queries::UserQuery<'_> {
        queries::UserQuery::new(&self.conn)
    }

    /// Access the bot wallet query interface.
    pub fn bot_wallets(&self) -> queries::BotWalletQuery<'_> {
        queries::BotWalletQuery::new(&self.conn)
    }

    /// Access the tracked wallet query interface.
    pub fn tracked_wallets(&self) -> queries::TrackedWalletQuery<'_> {
        queries::TrackedWalletQuery::new(&self.conn)
    }

    /// Access activity statistics and chart series.
    pub fn statistics(&self) -> queries::StatisticsQuery<'_> {
        queries::StatisticsQuery::new(&self.conn)
    }

    /// Access the copy-trading tracker interface.
    pub fn copy_trading(&self) -> queries::CopyTradingQuery<'_> {
        queries::CopyTradingQuery::new(&self.conn)
    }

    /// Access the per-wallet dashboard loader.
    pub fn dashboard(&self) -> dashboard::DashboardQuery<'_> {
        dashboard::DashboardQuery::new(&self.conn)
    }

    // -- Session -----------------------------------------------------------

    /// Log in and keep the issued token for subsequent requests.
    pub fn login(&self, login: &str, password: &str) -> Result<models::AuthToken> {
        self.users().login(login, password)
    }

    /// Forget the session token, removing its persisted copy if any.
    pub fn logout(&self) -> Result<()> {
        self.conn.session.borrow_mut().clear()?;
        tracing::info!("logged out");
        Ok(())
    }

    /// Whether a token is available for authorized requests.
    pub fn is_authenticated(&self) -> bool {
        self.conn.session.borrow().is_authenticated()
    }

    /// Consume the SDK and release the HTTP client.
    ///
    /// Dropping the SDK has the same effect.
    pub fn close(self) {
        drop(self);
    }

    /// Return a reference to the underlying [`Connection`] for advanced usage.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for SolSpySdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.conn.session.borrow();
        let dir = session
            .session_dir
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "memory".to_string());
        write!(
            f,
            "SolSpySdk(base_url={}, session={}, authenticated={})",
            self.conn.base_url(),
            dir,
            session.is_authenticated()
        )
    }
}
