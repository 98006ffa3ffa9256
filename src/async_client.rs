//! Async wrapper around [`SolSpySdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking HTTP client waits on the backend.
//!
//! # Example
//!
//! ```no_run
//! use solspy_sdk::{AsyncSolSpySdk, TimeWindow};
//!
//! # async fn example() -> solspy_sdk::Result<()> {
//! let sdk = AsyncSolSpySdk::builder().build().await?;
//! sdk.login("alice", "secret").await?;
//!
//! // Run any sync SDK method via closure
//! let wallets = sdk.run(|s| s.tracked_wallets().list()).await?;
//!
//! // Convenience method for charts
//! for wallet in &wallets {
//!     let chart = sdk.chart(&wallet.wallet_address, TimeWindow::SevenDays).await?;
//!     println!("{}: {} deals", wallet.wallet_address, chart.total_deals());
//! }
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::chart::{ChartSeries, TimeWindow};
use crate::dashboard::WalletDashboard;
use crate::error::{Result, SolSpyError};
use crate::models::AuthToken;
use crate::SolSpySdk;

// ---------------------------------------------------------------------------
// AsyncSolSpySdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncSolSpySdk`] instance.
#[derive(Default)]
pub struct AsyncSolSpySdkBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    access_token: Option<String>,
    session_dir: Option<PathBuf>,
}

impl AsyncSolSpySdkBuilder {
    /// Set the backend base URL.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Start with an already issued access token.
    pub fn access_token(mut self, token: &str) -> Self {
        self.access_token = Some(token.to_string());
        self
    }

    /// Persist the session token in `path`.
    pub fn session_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.session_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Build the async SDK.
    ///
    /// The blocking HTTP client is created on the blocking thread pool, as
    /// it must not be built from inside the async runtime's worker threads.
    pub async fn build(self) -> Result<AsyncSolSpySdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = SolSpySdk::builder();
            if let Some(url) = self.base_url {
                builder = builder.base_url(&url);
            }
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            if let Some(token) = self.access_token {
                builder = builder.access_token(&token);
            }
            if let Some(dir) = self.session_dir {
                builder = builder.session_dir(dir);
            }
            let sdk = builder.build()?;
            Ok(AsyncSolSpySdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| SolSpyError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncSolSpySdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`SolSpySdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`SolSpySdk`] is
/// protected by a [`Mutex`] since its session lives in a `RefCell`.
pub struct AsyncSolSpySdk {
    inner: Arc<Mutex<SolSpySdk>>,
}

impl AsyncSolSpySdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncSolSpySdkBuilder {
        AsyncSolSpySdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives an `&SolSpySdk` reference and should return
    /// a `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&SolSpySdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| SolSpyError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| SolSpyError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Log in and keep the issued token.
    pub async fn login(&self, login: &str, password: &str) -> Result<AuthToken> {
        let login = login.to_string();
        let password = password.to_string();
        self.run(move |s| s.login(&login, &password)).await
    }

    /// Activity chart for a wallet, ending at the current local hour.
    pub async fn chart(&self, address: &str, window: TimeWindow) -> Result<ChartSeries> {
        let address = address.to_string();
        self.run(move |s| s.statistics().chart(&address, window)).await
    }

    /// Full dashboard for a wallet, ending at the current local hour.
    pub async fn dashboard(&self, address: &str, window: TimeWindow) -> Result<WalletDashboard> {
        let address = address.to_string();
        self.run(move |s| s.dashboard().load(&address, window)).await
    }

    /// Close the SDK, releasing all resources.
    pub async fn close(self) -> Result<()> {
        tokio::task::spawn_blocking(move || {
            let sdk = self
                .inner
                .lock()
                .map_err(|_| SolSpyError::InvalidArgument("SDK lock poisoned".into()))?;
            drop(sdk);
            Ok(())
        })
        .await
        .map_err(|e| SolSpyError::InvalidArgument(format!("Task join error: {e}")))?
    }
}
