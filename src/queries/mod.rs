//! Query modules for the Sol-Spy SDK.
//!
//! Each module provides a query struct that borrows from a
//! [`Connection`](crate::connection::Connection) and exposes one method per
//! backend endpoint, returning typed models.

pub mod bot_wallets;
pub mod copy_trading;
pub mod statistics;
pub mod tracked_wallets;
pub mod users;

pub use bot_wallets::BotWalletQuery;
pub use copy_trading::CopyTradingQuery;
pub use statistics::StatisticsQuery;
pub use tracked_wallets::TrackedWalletQuery;
pub use users::UserQuery;
