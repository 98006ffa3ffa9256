//! Queries against the `bot_wallets` router.

use crate::config;
use crate::connection::Connection;
use crate::error::{Result, SolSpyError};
use crate::models::{BotWallet, NewBotWallet};

/// Query interface for the wallets the bot trades with.
pub struct BotWalletQuery<'a> {
    conn: &'a Connection,
}

impl<'a> BotWalletQuery<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Hand a wallet over to the bot.
    pub fn add(&self, wallet: &NewBotWallet) -> Result<()> {
        if wallet.token_address.trim().is_empty() || wallet.private_key.trim().is_empty() {
            return Err(SolSpyError::InvalidArgument(
                "wallet address and private key must not be empty".into(),
            ));
        }
        let _: serde_json::Value = self.conn.post(config::ADD_BOT_WALLET, wallet)?;
        tracing::info!(address = %wallet.token_address, "bot wallet registered");
        Ok(())
    }

    /// All bot wallets belonging to the current user.
    pub fn list(&self) -> Result<Vec<BotWallet>> {
        self.conn.get(config::BOT_WALLETS)
    }
}
