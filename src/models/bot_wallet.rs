use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// NewBotWallet — Wallet handed to the bot for trading
// ---------------------------------------------------------------------------

#[derive(Clone, Serialize, Deserialize)]
pub struct NewBotWallet {
    /// Public address of the wallet (the backend calls it `token_address`).
    pub token_address: String,
    pub private_key: String,
    pub status: bool,
}

impl NewBotWallet {
    /// An active bot wallet for the given address and private key.
    pub fn new(address: &str, private_key: &str) -> Self {
        Self {
            token_address: address.trim().to_string(),
            private_key: private_key.trim().to_string(),
            status: true,
        }
    }
}

// Keep private keys out of logs and panic messages.
impl std::fmt::Debug for NewBotWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewBotWallet")
            .field("token_address", &self.token_address)
            .field("private_key", &"<redacted>")
            .field("status", &self.status)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// BotWallet — Bot-controlled wallet as listed by the backend
// ---------------------------------------------------------------------------

#[derive(Clone, Serialize, Deserialize)]
pub struct BotWallet {
    pub id: i64,
    pub user_id: i64,
    pub token_address: String,
    pub private_key: String,
    pub status: bool,
    #[serde(default)]
    pub balance: Option<f64>,
}

impl std::fmt::Debug for BotWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotWallet")
            .field("id", &self.id)
            .field("user_id", &self.user_id)
            .field("token_address", &self.token_address)
            .field("private_key", &"<redacted>")
            .field("status", &self.status)
            .field("balance", &self.balance)
            .finish()
    }
}
