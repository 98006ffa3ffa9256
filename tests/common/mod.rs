//! Shared fixtures for the Sol-Spy SDK integration tests.
//!
//! Provides `setup_sdk()` which starts an in-process mock backend and an SDK
//! pointed at it with a pre-seeded access token, plus sample payloads shaped
//! like the backend's JSON responses.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use httpmock::MockServer;
use serde_json::{json, Value};
use solspy_sdk::SolSpySdk;

pub const TOKEN: &str = "4f6c1f0e-2b1a-4c55-9a53-1d1f0c3a9e77";
pub const BEARER: &str = "Bearer 4f6c1f0e-2b1a-4c55-9a53-1d1f0c3a9e77";
pub const WALLET: &str = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU";
pub const OTHER_WALLET: &str = "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM";

/// Start a mock backend and an authenticated SDK talking to it.
///
/// The caller must keep the `MockServer` alive for the duration of the test.
pub fn setup_sdk() -> (MockServer, SolSpySdk) {
    let server = MockServer::start();
    let sdk = SolSpySdk::builder()
        .base_url(&server.url("/api"))
        .access_token(TOKEN)
        .build()
        .unwrap();
    (server, sdk)
}

/// An SDK pointed at `server` without any access token.
pub fn anonymous_sdk(server: &MockServer) -> SolSpySdk {
    SolSpySdk::builder()
        .base_url(&server.url("/api"))
        .build()
        .unwrap()
}

/// Parse an RFC 3339 instant as UTC.
pub fn utc(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .unwrap()
        .with_timezone(&Utc)
}

pub fn tracked_wallets_json() -> Value {
    json!([
        {
            "id": 1,
            "bot_wallet_id": 10,
            "wallet_address": WALLET,
            "follow_mode": "monitor",
            "copy_mode": null,
            "is_tracking": true,
            "created_at": "2026-10-01T08:00:00",
            "last_activity_at": "2026-10-16T12:34:56",
            "sol_balance": 42.5
        },
        {
            "id": 2,
            "bot_wallet_id": 10,
            "wallet_address": OTHER_WALLET,
            "follow_mode": "copy",
            "copy_mode": "copy_percent",
            "is_tracking": false,
            "created_at": "2026-10-02T09:00:00",
            "last_activity_at": null,
            "sol_balance": null
        }
    ])
}

pub fn transactions_json() -> Value {
    json!([
        {
            "id": 100,
            "wallet_id": 1,
            "transaction_action": "buy",
            "transaction_hash": "5h6xBEauJ3PK6SWCZ1PGjBvj8vDdWG3KpwATGy1ARAXF",
            "status": "success",
            "token_address": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
            "token_symbol": "USDC",
            "buy_amount": 150.0,
            "sell_amount": null,
            "transfer_amount": null,
            "dex_name": "Raydium",
            "price": 1.0,
            "timestamp": "2026-10-16T12:34:56"
        },
        {
            "id": 101,
            "wallet_id": 1,
            "transaction_action": "transfer",
            "transaction_hash": "3nB9h2kLq1z7sQv8XcY4mR6tP2wE5uJ9aD1fG7hK3LmN",
            "status": "pending",
            "token_address": null,
            "token_symbol": "SOL",
            "buy_amount": null,
            "sell_amount": null,
            "transfer_amount": 0.0,
            "dex_name": null,
            "price": null,
            "timestamp": null
        }
    ])
}

/// Statistics snapshots for `WALLET`, naive timestamps as the backend stores them.
pub fn statistics_json() -> Value {
    json!([
        {
            "id": 1,
            "tracked_wallet_id": 1,
            "deal_count": 5,
            "earned_sol": 2.5,
            "average_weekly_deals": 3.0,
            "net_sol_increase": 1.25,
            "created_at": "2026-10-16T13:05:00"
        },
        {
            "id": 2,
            "tracked_wallet_id": 1,
            "deal_count": 2,
            "earned_sol": -0.75,
            "average_weekly_deals": 3.0,
            "net_sol_increase": -0.5,
            "created_at": "2026-10-16T09:40:00"
        },
        {
            "id": 3,
            "tracked_wallet_id": 1,
            "deal_count": 9,
            "earned_sol": 4.0,
            "average_weekly_deals": null,
            "net_sol_increase": null,
            "created_at": null
        }
    ])
}
