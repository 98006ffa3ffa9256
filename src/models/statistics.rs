use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::timestamp::parse_timestamp;

// ---------------------------------------------------------------------------
// TrackedStatistics — Periodic activity snapshot of a tracked wallet
// ---------------------------------------------------------------------------

/// Counters accept integers, floats and numeric strings. Anything else reads
/// as missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedStatistics {
    pub id: i64,
    pub tracked_wallet_id: i64,
    #[serde(default, deserialize_with = "deserialize_lenient_count")]
    pub deal_count: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub earned_sol: Option<f64>,
    #[serde(
        default,
        alias = "average_weakly_deals",
        deserialize_with = "deserialize_lenient_number"
    )]
    pub average_weekly_deals: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub net_sol_increase: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl TrackedStatistics {
    /// When this snapshot was taken, expressed in `tz`.
    pub fn created_at_in<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        self.created_at
            .as_deref()
            .and_then(|raw| parse_timestamp(raw, tz))
    }
}

fn lenient_number(value: Option<Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

fn deserialize_lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_number(Option::<Value>::deserialize(deserializer)?))
}

fn deserialize_lenient_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    if let Some(Value::Number(n)) = &value {
        if let Some(i) = n.as_i64() {
            return Ok(Some(i));
        }
    }
    Ok(lenient_number(value).map(|n| n.trunc() as i64))
}
