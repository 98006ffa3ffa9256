use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// StartTrackingRequest — Body for the copy-trading tracker endpoints
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartTrackingRequest {
    pub wallet_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_seconds: Option<u32>,
}

// ---------------------------------------------------------------------------
// TrackingStarted / TrackingStatus — Tracker responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingStarted {
    #[serde(default)]
    pub message: Option<String>,
    pub wallet_address: String,
    #[serde(default)]
    pub interval_seconds: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingStatus {
    pub wallet_address: String,
    pub is_tracking: bool,
    #[serde(default)]
    pub message: Option<String>,
}
