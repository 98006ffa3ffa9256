use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Credentials — Body of the login request
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// AuthToken — Access token issued on login
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthToken {
    pub id: Option<i64>,
    pub access_token: String,
    pub user_id: Option<i64>,
}

// ---------------------------------------------------------------------------
// User — Profile of the logged-in user
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub login: Option<String>,
}
