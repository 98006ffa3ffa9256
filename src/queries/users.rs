//! Login and profile queries against the `users` router.

use crate::config;
use crate::connection::Connection;
use crate::error::{Result, SolSpyError};
use crate::models::{AuthToken, Credentials, User};

// ---------------------------------------------------------------------------
// UserQuery
// ---------------------------------------------------------------------------

/// Query interface for authentication and the current user's profile.
pub struct UserQuery<'a> {
    conn: &'a Connection,
}

impl<'a> UserQuery<'a> {
    /// Create a new `UserQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Exchange a login and password for an access token.
    ///
    /// On success the token is stored in the connection's session, so every
    /// later request is authorized with it.
    pub fn login(&self, login: &str, password: &str) -> Result<AuthToken> {
        if login.trim().is_empty() || password.is_empty() {
            return Err(SolSpyError::InvalidArgument(
                "login and password must not be empty".into(),
            ));
        }
        let credentials = Credentials {
            login: login.trim().to_string(),
            password: password.to_string(),
        };
        let token: AuthToken = self.conn.post_anonymous(config::LOGIN, &credentials)?;
        self.conn.session.borrow_mut().set_token(&token.access_token)?;
        tracing::info!(user_id = ?token.user_id, "logged in");
        Ok(token)
    }

    /// Profile of the user owning the current token.
    pub fn current(&self) -> Result<User> {
        self.conn.get(config::CURRENT_USER)
    }
}
