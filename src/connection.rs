//! HTTP connection to the Sol-Spy backend.
//!
//! Owns the blocking HTTP client and the [`SessionStore`]. Every request is
//! JSON in and JSON out; authorized requests carry the session's bearer token.
//! Non-success statuses are mapped onto [`SolSpyError`] variants, using the
//! backend's `{"detail": ...}` body as the message when present.

use crate::error::{Result, SolSpyError};
use crate::session::SessionStore;
use reqwest::blocking::Client;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::cell::RefCell;
use std::time::Duration;

/// Wraps the HTTP client, backend base URL and bearer-token session.
pub struct Connection {
    client: Client,
    base_url: String,
    /// Session holding the bearer token sent with authorized requests.
    pub session: RefCell<SessionStore>,
}

impl Connection {
    /// Create a connection to the backend rooted at `base_url`.
    pub fn new(base_url: &str, timeout: Duration, session: SessionStore) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(SolSpyError::InvalidArgument(
                "backend base URL must not be empty".into(),
            ));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
            session: RefCell::new(session),
        })
    }

    /// The backend base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path relative to the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// The current access token, if the session is authenticated.
    pub fn access_token(&self) -> Option<String> {
        self.session.borrow().token().map(str::to_string)
    }

    /// Authorized `GET`, deserializing the response body into `T`.
    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let value = self.execute(Method::GET, path, None, true)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Authorized `POST` with a JSON body, deserializing the response into `T`.
    pub fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        let value = self.execute(Method::POST, path, Some(&body), true)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Unauthenticated `POST`, used for the login endpoint.
    pub fn post_anonymous<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        let value = self.execute(Method::POST, path, Some(&body), false)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Authorized `PUT`, returning the raw response body (`Null` when empty).
    pub fn put<B: Serialize + ?Sized>(&self, path: &str, body: Option<&B>) -> Result<Value> {
        let body = body.map(serde_json::to_value).transpose()?;
        self.execute(Method::PUT, path, body.as_ref(), true)
    }

    /// Authorized `DELETE`, returning the raw response body (`Null` when empty).
    pub fn delete(&self, path: &str) -> Result<Value> {
        self.execute(Method::DELETE, path, None, true)
    }

    /// Send a request and return the parsed JSON body.
    ///
    /// An empty body parses as `Value::Null`; several backend endpoints answer
    /// with no content on success.
    pub fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        authorized: bool,
    ) -> Result<Value> {
        let url = self.url(path);
        let mut request = self.client.request(method.clone(), &url);

        if authorized {
            let token = self.access_token().ok_or_else(|| {
                SolSpyError::Unauthorized("no access token; log in first".into())
            })?;
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(%method, %url, "sending backend request");
        let resp = request.send()?;
        let status = resp.status();
        let text = resp.text()?;

        if !status.is_success() {
            let detail = error_detail(&text, status);
            tracing::warn!(
                %method,
                %url,
                status = status.as_u16(),
                %detail,
                "backend request failed"
            );
            return Err(status_error(status, detail));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

fn status_error(status: StatusCode, detail: String) -> SolSpyError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SolSpyError::Unauthorized(detail),
        StatusCode::NOT_FOUND => SolSpyError::NotFound(detail),
        _ => SolSpyError::Api {
            status: status.as_u16(),
            detail,
        },
    }
}

/// Extract a human-readable message from an error response body.
fn error_detail(body: &str, status: StatusCode) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string();
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => match map.get("detail") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => trimmed.to_string(),
        },
        _ => trimmed.to_string(),
    }
}
