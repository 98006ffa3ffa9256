//! Bearer token storage for an authenticated backend session.
//!
//! The token issued by `users/login` is kept in memory and, when a session
//! directory is configured, mirrored to a small file so later runs can reuse
//! it without logging in again.

use crate::config;
use crate::error::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Holds the current access token and optionally persists it to disk.
pub struct SessionStore {
    /// Directory the token file lives in. `None` keeps the session in memory only.
    pub session_dir: Option<PathBuf>,
    token: Option<String>,
}

impl SessionStore {
    /// Create a session store.
    ///
    /// If `session_dir` is set, the directory is created when missing and a
    /// previously saved token is loaded from it.
    pub fn new(session_dir: Option<PathBuf>) -> Result<Self> {
        let token = match &session_dir {
            Some(dir) => {
                fs::create_dir_all(dir)?;
                read_token(&dir.join(config::SESSION_FILE))
            }
            None => None,
        };
        Ok(Self { session_dir, token })
    }

    /// A session that never touches the filesystem.
    pub fn in_memory() -> Self {
        Self {
            session_dir: None,
            token: None,
        }
    }

    /// The current bearer token, if logged in.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Replace the current token, persisting it when a session directory is set.
    ///
    /// The file is written to a temp file in the same directory and then
    /// renamed over the old one, so a crash never leaves a truncated token.
    pub fn set_token(&mut self, token: &str) -> Result<()> {
        let token = token.trim();
        if let Some(dir) = &self.session_dir {
            let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
            tmp.write_all(token.as_bytes())?;
            tmp.persist(dir.join(config::SESSION_FILE))
                .map_err(|e| e.error)?;
        }
        self.token = Some(token.to_string());
        Ok(())
    }

    /// Forget the token and remove the persisted copy.
    pub fn clear(&mut self) -> Result<()> {
        self.token = None;
        if let Some(dir) = &self.session_dir {
            let path = dir.join(config::SESSION_FILE);
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}

fn read_token(path: &Path) -> Option<String> {
    fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
