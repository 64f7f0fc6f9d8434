//! File-backed credential store.
//!
//! Persists the three session artifacts (access token, refresh token, cached
//! user profile) as a single JSON document so the write is atomic from the
//! client's point of view. All mutation goes through the login, registration
//! and logout paths; everything else only reads.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::user::UserProfile;
use crate::session::Session;

#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    access_token: String,
    refresh_token: String,
    /// Kept as a raw value: a malformed profile must degrade to "no profile",
    /// not invalidate the tokens (fail closed on the role, not the session).
    #[serde(default)]
    user: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist all three fields at once. A partial write is treated as a bug,
    /// so the document is written to a sibling temp file and renamed over the
    /// target.
    pub fn set(&self, session: &Session) -> anyhow::Result<()> {
        let stored = StoredSession {
            access_token: session.access_token.clone(),
            refresh_token: session.refresh_token.clone(),
            user: session
                .user
                .as_ref()
                .map(serde_json::to_value)
                .transpose()?,
        };
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(&stored)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Current session, or `None` when absent. An unreadable or unparseable
    /// document is treated identically to absent.
    pub fn get(&self) -> Option<Session> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("session file unreadable, treating as logged out: {e}");
                return None;
            }
        };
        let stored: StoredSession = match serde_json::from_slice(&bytes) {
            Ok(s) => s,
            Err(e) => {
                warn!("session file corrupt, treating as logged out: {e}");
                return None;
            }
        };
        let user: Option<UserProfile> = stored.user.and_then(|v| {
            serde_json::from_value(v)
                .map_err(|e| warn!("stored profile malformed, ignoring it: {e}"))
                .ok()
        });
        Some(Session {
            access_token: stored.access_token,
            refresh_token: stored.refresh_token,
            user,
        })
    }

    /// Remove all persisted fields (logout). Missing file is fine.
    pub fn clear(&self) -> anyhow::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
