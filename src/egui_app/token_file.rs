//! Saved-session file
//!
//! A successful login leaves the opaque token on disk so the next launch
//! can restore the session without asking for credentials again. The file
//! is a small TOML document under the platform data directory; see
//! [`crate::egui_app::config::Config::session_file`] for where it lives.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors from reading or writing the saved-session file
#[derive(Debug, Error)]
pub enum TokenFileError {
    #[error("Session file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed session file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not encode session file: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// On-disk shape of a saved session. Only the token is kept; the account
/// it belongs to is re-fetched from the service on startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredToken {
    pub token: String,
    pub saved_at: DateTime<Utc>,
}

impl StoredToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            saved_at: Utc::now(),
        }
    }
}

/// Read the saved token, if any. A missing file is not an error.
pub fn load(path: &Path) -> Result<Option<StoredToken>, TokenFileError> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(toml::from_str(&text)?)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Write the token, creating the parent directory if needed.
pub fn save(path: &Path, stored: &StoredToken) -> Result<(), TokenFileError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(stored)?;
    std::fs::write(path, text)?;
    Ok(())
}

/// Remove the saved token. A file that is already gone counts as cleared.
pub fn clear(path: &Path) -> Result<(), TokenFileError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}
