// SPDX-License-Identifier: MPL-2.0
//! Persistence of the signed-in session between launches.
//!
//! The session is kept as JSON in the application data directory
//! (`session.json`), apart from the user-editable `settings.toml`.
//! A missing, unreadable or malformed file is treated as "logged out".

use super::Session;
use crate::app::paths;
use crate::error::Result;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

/// Session file name within the app data directory.
const SESSION_FILE: &str = "session.json";

#[derive(Debug, Clone)]
pub struct SessionStore {
    /// `None` when no data directory could be determined; the session then
    /// only lives in memory.
    path: Option<PathBuf>,
}

impl SessionStore {
    /// Store located in the resolved data directory.
    pub fn new() -> Self {
        Self::with_override(None)
    }

    /// Store located in `base_dir` (if `Some`) instead of the data directory.
    pub fn with_override(base_dir: Option<PathBuf>) -> Self {
        let path = paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(SESSION_FILE);
            path
        });
        Self { path }
    }

    /// Store that never touches disk.
    pub fn in_memory() -> Self {
        Self { path: None }
    }

    pub fn load(&self) -> Option<Session> {
        let path = self.path.as_ref()?;
        if !path.exists() {
            return None;
        }

        let file = match fs::File::open(path) {
            Ok(file) => file,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "cannot open persisted session");
                return None;
            }
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(session) => Some(session),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "discarding malformed persisted session");
                None
            }
        }
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, session)?;
        writer.flush()?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        match &self.path {
            Some(path) if path.exists() => Ok(fs::remove_file(path)?),
            _ => Ok(()),
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
