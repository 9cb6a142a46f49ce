use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};

/// What a completed sign-in leaves behind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredSession {
    pub account_id: String,
}

/// JSON file holding one signed-in session per network id.
#[derive(Debug, Clone)]
pub struct FileKeyStore {
    path: PathBuf,
}

type Sessions = BTreeMap<String, StoredSession>;

impl FileKeyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_all(&self) -> Result<Sessions> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Sessions::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Like `load_all`, but an unparsable file counts as empty so the next
    /// write replaces it.
    fn load_for_update(&self) -> Result<Sessions> {
        match self.load_all() {
            Err(Error::Json(e)) => {
                warn!(path = %self.path.display(), error = %e, "discarding unreadable session file");
                Ok(Sessions::new())
            }
            other => other,
        }
    }

    fn save_all(&self, sessions: &Sessions) -> Result<()> {
        if sessions.is_empty() {
            return match fs::remove_file(&self.path) {
                Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
                _ => Ok(()),
            };
        }
        let writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(writer, sessions)?;
        Ok(())
    }

    pub fn get(&self, network_id: &str) -> Result<Option<StoredSession>> {
        Ok(self.load_all()?.remove(network_id))
    }

    pub fn set(&self, network_id: &str, session: StoredSession) -> Result<()> {
        let mut sessions = self.load_for_update()?;
        sessions.insert(network_id.to_string(), session);
        self.save_all(&sessions)
    }

    /// Drop the session for `network_id`. A corrupt file is cleared as well.
    pub fn remove(&self, network_id: &str) -> Result<()> {
        let mut sessions = match self.load_all() {
            Err(Error::Json(_)) => {
                warn!(path = %self.path.display(), "removing unreadable session file");
                return self.save_all(&Sessions::new());
            }
            other => other?,
        };
        if sessions.remove(network_id).is_some() {
            self.save_all(&sessions)?;
        }
        Ok(())
    }
}
