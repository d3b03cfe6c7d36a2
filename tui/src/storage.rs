//! File-backed persistence for the current session.
//!
//! Saves are fire-and-forget: a failed write is logged and skipped, a
//! failed or missing load means "no saved state". The session is always
//! written as a whole snapshot, never as a delta.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use gridmine_core::Game;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SAVE_FILE: &str = "gridmine-save.json";

/// Full session snapshot as it goes to disk: the engine state plus the
/// preset index it was started from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedSession {
    pub game: Game,
    pub config_index: usize,
}

#[derive(Clone, Debug)]
pub struct SaveSlot {
    path: PathBuf,
}

impl SaveSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Option<SavedSession> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                log::warn!("could not read {}: {err}", self.path.display());
                return None;
            }
        };

        let session: SavedSession = match serde_json::from_slice(&bytes) {
            Ok(session) => session,
            Err(err) => {
                log::warn!("discarding unreadable save {}: {err}", self.path.display());
                return None;
            }
        };

        // Well-formed JSON is not enough: a save edited on disk can
        // decode into a session whose board no longer matches its
        // config or counters.
        if let Err(err) = session.game.validate() {
            log::warn!(
                "discarding inconsistent save {}: {err}",
                self.path.display()
            );
            return None;
        }

        Some(session)
    }

    pub fn save(&self, session: &SavedSession) {
        if let Err(err) = self.write_atomically(session) {
            log::warn!("save to {} skipped: {err}", self.path.display());
        }
    }

    pub fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => log::warn!("could not clear {}: {err}", self.path.display()),
        }
    }

    // Write-then-rename, so a crash mid-save never leaves a truncated file
    // behind.
    fn write_atomically(&self, session: &SavedSession) -> anyhow::Result<()> {
        let json = serde_json::to_vec(session)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
