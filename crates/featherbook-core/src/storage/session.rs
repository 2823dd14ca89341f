//! JSON session snapshot.
//!
//! The app's state is session-scoped: one `Session` aggregates every
//! state container and serializes losslessly, so the CLI can load it,
//! apply one command, and save it back. The snapshot lives next to the
//! config file; deleting it starts a fresh session.

use std::path::{Path, PathBuf};

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::data_dir;
use super::Config;
use crate::catalog::{bird_catalog, face_catalog, feather_catalog};
use crate::collection::CollectionEngine;
use crate::encyclopedia::Encyclopedia;
use crate::error::{CollectionError, CoreError, StorageError};
use crate::events::Event;
use crate::journal::Journal;
use crate::minigame::GameEngine;
use crate::playlist::Playlist;

const SESSION_FILE: &str = "session.json";

/// All session-scoped state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub collection: CollectionEngine,
    pub game: GameEngine,
    pub encyclopedia: Encyclopedia,
    pub journal: Journal,
    pub playlist: Playlist,
}

impl Session {
    /// Build a fresh session from the static catalogs and perform the
    /// startup feather draw, the session's welcome reward.
    pub fn bootstrap<R: Rng + ?Sized>(
        config: &Config,
        rng: &mut R,
    ) -> Result<(Self, Vec<Event>), CoreError> {
        let mut session = Self {
            collection: CollectionEngine::new(feather_catalog(), config.collection),
            game: GameEngine::new(config.game, face_catalog())?,
            encyclopedia: Encyclopedia::new(bird_catalog()),
            journal: Journal::with_samples(),
            playlist: Playlist::new(),
        };

        let mut events = Vec::new();
        match session.collection.collect_random(rng) {
            Ok(event) => events.push(event),
            Err(CollectionError::NoneRemaining) => {}
            Err(e) => return Err(e.into()),
        }
        Ok((session, events))
    }

    /// Advance both wall-clock engines.
    pub fn tick(&mut self) -> Vec<Event> {
        let mut events = self.collection.tick();
        events.extend(self.game.tick());
        events
    }

    pub fn tick_at(&mut self, now_ms: u64) -> Vec<Event> {
        let mut events = self.collection.tick_at(now_ms);
        events.extend(self.game.tick_at(now_ms));
        events
    }
}

/// Loads and saves the session snapshot.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store at the default location in the data directory.
    pub fn open() -> Result<Self, StorageError> {
        let dir = data_dir().map_err(|_| StorageError::NoDataDir)?;
        Ok(Self {
            path: dir.join(SESSION_FILE),
        })
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot; `None` when no session has been saved yet.
    pub fn load(&self) -> Result<Option<Session>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path).map_err(|e| StorageError::LoadFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        let session = serde_json::from_str(&raw).map_err(|e| StorageError::LoadFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        Ok(Some(session))
    }

    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(session).map_err(|e| StorageError::SaveFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&self.path, raw).map_err(|e| StorageError::SaveFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Discard the saved session, if any.
    pub fn clear(&self) -> Result<(), StorageError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path).map_err(|e| StorageError::SaveFailed {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        }
        Ok(())
    }
}
