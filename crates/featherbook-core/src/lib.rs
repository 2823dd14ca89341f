//! # Featherbook Core Library
//!
//! This library provides the core business logic for Featherbook, a bird
//! enthusiast's companion. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary, with any GUI shell
//! being a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Collection Engine**: A wall-clock-based state machine for the feather
//!   reward mechanic. The caller periodically invokes `tick()` to advance
//!   announcement fades and commit earned feathers.
//! - **Minigame Engine**: The memory-matching game state machine. Also
//!   caller-ticked; pair evaluation and the end-of-game transition are
//!   deadlines stored on the engine, never internal threads.
//! - **Encyclopedia / Journal / Playlist**: session-scoped state containers
//!   over the static bird, feather, and track catalogs.
//! - **Storage**: TOML-based configuration and a JSON session snapshot.
//!
//! ## Key Components
//!
//! - [`CollectionEngine`]: feather draw, timed announcement, atomic commit
//! - [`GameEngine`]: deck dealing, flip handling, elapsed-time tracking
//! - [`Session`]: aggregate of all session state, serialized as one snapshot
//! - [`Config`]: application configuration management

pub mod catalog;
pub mod collection;
pub mod encyclopedia;
pub mod error;
pub mod events;
pub mod journal;
pub mod minigame;
pub mod playlist;
pub mod storage;

mod clock;

pub use catalog::{Bird, BirdId, FaceId, Feather, FeatherId, Rarity, Recording, Track, TrackId};
pub use collection::{Announcement, AnnouncementView, CollectionEngine, CollectionTimings, FadePhase};
pub use encyclopedia::Encyclopedia;
pub use error::{CollectionError, ConfigError, CoreError, GameError, Result, StorageError};
pub use events::Event;
pub use journal::{EntryId, EntryPatch, EntryTag, Journal, JournalEntry, NewEntry, Season};
pub use minigame::{Card, CardId, GameConfig, GameEngine, GamePhase, GridConfig, Reaction};
pub use playlist::Playlist;
pub use storage::{Config, Session, SessionStore};
