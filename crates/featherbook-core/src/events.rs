use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{BirdId, FaceId, FeatherId, Rarity, TrackId};
use crate::journal::EntryId;
use crate::minigame::{CardId, GamePhase, Reaction};

/// Every state change in the system produces an Event.
/// The CLI prints them as JSON; a GUI shell would subscribe to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    // ── Collection ───────────────────────────────────────────────────
    /// A not-yet-owned feather was drawn and its announcement started.
    AnnouncementStarted {
        feather_id: FeatherId,
        rarity: Rarity,
        at: DateTime<Utc>,
    },
    /// A draw happened while an announcement was in flight; the item
    /// waits in the single queue slot.
    AnnouncementQueued {
        feather_id: FeatherId,
        at: DateTime<Utc>,
    },
    /// The queue slot was already full; the request was discarded and
    /// the item remains drawable later.
    AnnouncementDropped {
        feather_id: FeatherId,
        at: DateTime<Utc>,
    },
    /// An announcement's fade-out finished and the feather entered the
    /// owned set. Exactly one of these per successful draw.
    FeatherCommitted {
        feather_id: FeatherId,
        owned_count: usize,
        catalog_count: usize,
        at: DateTime<Utc>,
    },
    CollectionSnapshot {
        owned: Vec<FeatherId>,
        catalog_count: usize,
        pending: Option<FeatherId>,
        visible: bool,
        fade: f64,
        queued: Option<FeatherId>,
        at: DateTime<Utc>,
    },

    // ── Minigame ─────────────────────────────────────────────────────
    GameStarted {
        rows: u32,
        cols: u32,
        pair_count: usize,
        at: DateTime<Utc>,
    },
    CardFlipped {
        card_id: CardId,
        face: FaceId,
        flipped_count: usize,
        at: DateTime<Utc>,
    },
    PairMatched {
        card_ids: [CardId; 2],
        face: FaceId,
        matched_count: usize,
        at: DateTime<Utc>,
    },
    PairMissed {
        card_ids: [CardId; 2],
        at: DateTime<Utc>,
    },
    GameCompleted {
        elapsed_secs: u64,
        reaction: Reaction,
        at: DateTime<Utc>,
    },
    GameExited {
        at: DateTime<Utc>,
    },
    GameSnapshot {
        phase: GamePhase,
        rows: u32,
        cols: u32,
        flipped: Vec<CardId>,
        matched_count: usize,
        card_count: usize,
        input_locked: bool,
        elapsed_secs: Option<u64>,
        last_result_secs: Option<u64>,
        at: DateTime<Utc>,
    },

    // ── Encyclopedia / journal / playlist ────────────────────────────
    ObservedToggled {
        bird_id: BirdId,
        observed: bool,
        at: DateTime<Utc>,
    },
    EntryAdded {
        entry_id: EntryId,
        bird: String,
        at: DateTime<Utc>,
    },
    EntryUpdated {
        entry_id: EntryId,
        at: DateTime<Utc>,
    },
    EntryRemoved {
        entry_id: EntryId,
        at: DateTime<Utc>,
    },
    TrackAdded {
        track_id: TrackId,
        at: DateTime<Utc>,
    },
    TrackRemoved {
        track_id: TrackId,
        at: DateTime<Utc>,
    },
}
