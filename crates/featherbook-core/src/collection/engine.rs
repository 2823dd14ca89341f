//! Collection engine implementation.
//!
//! The engine is a wall-clock-based state machine. It does not use internal
//! threads or timers - the caller is responsible for calling `tick()`
//! periodically to advance announcement fades and commit earned feathers.
//!
//! ## Announcement lifecycle
//!
//! ```text
//! draw -> FadeIn (300ms) -> Hold (2000ms) -> FadeOut (300ms) -> commit
//! ```
//!
//! At most one announcement is in flight. A draw made while one is in
//! flight waits in a single queue slot; a further draw is dropped and its
//! feather stays eligible for a later draw. The commit itself is a single
//! in-memory push, so the owned set is never observable half-updated.

use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{Feather, FeatherId};
use crate::clock::now_ms;
use crate::error::CollectionError;
use crate::events::Event;

/// Announcement fade timings, in milliseconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CollectionTimings {
    #[serde(default = "default_fade_in_ms")]
    pub fade_in_ms: u64,
    #[serde(default = "default_hold_ms")]
    pub hold_ms: u64,
    #[serde(default = "default_fade_out_ms")]
    pub fade_out_ms: u64,
}

fn default_fade_in_ms() -> u64 {
    300
}
fn default_hold_ms() -> u64 {
    2000
}
fn default_fade_out_ms() -> u64 {
    300
}

impl Default for CollectionTimings {
    fn default() -> Self {
        Self {
            fade_in_ms: default_fade_in_ms(),
            hold_ms: default_hold_ms(),
            fade_out_ms: default_fade_out_ms(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FadePhase {
    FadeIn,
    Hold,
    FadeOut,
}

/// The in-flight announcement. Phase deadlines are epoch milliseconds;
/// the fade value is always recomputed from them, never accumulated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    pub feather_id: FeatherId,
    pub phase: FadePhase,
    phase_started_ms: u64,
    phase_deadline_ms: u64,
}

impl Announcement {
    /// Fade progress in [0, 1] at the given instant.
    pub fn fade_at(&self, now_ms: u64) -> f64 {
        let total = self.phase_deadline_ms.saturating_sub(self.phase_started_ms);
        let progress = if total == 0 {
            1.0
        } else {
            let elapsed = now_ms.saturating_sub(self.phase_started_ms);
            (elapsed as f64 / total as f64).min(1.0)
        };
        match self.phase {
            FadePhase::FadeIn => progress,
            FadePhase::Hold => 1.0,
            FadePhase::FadeOut => 1.0 - progress,
        }
    }
}

/// Read-only projection of the announcement for presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnouncementView {
    pub feather_id: FeatherId,
    pub visible: bool,
    pub fade: f64,
}

/// Core collection engine.
///
/// Operates on wall-clock deltas -- no internal thread. The caller is
/// responsible for calling `tick()` periodically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionEngine {
    catalog: Vec<Feather>,
    timings: CollectionTimings,
    /// Owned feather ids in acquisition order. Uniqueness enforced at
    /// commit time.
    owned: Vec<FeatherId>,
    #[serde(default)]
    announcement: Option<Announcement>,
    /// Single queue slot for a draw made while an announcement is in
    /// flight.
    #[serde(default)]
    queued: Option<FeatherId>,
}

impl CollectionEngine {
    pub fn new(catalog: Vec<Feather>, timings: CollectionTimings) -> Self {
        Self {
            catalog,
            timings,
            owned: Vec::new(),
            announcement: None,
            queued: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn catalog(&self) -> &[Feather] {
        &self.catalog
    }

    pub fn feather(&self, id: &str) -> Option<&Feather> {
        self.catalog.iter().find(|f| f.id == id)
    }

    /// Owned ids in acquisition order.
    pub fn owned(&self) -> &[FeatherId] {
        &self.owned
    }

    pub fn is_owned(&self, id: &str) -> bool {
        self.owned.iter().any(|o| o == id)
    }

    /// True once every catalog feather has been committed.
    pub fn is_complete(&self) -> bool {
        self.owned.len() == self.catalog.len()
    }

    pub fn announcement(&self) -> Option<AnnouncementView> {
        self.announcement_at(now_ms())
    }

    pub fn announcement_at(&self, now_ms: u64) -> Option<AnnouncementView> {
        self.announcement.as_ref().map(|a| AnnouncementView {
            feather_id: a.feather_id.clone(),
            visible: true,
            fade: a.fade_at(now_ms),
        })
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        self.snapshot_at(now_ms())
    }

    pub fn snapshot_at(&self, now_ms: u64) -> Event {
        let view = self.announcement_at(now_ms);
        Event::CollectionSnapshot {
            owned: self.owned.clone(),
            catalog_count: self.catalog.len(),
            pending: view.as_ref().map(|v| v.feather_id.clone()),
            visible: view.is_some(),
            fade: view.map(|v| v.fade).unwrap_or(0.0),
            queued: self.queued.clone(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Select uniformly at random among feathers that are not owned and
    /// not already on their way to being owned (in flight or queued).
    ///
    /// # Errors
    /// `NoneRemaining` when no eligible feather exists. Callers treat
    /// this as a silent no-op, not a user-facing error.
    pub fn draw_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Feather, CollectionError> {
        let eligible: Vec<&Feather> = self
            .catalog
            .iter()
            .filter(|f| !self.is_owned(&f.id) && !self.is_pending(&f.id))
            .collect();
        eligible
            .choose(rng)
            .copied()
            .ok_or(CollectionError::NoneRemaining)
    }

    /// Start (or queue) the announcement for a drawn feather.
    pub fn announce(&mut self, id: &str) -> Result<Event, CollectionError> {
        self.announce_at(id, now_ms())
    }

    pub fn announce_at(&mut self, id: &str, now_ms: u64) -> Result<Event, CollectionError> {
        let feather = self
            .feather(id)
            .ok_or_else(|| CollectionError::UnknownFeather(id.to_string()))?;
        if self.is_owned(id) {
            return Err(CollectionError::AlreadyOwned(id.to_string()));
        }
        let rarity = feather.rarity;

        if self.announcement.is_some() {
            if self.queued.is_none() && !self.is_pending(id) {
                self.queued = Some(id.to_string());
                return Ok(Event::AnnouncementQueued {
                    feather_id: id.to_string(),
                    at: Utc::now(),
                });
            }
            return Ok(Event::AnnouncementDropped {
                feather_id: id.to_string(),
                at: Utc::now(),
            });
        }

        Ok(self.start_announcement(id.to_string(), rarity, now_ms))
    }

    /// Draw and announce in one step. This is the operation bound to
    /// session start and to journal-entry creation.
    pub fn collect_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Event, CollectionError> {
        self.collect_random_at(rng, now_ms())
    }

    pub fn collect_random_at<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        now_ms: u64,
    ) -> Result<Event, CollectionError> {
        let id = self.draw_random(rng)?.id.clone();
        self.announce_at(&id, now_ms)
    }

    /// Call periodically. Advances fade phases whose deadlines have
    /// passed; a completed fade-out commits its feather and promotes the
    /// queued announcement, so one tick after a long gap can emit
    /// several events.
    pub fn tick(&mut self) -> Vec<Event> {
        self.tick_at(now_ms())
    }

    pub fn tick_at(&mut self, now_ms: u64) -> Vec<Event> {
        let mut events = Vec::new();
        loop {
            let due = match self.announcement.as_ref() {
                Some(a) if now_ms >= a.phase_deadline_ms => (a.phase, a.phase_deadline_ms),
                _ => break,
            };
            match due {
                (FadePhase::FadeIn, deadline) => {
                    if let Some(a) = self.announcement.as_mut() {
                        a.phase = FadePhase::Hold;
                        a.phase_started_ms = deadline;
                        a.phase_deadline_ms = deadline + self.timings.hold_ms;
                    }
                }
                (FadePhase::Hold, deadline) => {
                    if let Some(a) = self.announcement.as_mut() {
                        a.phase = FadePhase::FadeOut;
                        a.phase_started_ms = deadline;
                        a.phase_deadline_ms = deadline + self.timings.fade_out_ms;
                    }
                }
                (FadePhase::FadeOut, deadline) => {
                    if let Some(done) = self.announcement.take() {
                        events.push(self.commit(done.feather_id));
                    }
                    if let Some(next) = self.queued.take() {
                        let rarity = self
                            .feather(&next)
                            .map(|f| f.rarity)
                            .unwrap_or(crate::catalog::Rarity::Common);
                        events.push(self.start_announcement(next, rarity, deadline));
                    }
                }
            }
        }
        events
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// True when the id is in flight or waiting in the queue slot.
    fn is_pending(&self, id: &str) -> bool {
        self.announcement
            .as_ref()
            .is_some_and(|a| a.feather_id == id)
            || self.queued.as_deref() == Some(id)
    }

    fn start_announcement(
        &mut self,
        id: FeatherId,
        rarity: crate::catalog::Rarity,
        start_ms: u64,
    ) -> Event {
        self.announcement = Some(Announcement {
            feather_id: id.clone(),
            phase: FadePhase::FadeIn,
            phase_started_ms: start_ms,
            phase_deadline_ms: start_ms + self.timings.fade_in_ms,
        });
        Event::AnnouncementStarted {
            feather_id: id,
            rarity,
            at: Utc::now(),
        }
    }

    /// Add the id to the owned set, exactly once.
    fn commit(&mut self, id: FeatherId) -> Event {
        if !self.is_owned(&id) {
            self.owned.push(id.clone());
        }
        Event::FeatherCommitted {
            feather_id: id,
            owned_count: self.owned.len(),
            catalog_count: self.catalog.len(),
            at: Utc::now(),
        }
    }
}
