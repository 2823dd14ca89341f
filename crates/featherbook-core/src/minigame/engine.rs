//! Minigame engine implementation.
//!
//! The engine is a wall-clock-based state machine. It does not use
//! internal threads - the caller is responsible for calling `tick()`
//! periodically.
//!
//! ## State Transitions
//!
//! ```text
//! Start -> Playing -> Over -> Playing (replay)
//!            |  ^-----------/
//!            v
//!          Start (exit, no time recorded)
//! ```
//!
//! Pair evaluation and the end-of-game transition are deadlines stored on
//! the engine, stamped with the generation that scheduled them. `begin`
//! and `exit` bump the generation, so a deadline left over from an
//! abandoned game is discarded unprocessed rather than mutating the new
//! one.

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::deck::{deal, Card, CardId, GridConfig};
use super::reaction::Reaction;
use crate::catalog::FaceId;
use crate::clock::now_ms;
use crate::error::GameError;
use crate::events::Event;

/// Minigame configuration: grid shape plus pacing delays.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub grid: GridConfig,
    /// Delay before a flipped pair resolves, so the player sees both
    /// faces.
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: u64,
    /// Delay between the last match and the end screen, covering the
    /// final reveal animation.
    #[serde(default = "default_finish_delay_ms")]
    pub finish_delay_ms: u64,
}

fn default_reveal_delay_ms() -> u64 {
    500
}
fn default_finish_delay_ms() -> u64 {
    500
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            reveal_delay_ms: default_reveal_delay_ms(),
            finish_delay_ms: default_finish_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    Start,
    Playing,
    Over,
}

/// A scheduled transition. Records from an older generation are stale
/// and must never be applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct Deadline {
    at_ms: u64,
    generation: u64,
}

/// Core minigame engine.
///
/// Operates on wall-clock deltas -- no internal thread. The caller is
/// responsible for calling `tick()` periodically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEngine {
    config: GameConfig,
    faces: Vec<FaceId>,
    phase: GamePhase,
    deck: Vec<Card>,
    /// Face-up, unmatched cards. Never more than two.
    flipped: Vec<CardId>,
    /// Permanently revealed cards, in match order.
    matched: Vec<CardId>,
    /// True while a flipped pair awaits evaluation.
    input_locked: bool,
    /// Instant the Playing phase began (epoch milliseconds). Elapsed
    /// time is always recomputed from this, never accumulated.
    started_epoch_ms: Option<u64>,
    /// Completion time of the most recent finished run, whole seconds.
    last_result_secs: Option<u64>,
    #[serde(default)]
    reveal_deadline: Option<Deadline>,
    #[serde(default)]
    finish_deadline: Option<Deadline>,
    /// Bumped by `begin` and `exit`; stale deadlines are detected by
    /// comparing against it.
    generation: u64,
}

impl GameEngine {
    /// Create an engine for the given configuration and face catalog.
    ///
    /// # Errors
    /// Rejects a grid with an odd card count or more pairs than the
    /// catalog has faces. Configuration faults surface here, at setup,
    /// never at play time.
    pub fn new(config: GameConfig, faces: Vec<FaceId>) -> Result<Self, GameError> {
        config.grid.validate(faces.len())?;
        Ok(Self {
            config,
            faces,
            phase: GamePhase::Start,
            deck: Vec::new(),
            flipped: Vec::new(),
            matched: Vec::new(),
            input_locked: false,
            started_epoch_ms: None,
            last_result_secs: None,
            reveal_deadline: None,
            finish_deadline: None,
            generation: 0,
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn grid(&self) -> GridConfig {
        self.config.grid
    }

    /// The dealt deck in display order. Empty outside a run.
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    pub fn flipped(&self) -> &[CardId] {
        &self.flipped
    }

    pub fn matched(&self) -> &[CardId] {
        &self.matched
    }

    pub fn is_input_locked(&self) -> bool {
        self.input_locked
    }

    /// Completion time of the previous run, shown on the Start and Over
    /// screens.
    pub fn last_result_secs(&self) -> Option<u64> {
        self.last_result_secs
    }

    /// Live elapsed whole seconds while Playing.
    pub fn elapsed_secs(&self) -> Option<u64> {
        self.elapsed_secs_at(now_ms())
    }

    pub fn elapsed_secs_at(&self, now_ms: u64) -> Option<u64> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        self.started_epoch_ms
            .map(|start| round_secs(now_ms.saturating_sub(start)))
    }

    /// Reaction tier for the finished run. Only meaningful in Over.
    pub fn reaction(&self) -> Option<Reaction> {
        if self.phase != GamePhase::Over {
            return None;
        }
        self.last_result_secs.map(Reaction::from)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        self.snapshot_at(now_ms())
    }

    pub fn snapshot_at(&self, now_ms: u64) -> Event {
        Event::GameSnapshot {
            phase: self.phase,
            rows: self.config.grid.rows,
            cols: self.config.grid.cols,
            flipped: self.flipped.clone(),
            matched_count: self.matched.len(),
            card_count: self.deck.len(),
            input_locked: self.input_locked,
            elapsed_secs: self.elapsed_secs_at(now_ms),
            last_result_secs: self.last_result_secs,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Deal a fresh deck and start the timer. From Over this is the
    /// replay action; a running game must `exit` first.
    pub fn begin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Event> {
        self.begin_at(rng, now_ms())
    }

    pub fn begin_at<R: Rng + ?Sized>(&mut self, rng: &mut R, now_ms: u64) -> Option<Event> {
        match self.phase {
            GamePhase::Start | GamePhase::Over => {
                self.generation += 1;
                self.deck = deal(&self.faces, &self.config.grid, rng);
                self.flipped.clear();
                self.matched.clear();
                self.input_locked = false;
                self.reveal_deadline = None;
                self.finish_deadline = None;
                self.started_epoch_ms = Some(now_ms);
                self.phase = GamePhase::Playing;
                Some(Event::GameStarted {
                    rows: self.config.grid.rows,
                    cols: self.config.grid.cols,
                    pair_count: self.config.grid.pair_count(),
                    at: Utc::now(),
                })
            }
            GamePhase::Playing => None,
        }
    }

    /// Turn a card face-up. Ignored (returns `None`) while input is
    /// locked, outside Playing, or for a card already face-up or
    /// matched.
    pub fn flip(&mut self, card_id: CardId) -> Option<Event> {
        self.flip_at(card_id, now_ms())
    }

    pub fn flip_at(&mut self, card_id: CardId, now_ms: u64) -> Option<Event> {
        if self.phase != GamePhase::Playing || self.input_locked {
            return None;
        }
        if self.flipped.contains(&card_id) || self.matched.contains(&card_id) {
            return None;
        }
        let face = self.deck.iter().find(|c| c.id == card_id)?.face.clone();

        self.flipped.push(card_id);
        if self.flipped.len() == 2 {
            self.input_locked = true;
            self.reveal_deadline = Some(Deadline {
                at_ms: now_ms + self.config.reveal_delay_ms,
                generation: self.generation,
            });
        }
        Some(Event::CardFlipped {
            card_id,
            face,
            flipped_count: self.flipped.len(),
            at: Utc::now(),
        })
    }

    /// Abandon the current run (or leave the end screen). No time is
    /// recorded; pending deadlines are invalidated.
    pub fn exit(&mut self) -> Option<Event> {
        match self.phase {
            GamePhase::Playing | GamePhase::Over => {
                self.generation += 1;
                self.phase = GamePhase::Start;
                self.deck.clear();
                self.flipped.clear();
                self.matched.clear();
                self.input_locked = false;
                self.started_epoch_ms = None;
                self.reveal_deadline = None;
                self.finish_deadline = None;
                Some(Event::GameExited { at: Utc::now() })
            }
            GamePhase::Start => None,
        }
    }

    /// Call periodically. Fires due deadlines for the current generation
    /// only; a pair evaluation that completes the board schedules the
    /// finish transition, so both can fire within one tick.
    pub fn tick(&mut self) -> Vec<Event> {
        self.tick_at(now_ms())
    }

    pub fn tick_at(&mut self, now_ms: u64) -> Vec<Event> {
        let mut events = Vec::new();

        if let Some(deadline) = self.reveal_deadline {
            if deadline.generation != self.generation {
                self.reveal_deadline = None;
            } else if now_ms >= deadline.at_ms {
                self.reveal_deadline = None;
                events.extend(self.evaluate_pair(deadline.at_ms));
            }
        }

        if let Some(deadline) = self.finish_deadline {
            if deadline.generation != self.generation {
                self.finish_deadline = None;
            } else if now_ms >= deadline.at_ms {
                self.finish_deadline = None;
                self.phase = GamePhase::Over;
                let elapsed = self.last_result_secs.unwrap_or(0);
                events.push(Event::GameCompleted {
                    elapsed_secs: elapsed,
                    reaction: Reaction::from(elapsed),
                    at: Utc::now(),
                });
            }
        }

        events
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Resolve the two face-up cards at the instant the reveal deadline
    /// fired. Equal faces move to `matched`; either way the pair leaves
    /// `flipped` and input unlocks.
    fn evaluate_pair(&mut self, eval_ms: u64) -> Option<Event> {
        if self.phase != GamePhase::Playing || self.flipped.len() != 2 {
            self.input_locked = false;
            self.flipped.clear();
            return None;
        }
        let (first, second) = (self.flipped[0], self.flipped[1]);
        let face_of = |id: CardId| {
            self.deck
                .iter()
                .find(|c| c.id == id)
                .map(|c| c.face.clone())
        };
        let is_match = match (face_of(first), face_of(second)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        };

        self.flipped.clear();
        self.input_locked = false;

        if !is_match {
            return Some(Event::PairMissed {
                card_ids: [first, second],
                at: Utc::now(),
            });
        }

        self.matched.push(first);
        self.matched.push(second);

        if self.matched.len() == self.deck.len() {
            // Capture the completion time now; the phase change waits
            // for the finish delay.
            let elapsed = self
                .started_epoch_ms
                .map(|start| round_secs(eval_ms.saturating_sub(start)))
                .unwrap_or(0);
            self.last_result_secs = Some(elapsed);
            self.finish_deadline = Some(Deadline {
                at_ms: eval_ms + self.config.finish_delay_ms,
                generation: self.generation,
            });
        }

        let face = face_of(first).unwrap_or_default();
        Some(Event::PairMatched {
            card_ids: [first, second],
            face,
            matched_count: self.matched.len(),
            at: Utc::now(),
        })
    }
}

/// Milliseconds to whole seconds, rounded half-up.
fn round_secs(ms: u64) -> u64 {
    (ms + 500) / 1000
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::face_catalog;
    use rand::SeedableRng;
    use rand_pcg::Mcg128Xsl64;

    fn engine() -> GameEngine {
        GameEngine::new(GameConfig::default(), face_catalog()).unwrap()
    }

    fn rng() -> Mcg128Xsl64 {
        Mcg128Xsl64::seed_from_u64(11)
    }

    #[test]
    fn bad_grids_fail_at_setup() {
        let odd = GameConfig {
            grid: GridConfig { rows: 3, cols: 3 },
            ..GameConfig::default()
        };
        assert!(matches!(
            GameEngine::new(odd, face_catalog()),
            Err(GameError::OddCardCount { rows: 3, cols: 3 })
        ));

        let wide = GameConfig {
            grid: GridConfig { rows: 4, cols: 4 },
            ..GameConfig::default()
        };
        assert!(matches!(
            GameEngine::new(wide, face_catalog()),
            Err(GameError::NotEnoughFaces { needed: 8, .. })
        ));
    }

    #[test]
    fn begin_deals_and_starts_timer() {
        let mut e = engine();
        assert_eq!(e.phase(), GamePhase::Start);
        assert!(e.begin_at(&mut rng(), 1_000).is_some());
        assert_eq!(e.phase(), GamePhase::Playing);
        assert_eq!(e.deck().len(), 12);
        assert_eq!(e.elapsed_secs_at(31_000), Some(30));
    }

    #[test]
    fn begin_is_ignored_mid_game() {
        let mut e = engine();
        e.begin_at(&mut rng(), 0);
        assert!(e.begin_at(&mut rng(), 10).is_none());
    }

    #[test]
    fn flip_guards() {
        let mut e = engine();
        let mut r = rng();
        e.begin_at(&mut r, 0);
        let first = e.deck()[0].id;

        assert!(e.flip_at(first, 10).is_some());
        // Same card again: ignored.
        assert!(e.flip_at(first, 20).is_none());
        // Unknown id: ignored.
        assert!(e.flip_at(CardId::new_v4(), 30).is_none());

        let second = e.deck()[1].id;
        assert!(e.flip_at(second, 40).is_some());
        assert!(e.is_input_locked());
        // Locked: third flip ignored.
        let third = e.deck()[2].id;
        assert!(e.flip_at(third, 50).is_none());
        assert_eq!(e.flipped().len(), 2);
    }

    #[test]
    fn exit_from_start_is_a_noop() {
        let mut e = engine();
        assert!(e.exit().is_none());
        e.begin_at(&mut rng(), 0);
        assert!(e.exit().is_some());
        assert_eq!(e.phase(), GamePhase::Start);
        assert!(e.deck().is_empty());
        assert!(e.last_result_secs().is_none());
    }
}
