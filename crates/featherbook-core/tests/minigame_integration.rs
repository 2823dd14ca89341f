//! Integration tests for the minigame engine.
//!
//! These drive full games on a synthetic clock with seeded RNGs, so
//! every timed transition is deterministic.

use std::collections::HashMap;

use featherbook_core::catalog::face_catalog;
use featherbook_core::{CardId, Event, GameConfig, GameEngine, GamePhase, Reaction};
use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;

const REVEAL_MS: u64 = 500;
const FINISH_MS: u64 = 500;

fn engine() -> GameEngine {
    GameEngine::new(GameConfig::default(), face_catalog()).unwrap()
}

/// Card ids grouped into face pairs, in deck order.
fn pairs(engine: &GameEngine) -> Vec<[CardId; 2]> {
    let mut by_face: HashMap<String, Vec<CardId>> = HashMap::new();
    for card in engine.deck() {
        by_face.entry(card.face.clone()).or_default().push(card.id);
    }
    by_face
        .into_values()
        .map(|ids| [ids[0], ids[1]])
        .collect()
}

/// Flip both cards of a pair at `now` and tick past the reveal delay.
/// Returns the events the evaluation produced.
fn play_pair(engine: &mut GameEngine, pair: [CardId; 2], now: u64) -> Vec<Event> {
    assert!(engine.flip_at(pair[0], now).is_some());
    assert!(engine.flip_at(pair[1], now + 1).is_some());
    engine.tick_at(now + 1 + REVEAL_MS)
}

#[test]
fn matching_pair_moves_to_matched() {
    let mut e = engine();
    e.begin_at(&mut Mcg128Xsl64::seed_from_u64(1), 0);
    let pair = pairs(&e)[0];

    let events = play_pair(&mut e, pair, 100);
    assert!(matches!(events[0], Event::PairMatched { .. }));
    assert!(e.matched().contains(&pair[0]));
    assert!(e.matched().contains(&pair[1]));
    assert!(e.flipped().is_empty());
    assert!(!e.is_input_locked());
}

#[test]
fn mismatched_pair_returns_face_down() {
    let mut e = engine();
    e.begin_at(&mut Mcg128Xsl64::seed_from_u64(2), 0);
    let all = pairs(&e);
    let (a, b) = (all[0][0], all[1][0]);

    assert!(e.flip_at(a, 100).is_some());
    assert!(e.flip_at(b, 150).is_some());
    assert!(e.is_input_locked());

    // Before the delay elapses nothing resolves.
    assert!(e.tick_at(400).is_empty());
    assert_eq!(e.flipped().len(), 2);

    let events = e.tick_at(150 + REVEAL_MS);
    assert!(matches!(events[0], Event::PairMissed { .. }));
    assert!(e.flipped().is_empty());
    assert!(e.matched().is_empty());
    assert!(!e.is_input_locked());
}

#[test]
fn completing_the_board_ends_the_game() {
    let mut e = engine();
    e.begin_at(&mut Mcg128Xsl64::seed_from_u64(3), 10_000);

    // Solve one pair every 15 seconds; the last evaluation lands at
    // 10s + 6*15s = 100s in, so the run finishes in Fast territory.
    let mut now = 10_000;
    let mut completed = Vec::new();
    for pair in pairs(&e) {
        now += 15_000;
        completed.extend(play_pair(&mut e, pair, now - REVEAL_MS - 1));
    }

    // The final evaluation scheduled the finish transition.
    assert_eq!(e.phase(), GamePhase::Playing);
    let events = e.tick_at(now + FINISH_MS);
    assert!(
        matches!(events[0], Event::GameCompleted { elapsed_secs: 90, .. }),
        "expected completion at 90s, got {events:?}"
    );
    assert_eq!(e.phase(), GamePhase::Over);
    assert_eq!(e.last_result_secs(), Some(90));
    assert_eq!(e.reaction(), Some(Reaction::Fast));
}

#[test]
fn elapsed_is_recomputed_from_the_start_instant() {
    let mut e = engine();
    e.begin_at(&mut Mcg128Xsl64::seed_from_u64(4), 1_000_000);

    // No ticks in between -- a suspended process resumes with the
    // correct wall-clock elapsed value.
    assert_eq!(e.elapsed_secs_at(1_000_000), Some(0));
    assert_eq!(e.elapsed_secs_at(1_045_000), Some(45));
    assert_eq!(e.elapsed_secs_at(1_045_499), Some(45));
    assert_eq!(e.elapsed_secs_at(1_045_500), Some(46));
}

#[test]
fn replay_deals_an_independent_deck() {
    let mut rng = Mcg128Xsl64::seed_from_u64(5);
    let mut e = engine();
    e.begin_at(&mut rng, 0);

    let first_ids: Vec<CardId> = e.deck().iter().map(|c| c.id).collect();

    let mut now = 0;
    for pair in pairs(&e) {
        now += 2_000;
        e.tick_at(now); // drain any earlier finish scheduling
        let _ = play_pair(&mut e, pair, now);
    }
    e.tick_at(now + REVEAL_MS + FINISH_MS + 1);
    assert_eq!(e.phase(), GamePhase::Over);

    // Replay: same begin operation from Over.
    assert!(e.begin_at(&mut rng, now + 10_000).is_some());
    assert_eq!(e.phase(), GamePhase::Playing);
    assert!(e.flipped().is_empty());
    assert!(e.matched().is_empty());
    assert_eq!(e.deck().len(), 12);
    for card in e.deck() {
        assert!(
            !first_ids.contains(&card.id),
            "replay must not reuse instance ids"
        );
    }
}

#[test]
fn exit_cancels_a_pending_evaluation() {
    let mut rng = Mcg128Xsl64::seed_from_u64(6);
    let mut e = engine();
    e.begin_at(&mut rng, 0);
    let pair = pairs(&e)[0];

    // Two cards face-up, evaluation scheduled for t=601.
    e.flip_at(pair[0], 100);
    e.flip_at(pair[1], 101);
    assert!(e.is_input_locked());

    // Abandon before it fires, then start a new game.
    assert!(e.exit().is_some());
    assert!(e.begin_at(&mut rng, 300).is_some());

    // Well past the abandoned deadline: the new game is untouched.
    assert!(e.tick_at(10_000).is_empty());
    assert!(e.flipped().is_empty());
    assert!(e.matched().is_empty());
    assert!(!e.is_input_locked());
    assert_eq!(e.phase(), GamePhase::Playing);
    assert!(e.last_result_secs().is_none());
}

#[test]
fn exit_after_finish_keeps_the_result() {
    let mut rng = Mcg128Xsl64::seed_from_u64(7);
    let mut e = engine();
    e.begin_at(&mut rng, 0);

    let mut now = 0;
    for pair in pairs(&e) {
        now += 1_000;
        play_pair(&mut e, pair, now);
    }
    e.tick_at(now + REVEAL_MS + FINISH_MS + 1);
    assert_eq!(e.phase(), GamePhase::Over);
    let result = e.last_result_secs();
    assert!(result.is_some());

    // Leaving the end screen preserves the previous result display.
    e.exit();
    assert_eq!(e.phase(), GamePhase::Start);
    assert_eq!(e.last_result_secs(), result);
}

#[test]
fn reaction_tier_scenarios() {
    for (elapsed, expected) in [
        (45, Reaction::Amazed),
        (90, Reaction::Fast),
        (150, Reaction::Complete),
        (60, Reaction::Fast),
        (120, Reaction::Complete),
    ] {
        assert_eq!(Reaction::from(elapsed), expected, "elapsed={elapsed}");
    }
}
