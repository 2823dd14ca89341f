//! Property tests for the engine invariants.

use std::collections::HashSet;

use featherbook_core::catalog::{face_catalog, feather_catalog};
use featherbook_core::minigame::deal;
use featherbook_core::{
    CollectionEngine, CollectionTimings, GameConfig, GameEngine, GridConfig,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;

proptest! {
    /// Any dealt deck is a valid pairing: every face exactly twice,
    /// every instance id unique, size = rows*cols.
    #[test]
    fn dealt_decks_are_valid_pairings(
        seed in any::<u64>(),
        rows in 1u32..=4,
        cols in 1u32..=3,
    ) {
        let grid = GridConfig { rows, cols };
        prop_assume!(grid.card_count() % 2 == 0);
        prop_assume!(grid.pair_count() <= face_catalog().len());

        let mut rng = Mcg128Xsl64::seed_from_u64(seed);
        let deck = deal(&face_catalog(), &grid, &mut rng);

        prop_assert_eq!(deck.len(), grid.card_count());

        let ids: HashSet<_> = deck.iter().map(|c| c.id).collect();
        prop_assert_eq!(ids.len(), deck.len());

        let mut faces: Vec<&str> = deck.iter().map(|c| c.face.as_str()).collect();
        faces.sort_unstable();
        for pair in faces.chunks(2) {
            prop_assert_eq!(pair[0], pair[1]);
        }
        let distinct: HashSet<_> = faces.iter().collect();
        prop_assert_eq!(distinct.len(), grid.pair_count());
    }

    /// Under any interleaving of flips and ticks: never more than two
    /// cards face-up, no card simultaneously flipped and matched, and
    /// the matched set always has even size.
    #[test]
    fn flip_invariants_hold_under_arbitrary_input(
        seed in any::<u64>(),
        moves in prop::collection::vec((0usize..12, 0u64..1_200), 1..80),
    ) {
        let mut rng = Mcg128Xsl64::seed_from_u64(seed);
        let mut engine = GameEngine::new(GameConfig::default(), face_catalog()).unwrap();
        engine.begin_at(&mut rng, 0);

        let mut now = 0;
        for (index, advance) in moves {
            now += advance;
            engine.tick_at(now);
            let card_id = engine.deck()[index].id;
            engine.flip_at(card_id, now);

            prop_assert!(engine.flipped().len() <= 2);
            let flipped: HashSet<_> = engine.flipped().iter().copied().collect();
            let matched: HashSet<_> = engine.matched().iter().copied().collect();
            prop_assert!(flipped.is_disjoint(&matched));
            prop_assert_eq!(engine.matched().len() % 2, 0);
        }
    }

    /// Under any schedule of draws and ticks, no feather is committed
    /// twice and the owned set stays within the catalog.
    #[test]
    fn collection_never_commits_twice(
        seed in any::<u64>(),
        steps in prop::collection::vec((any::<bool>(), 0u64..4_000), 1..60),
    ) {
        let mut rng = Mcg128Xsl64::seed_from_u64(seed);
        let mut engine =
            CollectionEngine::new(feather_catalog(), CollectionTimings::default());
        let catalog_ids: HashSet<_> =
            engine.catalog().iter().map(|f| f.id.clone()).collect();

        let mut now = 0;
        for (draw, advance) in steps {
            now += advance;
            engine.tick_at(now);
            if draw {
                // Exhaustion is an expected no-op.
                let _ = engine.collect_random_at(&mut rng, now);
            }

            let unique: HashSet<_> = engine.owned().iter().cloned().collect();
            prop_assert_eq!(unique.len(), engine.owned().len());
            prop_assert!(unique.is_subset(&catalog_ids));
        }
    }
}
