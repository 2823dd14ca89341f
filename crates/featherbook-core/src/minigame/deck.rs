//! Deck validation and dealing.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::FaceId;
use crate::error::GameError;

/// Instance identifier of a dealt card. Distinct even for the two cards
/// sharing a face.
pub type CardId = Uuid;

/// One dealt card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub face: FaceId,
}

/// Grid dimensions for a game.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_rows")]
    pub rows: u32,
    #[serde(default = "default_cols")]
    pub cols: u32,
}

fn default_rows() -> u32 {
    4
}
fn default_cols() -> u32 {
    3
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
        }
    }
}

impl GridConfig {
    pub fn card_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    pub fn pair_count(&self) -> usize {
        self.card_count() / 2
    }

    /// Reject a grid the deal cannot satisfy. Called at engine
    /// construction so a bad configuration never reaches play time.
    pub fn validate(&self, available_faces: usize) -> Result<(), GameError> {
        if self.card_count() % 2 != 0 {
            return Err(GameError::OddCardCount {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.pair_count() > available_faces {
            return Err(GameError::NotEnoughFaces {
                needed: self.pair_count(),
                available: available_faces,
            });
        }
        Ok(())
    }
}

/// Deal a shuffled deck for a validated grid: `pair_count` distinct faces,
/// two cards each, fresh instance ids, uniform Fisher-Yates shuffle.
pub fn deal<R: Rng + ?Sized>(faces: &[FaceId], grid: &GridConfig, rng: &mut R) -> Vec<Card> {
    let chosen: Vec<&FaceId> = faces.choose_multiple(rng, grid.pair_count()).collect();
    let mut deck: Vec<Card> = chosen
        .into_iter()
        .flat_map(|face| {
            [
                Card {
                    id: Uuid::new_v4(),
                    face: face.clone(),
                },
                Card {
                    id: Uuid::new_v4(),
                    face: face.clone(),
                },
            ]
        })
        .collect();
    deck.shuffle(rng);
    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::face_catalog;
    use rand::SeedableRng;
    use rand_pcg::Mcg128Xsl64;
    use std::collections::{HashMap, HashSet};

    #[test]
    fn reference_grid_deals_six_pairs() {
        let mut rng = Mcg128Xsl64::seed_from_u64(1);
        let grid = GridConfig::default();
        let deck = deal(&face_catalog(), &grid, &mut rng);

        assert_eq!(deck.len(), 12);

        let ids: HashSet<_> = deck.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 12, "instance ids must be unique");

        let mut by_face: HashMap<&str, usize> = HashMap::new();
        for card in &deck {
            *by_face.entry(card.face.as_str()).or_default() += 1;
        }
        assert_eq!(by_face.len(), 6);
        assert!(by_face.values().all(|&n| n == 2));
    }

    #[test]
    fn odd_grid_is_rejected() {
        let grid = GridConfig { rows: 3, cols: 3 };
        assert_eq!(
            grid.validate(face_catalog().len()),
            Err(GameError::OddCardCount { rows: 3, cols: 3 })
        );
    }

    #[test]
    fn oversized_grid_is_rejected() {
        let grid = GridConfig { rows: 4, cols: 4 };
        assert_eq!(
            grid.validate(6),
            Err(GameError::NotEnoughFaces {
                needed: 8,
                available: 6
            })
        );
    }
}
