//! Static reference data: the feather catalog, the bird encyclopedia,
//! the minigame face list, and the demo track list.
//!
//! Catalogs are read-only and loaded once per session. Images and audio
//! are opaque asset keys resolved by the presentation layer.

mod birds;
mod faces;
mod feathers;
mod tracks;

pub use birds::bird_catalog;
pub use faces::face_catalog;
pub use feathers::feather_catalog;
pub use tracks::track_catalog;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub type FeatherId = String;
pub type BirdId = String;
/// A card face is identified by the bird image it shows.
pub type FaceId = String;
pub type TrackId = String;

/// How hard a feather is to come by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rarity::Common => write!(f, "common"),
            Rarity::Rare => write!(f, "rare"),
            Rarity::Legendary => write!(f, "legendary"),
        }
    }
}

impl FromStr for Rarity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "common" => Ok(Rarity::Common),
            "rare" => Ok(Rarity::Rare),
            "legendary" => Ok(Rarity::Legendary),
            other => Err(format!("unknown rarity: {other}")),
        }
    }
}

/// A collectible feather from the reward catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feather {
    pub id: FeatherId,
    pub name: String,
    /// Asset key for the feather illustration.
    pub image: String,
    pub rarity: Rarity,
    pub description: String,
}

/// A bird-call recording attached to an encyclopedia entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recording {
    pub id: String,
    pub title: String,
    /// Asset key for the audio clip.
    pub audio: String,
}

/// One species in the encyclopedia.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    pub id: BirdId,
    pub name: String,
    /// Asset key for the hero image.
    pub image: String,
    /// Habitat tags shown on the list row.
    pub tags: Vec<String>,
    pub range: String,
    pub traits: String,
    /// Quick tags for sighting context.
    pub sighting_tags: Vec<String>,
    /// The curator's personal note.
    pub field_note: String,
    pub recordings: Vec<Recording>,
}

/// A track offered on the encyclopedia screen's demo playlist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub image: String,
    pub audio: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn feather_catalog_ids_are_unique() {
        let catalog = feather_catalog();
        let ids: HashSet<_> = catalog.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn feather_catalog_has_a_legendary() {
        assert!(feather_catalog()
            .iter()
            .any(|f| f.rarity == Rarity::Legendary));
    }

    #[test]
    fn bird_catalog_entries_have_recordings() {
        for bird in bird_catalog() {
            assert!(
                !bird.recordings.is_empty(),
                "{} has no recordings",
                bird.id
            );
        }
    }

    #[test]
    fn face_catalog_covers_reference_grid() {
        // The default 4x3 grid needs 6 distinct faces.
        assert!(face_catalog().len() >= 6);
    }

    #[test]
    fn rarity_round_trips_through_str() {
        for r in [Rarity::Common, Rarity::Rare, Rarity::Legendary] {
            assert_eq!(r.to_string().parse::<Rarity>().unwrap(), r);
        }
    }
}
