//! User-curated playlist of bird-call recordings.
//!
//! Playback itself is the platform's job; this is only the list state.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::catalog::{Track, TrackId};
use crate::events::Event;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tracks.iter().any(|t| t.id == id)
    }

    /// Append a track. A duplicate id is ignored and returns `None`.
    pub fn add(&mut self, track: Track) -> Option<Event> {
        if self.contains(&track.id) {
            return None;
        }
        let event = Event::TrackAdded {
            track_id: track.id.clone(),
            at: Utc::now(),
        };
        self.tracks.push(track);
        Some(event)
    }

    /// Remove by id. Returns `None` for an id not in the playlist.
    pub fn remove(&mut self, id: &str) -> Option<Event> {
        let len_before = self.tracks.len();
        self.tracks.retain(|t| t.id != id);
        if self.tracks.len() == len_before {
            return None;
        }
        Some(Event::TrackRemoved {
            track_id: id.to_string(),
            at: Utc::now(),
        })
    }

    /// Convenience: resolve a catalog track by id and add it.
    pub fn add_from_catalog(&mut self, catalog: &[Track], id: &str) -> Option<Event> {
        let track = catalog.iter().find(|t| t.id == id)?;
        self.add(track.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::track_catalog;

    #[test]
    fn add_dedupes_by_id() {
        let mut p = Playlist::new();
        let catalog = track_catalog();

        assert!(p.add(catalog[0].clone()).is_some());
        assert!(p.add(catalog[0].clone()).is_none());
        assert_eq!(p.tracks().len(), 1);
    }

    #[test]
    fn remove_round_trip() {
        let mut p = Playlist::new();
        p.add_from_catalog(&track_catalog(), "trk2").unwrap();
        assert!(p.contains("trk2"));
        assert!(p.remove("trk2").is_some());
        assert!(p.remove("trk2").is_none());
        assert!(p.tracks().is_empty());
    }

    #[test]
    fn add_from_catalog_unknown_id() {
        let mut p = Playlist::new();
        assert!(p.add_from_catalog(&track_catalog(), "trk99").is_none());
    }
}
