//! Personal sighting journal.
//!
//! Entries are session-scoped; the surrounding application draws a
//! feather for every new entry (see [`crate::collection`]).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::events::Event;

/// Unique identifier for a journal entry.
pub type EntryId = Uuid;

/// Sighting context tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryTag {
    FirstAppearance,
    Reappearance,
    SurpriseEncounter,
}

impl fmt::Display for EntryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryTag::FirstAppearance => write!(f, "first appearance"),
            EntryTag::Reappearance => write!(f, "reappearance"),
            EntryTag::SurpriseEncounter => write!(f, "surprise encounter"),
        }
    }
}

impl FromStr for EntryTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first appearance" | "first_appearance" => Ok(EntryTag::FirstAppearance),
            "reappearance" => Ok(EntryTag::Reappearance),
            "surprise encounter" | "surprise_encounter" => Ok(EntryTag::SurpriseEncounter),
            other => Err(format!("unknown entry tag: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Winter => write!(f, "winter"),
            Season::Spring => write!(f, "spring"),
            Season::Summer => write!(f, "summer"),
            Season::Autumn => write!(f, "autumn"),
        }
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "winter" => Ok(Season::Winter),
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "autumn" => Ok(Season::Autumn),
            other => Err(format!("unknown season: {other}")),
        }
    }
}

/// A recorded sighting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: EntryId,
    pub date: DateTime<Utc>,
    pub bird: String,
    pub place: String,
    pub note: String,
    pub tag: EntryTag,
    pub season: Season,
    /// Asset key of an attached photo, if any.
    pub photo: Option<String>,
}

/// Fields for a new entry; the journal assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEntry {
    pub date: DateTime<Utc>,
    pub bird: String,
    pub place: String,
    pub note: String,
    pub tag: EntryTag,
    pub season: Season,
    pub photo: Option<String>,
}

/// Partial update for an existing entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryPatch {
    pub date: Option<DateTime<Utc>>,
    pub bird: Option<String>,
    pub place: Option<String>,
    pub note: Option<String>,
    pub tag: Option<EntryTag>,
    pub season: Option<Season>,
    pub photo: Option<Option<String>>,
}

/// The sighting journal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// A journal pre-filled with the starter entries new users see.
    pub fn with_samples() -> Self {
        Self {
            entries: vec![
                JournalEntry {
                    id: Uuid::new_v4(),
                    date: Utc.with_ymd_and_hms(2025, 4, 18, 0, 0, 0).unwrap(),
                    bird: "Sparrow".into(),
                    place: "City park".into(),
                    note: "Chirping on branch".into(),
                    tag: EntryTag::FirstAppearance,
                    season: Season::Spring,
                    photo: Some("sample_sparrow_1.png".into()),
                },
                JournalEntry {
                    id: Uuid::new_v4(),
                    date: Utc.with_ymd_and_hms(2025, 4, 22, 0, 0, 0).unwrap(),
                    bird: "Sparrow".into(),
                    place: "Backyard".into(),
                    note: "Feeding".into(),
                    tag: EntryTag::Reappearance,
                    season: Season::Winter,
                    photo: Some("sample_sparrow_2.png".into()),
                },
            ],
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn entry(&self, id: EntryId) -> Option<&JournalEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn entries_for_season(&self, season: Season) -> Vec<&JournalEntry> {
        self.entries
            .iter()
            .filter(|e| e.season == season)
            .collect()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Record a sighting. The caller is responsible for triggering the
    /// feather draw that rewards a new entry.
    pub fn add(&mut self, new: NewEntry) -> Event {
        let entry = JournalEntry {
            id: Uuid::new_v4(),
            date: new.date,
            bird: new.bird,
            place: new.place,
            note: new.note,
            tag: new.tag,
            season: new.season,
            photo: new.photo,
        };
        let event = Event::EntryAdded {
            entry_id: entry.id,
            bird: entry.bird.clone(),
            at: Utc::now(),
        };
        self.entries.push(entry);
        event
    }

    /// Apply a partial update. Returns `None` for an unknown id.
    pub fn update(&mut self, id: EntryId, patch: EntryPatch) -> Option<Event> {
        let entry = self.entries.iter_mut().find(|e| e.id == id)?;
        if let Some(date) = patch.date {
            entry.date = date;
        }
        if let Some(bird) = patch.bird {
            entry.bird = bird;
        }
        if let Some(place) = patch.place {
            entry.place = place;
        }
        if let Some(note) = patch.note {
            entry.note = note;
        }
        if let Some(tag) = patch.tag {
            entry.tag = tag;
        }
        if let Some(season) = patch.season {
            entry.season = season;
        }
        if let Some(photo) = patch.photo {
            entry.photo = photo;
        }
        Some(Event::EntryUpdated {
            entry_id: id,
            at: Utc::now(),
        })
    }

    /// Remove an entry. Returns `None` for an unknown id.
    pub fn remove(&mut self, id: EntryId) -> Option<Event> {
        let len_before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == len_before {
            return None;
        }
        Some(Event::EntryRemoved {
            entry_id: id,
            at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sighting(bird: &str, season: Season) -> NewEntry {
        NewEntry {
            date: Utc::now(),
            bird: bird.into(),
            place: "Riverbank".into(),
            note: String::new(),
            tag: EntryTag::FirstAppearance,
            season,
            photo: None,
        }
    }

    #[test]
    fn add_then_filter_by_season() {
        let mut j = Journal::new();
        j.add(sighting("Heron", Season::Summer));
        j.add(sighting("Robin", Season::Winter));
        j.add(sighting("Swift", Season::Summer));

        assert_eq!(j.entries().len(), 3);
        assert_eq!(j.entries_for_season(Season::Summer).len(), 2);
        assert_eq!(j.entries_for_season(Season::Autumn).len(), 0);
    }

    #[test]
    fn update_patches_only_given_fields() {
        let mut j = Journal::new();
        let event = j.add(sighting("Heron", Season::Summer));
        let id = match event {
            Event::EntryAdded { entry_id, .. } => entry_id,
            other => panic!("expected EntryAdded, got {other:?}"),
        };

        j.update(
            id,
            EntryPatch {
                place: Some("Old mill pond".into()),
                ..EntryPatch::default()
            },
        )
        .unwrap();

        let entry = j.entry(id).unwrap();
        assert_eq!(entry.place, "Old mill pond");
        assert_eq!(entry.bird, "Heron");
    }

    #[test]
    fn remove_unknown_is_none() {
        let mut j = Journal::with_samples();
        assert_eq!(j.entries().len(), 2);
        assert!(j.remove(Uuid::new_v4()).is_none());
        let id = j.entries()[0].id;
        assert!(j.remove(id).is_some());
        assert_eq!(j.entries().len(), 1);
    }
}
