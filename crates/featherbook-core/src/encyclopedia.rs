//! Bird encyclopedia: the static species catalog plus the user's
//! "observed" marks.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::catalog::{Bird, BirdId};
use crate::events::Event;

/// Session-scoped encyclopedia state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Encyclopedia {
    birds: Vec<Bird>,
    /// Ids the user has marked as personally observed.
    observed: Vec<BirdId>,
}

impl Encyclopedia {
    pub fn new(birds: Vec<Bird>) -> Self {
        Self {
            birds,
            observed: Vec::new(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn birds(&self) -> &[Bird] {
        &self.birds
    }

    pub fn bird(&self, id: &str) -> Option<&Bird> {
        self.birds.iter().find(|b| b.id == id)
    }

    pub fn is_observed(&self, id: &str) -> bool {
        self.observed.iter().any(|o| o == id)
    }

    /// Birds the user has marked, in catalog order.
    pub fn observed_birds(&self) -> Vec<&Bird> {
        self.birds
            .iter()
            .filter(|b| self.is_observed(&b.id))
            .collect()
    }

    pub fn birds_tagged(&self, tag: &str) -> Vec<&Bird> {
        self.birds
            .iter()
            .filter(|b| b.tags.iter().any(|t| t == tag))
            .collect()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Toggle the observed mark. Returns `None` for an unknown id.
    pub fn toggle_observed(&mut self, id: &str) -> Option<Event> {
        self.bird(id)?;
        let observed = if self.is_observed(id) {
            self.observed.retain(|o| o != id);
            false
        } else {
            self.observed.push(id.to_string());
            true
        };
        Some(Event::ObservedToggled {
            bird_id: id.to_string(),
            observed,
            at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::bird_catalog;

    #[test]
    fn toggle_flips_and_flips_back() {
        let mut enc = Encyclopedia::new(bird_catalog());
        assert!(!enc.is_observed("rock-dove"));

        enc.toggle_observed("rock-dove").unwrap();
        assert!(enc.is_observed("rock-dove"));
        assert_eq!(enc.observed_birds().len(), 1);

        enc.toggle_observed("rock-dove").unwrap();
        assert!(!enc.is_observed("rock-dove"));
        assert!(enc.observed_birds().is_empty());
    }

    #[test]
    fn toggle_unknown_is_ignored() {
        let mut enc = Encyclopedia::new(bird_catalog());
        assert!(enc.toggle_observed("archaeopteryx").is_none());
    }

    #[test]
    fn tag_filter() {
        let enc = Encyclopedia::new(bird_catalog());
        let urban = enc.birds_tagged("urban birds");
        assert_eq!(urban.len(), 2);
    }
}
