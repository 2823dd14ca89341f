//! Feather collection reward mechanic.
//!
//! A feather is drawn at random from the not-yet-owned part of the catalog,
//! announced to the user with a fade-in / hold / fade-out sequence, and
//! committed into the owned set when the fade-out completes. One draw is
//! triggered at session start and one per new journal entry.

mod engine;

pub use engine::{
    Announcement, AnnouncementView, CollectionEngine, CollectionTimings, FadePhase,
};
