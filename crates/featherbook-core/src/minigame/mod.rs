//! Memory-matching minigame.
//!
//! A deck of paired bird cards is dealt face-down; the player flips two at
//! a time looking for pairs while a wall-clock timer runs. The final time
//! is bucketed into a reaction tier for the end screen.

mod deck;
mod engine;
mod reaction;

pub use deck::{deal, Card, CardId, GridConfig};
pub use engine::{GameConfig, GameEngine, GamePhase};
pub use reaction::Reaction;
