use clap::Subcommand;
use featherbook_core::{Config, GamePhase, Reaction};
use serde_json::json;

use super::{open_session, print_json, rng, CliError};

#[derive(Subcommand)]
pub enum GameAction {
    /// Deal a new game (also replays from the end screen)
    Start,
    /// Flip the card at a grid position (row-major, 0-based)
    Flip { position: usize },
    /// Print the game state as JSON (resolves due evaluations)
    Status,
    /// Abandon the current game
    Exit,
}

/// End-screen copy for each reaction tier. Owned by the presentation
/// layer; the engine only knows the tier.
fn reaction_message(reaction: Reaction) -> &'static str {
    match reaction {
        Reaction::Amazed => "Is it magic?! You did it faster than I can peck grain in time!",
        Reaction::Fast => "You're faster than the wind! Even I didn't have time to blink!",
        Reaction::Complete => "Perfect! Not a single extra card - you're a true master!",
    }
}

/// mm:ss display of a whole-second duration.
fn format_time(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

pub fn run(action: GameAction) -> Result<(), CliError> {
    let config = Config::load()?;
    let (store, mut session) = open_session(&config)?;

    match action {
        GameAction::Start => match session.game.begin(&mut rng(&config)) {
            Some(event) => print_json(&event)?,
            // Mid-game: exit first. Show the board state instead.
            None => print_json(&session.game.snapshot())?,
        },
        GameAction::Flip { position } => {
            let card_id = session.game.deck().get(position).map(|c| c.id);
            let event = card_id.and_then(|id| session.game.flip(id));
            match event {
                Some(event) => print_json(&event)?,
                // Locked, matched, out of range: ignored input.
                None => print_json(&session.game.snapshot())?,
            }
        }
        GameAction::Status => {
            print_json(&session.game.snapshot())?;
            if session.game.phase() == GamePhase::Over {
                if let (Some(reaction), Some(secs)) =
                    (session.game.reaction(), session.game.last_result_secs())
                {
                    print_json(&json!({
                        "type": "Reaction",
                        "tier": reaction,
                        "time": format_time(secs),
                        "message": reaction_message(reaction),
                    }))?;
                }
            }
        }
        GameAction::Exit => match session.game.exit() {
            Some(event) => print_json(&event)?,
            None => print_json(&session.game.snapshot())?,
        },
    }

    store.save(&session)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_formatting() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(75), "01:15");
        assert_eq!(format_time(600), "10:00");
    }
}
