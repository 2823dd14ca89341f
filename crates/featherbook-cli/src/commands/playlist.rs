use clap::Subcommand;
use featherbook_core::catalog::track_catalog;
use featherbook_core::Config;

use super::{open_session, print_json, CliError};

#[derive(Subcommand)]
pub enum PlaylistAction {
    /// Show the playlist
    List,
    /// Show the demo track catalog
    Tracks,
    /// Add a catalog track by id
    Add { id: String },
    /// Remove a track by id
    Remove { id: String },
}

pub fn run(action: PlaylistAction) -> Result<(), CliError> {
    let config = Config::load()?;
    let (store, mut session) = open_session(&config)?;

    match action {
        PlaylistAction::List => print_json(&session.playlist.tracks())?,
        PlaylistAction::Tracks => print_json(&track_catalog())?,
        PlaylistAction::Add { id } => {
            match session.playlist.add_from_catalog(&track_catalog(), &id) {
                Some(event) => print_json(&event)?,
                // Unknown id or already on the list.
                None if session.playlist.contains(&id) => {
                    print_json(&session.playlist.tracks())?
                }
                None => return Err(format!("no track {id}").into()),
            }
        }
        PlaylistAction::Remove { id } => match session.playlist.remove(&id) {
            Some(event) => print_json(&event)?,
            None => return Err(format!("no track {id} on the playlist").into()),
        },
    }

    store.save(&session)?;
    Ok(())
}
