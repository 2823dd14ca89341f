use clap::Subcommand;
use featherbook_core::{CollectionError, Config};
use serde_json::json;

use super::{open_session, print_json, rng, CliError};

#[derive(Subcommand)]
pub enum CollectionAction {
    /// List the feather catalog with owned markers
    List,
    /// Print the collection state as JSON
    Status,
    /// Draw a random uncollected feather
    Draw,
}

pub fn run(action: CollectionAction) -> Result<(), CliError> {
    let config = Config::load()?;
    let (store, mut session) = open_session(&config)?;

    match action {
        CollectionAction::List => {
            let rows: Vec<_> = session
                .collection
                .catalog()
                .iter()
                .map(|f| {
                    json!({
                        "id": f.id,
                        "name": f.name,
                        "rarity": f.rarity.to_string(),
                        "owned": session.collection.is_owned(&f.id),
                    })
                })
                .collect();
            print_json(&rows)?;
        }
        CollectionAction::Status => {
            print_json(&session.collection.snapshot())?;
        }
        CollectionAction::Draw => {
            match session.collection.collect_random(&mut rng(&config)) {
                Ok(event) => print_json(&event)?,
                // The whole catalog is owned: a silent no-op, show the
                // state instead.
                Err(CollectionError::NoneRemaining) => {
                    print_json(&session.collection.snapshot())?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    store.save(&session)?;
    Ok(())
}
