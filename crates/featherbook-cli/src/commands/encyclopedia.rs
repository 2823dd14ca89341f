use clap::Subcommand;
use featherbook_core::Config;
use serde_json::json;

use super::{open_session, print_json, CliError};

#[derive(Subcommand)]
pub enum EncyclopediaAction {
    /// List all species, optionally filtered by habitat tag
    List {
        #[arg(long)]
        tag: Option<String>,
    },
    /// Show one species in full
    Show { id: String },
    /// Toggle the observed mark on a species
    Observe { id: String },
    /// List species marked as observed
    Observed,
}

pub fn run(action: EncyclopediaAction) -> Result<(), CliError> {
    let config = Config::load()?;
    let (store, mut session) = open_session(&config)?;

    match action {
        EncyclopediaAction::List { tag } => {
            let birds = match &tag {
                Some(tag) => session.encyclopedia.birds_tagged(tag),
                None => session.encyclopedia.birds().iter().collect(),
            };
            let rows: Vec<_> = birds
                .iter()
                .map(|b| {
                    json!({
                        "id": b.id,
                        "name": b.name,
                        "tags": b.tags,
                        "observed": session.encyclopedia.is_observed(&b.id),
                    })
                })
                .collect();
            print_json(&rows)?;
        }
        EncyclopediaAction::Show { id } => match session.encyclopedia.bird(&id) {
            Some(bird) => print_json(bird)?,
            None => return Err(format!("no bird {id}").into()),
        },
        EncyclopediaAction::Observe { id } => match session.encyclopedia.toggle_observed(&id) {
            Some(event) => print_json(&event)?,
            None => return Err(format!("no bird {id}").into()),
        },
        EncyclopediaAction::Observed => {
            print_json(&session.encyclopedia.observed_birds())?;
        }
    }

    store.save(&session)?;
    Ok(())
}
