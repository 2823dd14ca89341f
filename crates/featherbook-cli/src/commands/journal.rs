use chrono::{NaiveDate, Utc};
use clap::Subcommand;
use featherbook_core::{CollectionError, Config, EntryPatch, EntryTag, NewEntry, Season};
use uuid::Uuid;

use super::{open_session, print_json, rng, CliError};

#[derive(Subcommand)]
pub enum JournalAction {
    /// List entries, optionally for one season
    List {
        #[arg(long)]
        season: Option<String>,
    },
    /// Record a sighting (and draw a feather for it)
    Add {
        /// Bird name
        #[arg(long)]
        bird: String,
        /// Where it was seen
        #[arg(long)]
        place: String,
        /// Free-form note
        #[arg(long, default_value = "")]
        note: String,
        /// first appearance | reappearance | surprise encounter
        #[arg(long, default_value = "first appearance")]
        tag: String,
        /// winter | spring | summer | autumn
        #[arg(long)]
        season: String,
        /// Sighting date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
        /// Asset key of an attached photo
        #[arg(long)]
        photo: Option<String>,
    },
    /// Edit fields of an entry
    Edit {
        id: Uuid,
        #[arg(long)]
        bird: Option<String>,
        #[arg(long)]
        place: Option<String>,
        #[arg(long)]
        note: Option<String>,
        #[arg(long)]
        tag: Option<String>,
        #[arg(long)]
        season: Option<String>,
    },
    /// Remove an entry
    Remove { id: Uuid },
}

fn parse_date(s: &str) -> Result<chrono::DateTime<Utc>, CliError> {
    let day = NaiveDate::parse_from_str(s, "%Y-%m-%d")?;
    let midnight = day.and_hms_opt(0, 0, 0).ok_or("invalid date")?;
    Ok(midnight.and_utc())
}

pub fn run(action: JournalAction) -> Result<(), CliError> {
    let config = Config::load()?;
    let (store, mut session) = open_session(&config)?;

    match action {
        JournalAction::List { season } => match season {
            Some(season) => {
                let season: Season = season.parse()?;
                print_json(&session.journal.entries_for_season(season))?;
            }
            None => print_json(&session.journal.entries())?,
        },
        JournalAction::Add {
            bird,
            place,
            note,
            tag,
            season,
            date,
            photo,
        } => {
            let entry = NewEntry {
                date: match date {
                    Some(d) => parse_date(&d)?,
                    None => Utc::now(),
                },
                bird,
                place,
                note,
                tag: tag.parse::<EntryTag>()?,
                season: season.parse::<Season>()?,
                photo,
            };
            print_json(&session.journal.add(entry))?;

            // A new sighting earns a feather draw.
            match session.collection.collect_random(&mut rng(&config)) {
                Ok(event) => print_json(&event)?,
                Err(CollectionError::NoneRemaining) => {}
                Err(e) => return Err(e.into()),
            }
        }
        JournalAction::Edit {
            id,
            bird,
            place,
            note,
            tag,
            season,
        } => {
            let patch = EntryPatch {
                bird,
                place,
                note,
                tag: tag.map(|t| t.parse::<EntryTag>()).transpose()?,
                season: season.map(|s| s.parse::<Season>()).transpose()?,
                ..EntryPatch::default()
            };
            match session.journal.update(id, patch) {
                Some(event) => print_json(&event)?,
                None => return Err(format!("no journal entry {id}").into()),
            }
        }
        JournalAction::Remove { id } => match session.journal.remove(id) {
            Some(event) => print_json(&event)?,
            None => return Err(format!("no journal entry {id}").into()),
        },
    }

    store.save(&session)?;
    Ok(())
}
