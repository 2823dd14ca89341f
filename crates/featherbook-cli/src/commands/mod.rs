pub mod collection;
pub mod config;
pub mod encyclopedia;
pub mod game;
pub mod journal;
pub mod playlist;

use featherbook_core::{Config, Event, Session, SessionStore};
use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;
use serde::Serialize;

pub(crate) type CliError = Box<dyn std::error::Error>;

/// RNG for draws and deals: fixed seed when configured, entropy otherwise.
pub(crate) fn rng(config: &Config) -> Mcg128Xsl64 {
    match config.seed {
        Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
        None => Mcg128Xsl64::from_entropy(),
    }
}

/// Load the saved session, bootstrapping a fresh one (with its welcome
/// feather draw) on first run. Pending fades and game deadlines are
/// brought up to date before the command applies.
pub(crate) fn open_session(config: &Config) -> Result<(SessionStore, Session), CliError> {
    let store = SessionStore::open()?;
    let session = match store.load()? {
        Some(mut session) => {
            print_events(&session.tick())?;
            session
        }
        None => {
            let (session, events) = Session::bootstrap(config, &mut rng(config))?;
            print_events(&events)?;
            store.save(&session)?;
            session
        }
    };
    Ok((store, session))
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn print_events(events: &[Event]) -> Result<(), CliError> {
    for event in events {
        print_json(event)?;
    }
    Ok(())
}
