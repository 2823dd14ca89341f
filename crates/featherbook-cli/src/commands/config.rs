use clap::Subcommand;
use featherbook_core::{Config, SessionStore};
use serde_json::json;

use super::{print_json, CliError};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the active configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write the default configuration
    Reset,
    /// Discard the saved session and start fresh next run
    ResetSession,
}

pub fn run(action: ConfigAction) -> Result<(), CliError> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
        ConfigAction::Reset => {
            let config = Config::default();
            config.save()?;
            print_json(&json!({ "type": "ConfigReset", "path": Config::path()? }))?;
        }
        ConfigAction::ResetSession => {
            let store = SessionStore::open()?;
            store.clear()?;
            print_json(&json!({ "type": "SessionReset" }))?;
        }
    }
    Ok(())
}
