mod config;
mod session;

pub use config::Config;
pub use session::{Session, SessionStore};

use std::path::PathBuf;

/// Returns `~/.config/featherbook[-dev]/` based on FEATHERBOOK_ENV.
///
/// Set FEATHERBOOK_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FEATHERBOOK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("featherbook-dev")
    } else {
        base_dir.join("featherbook")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
