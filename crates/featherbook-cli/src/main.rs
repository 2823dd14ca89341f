use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "featherbook", version, about = "Featherbook CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bird encyclopedia
    Encyclopedia {
        #[command(subcommand)]
        action: commands::encyclopedia::EncyclopediaAction,
    },
    /// Sighting journal
    Journal {
        #[command(subcommand)]
        action: commands::journal::JournalAction,
    },
    /// Feather collection
    Collection {
        #[command(subcommand)]
        action: commands::collection::CollectionAction,
    },
    /// Memory minigame
    Game {
        #[command(subcommand)]
        action: commands::game::GameAction,
    },
    /// Bird-call playlist
    Playlist {
        #[command(subcommand)]
        action: commands::playlist::PlaylistAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Encyclopedia { action } => commands::encyclopedia::run(action),
        Commands::Journal { action } => commands::journal::run(action),
        Commands::Collection { action } => commands::collection::run(action),
        Commands::Game { action } => commands::game::run(action),
        Commands::Playlist { action } => commands::playlist::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
