use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "RLCS tournament and player data builder")]
pub struct Cli {
    /// Where tournament records are persisted
    #[arg(long, global = true, value_enum, default_value_t = StoreKind::Json)]
    pub store: StoreKind,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// tournaments.json in the data directory
    Json,
    /// SQLite database at DATABASE_PATH
    Sqlite,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Fetch whatever is missing from stored tournaments
    Update {
        /// Re-fetch every tournament regardless of stored state
        #[arg(short, long)]
        force: bool,
    },
    /// Re-fetch a single tournament by page name
    Fetch {
        /// Tournament page name, e.g. "Rocket League Championship Series/Season 2"
        name: String,
    },
    /// Build players.json from stored tournament rosters
    Players,
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_update_with_store() {
        let cli = Cli::parse_from(["rlesports", "--store", "sqlite", "update", "--force"]);
        assert_eq!(cli.store, StoreKind::Sqlite);
        assert_eq!(cli.command, Command::Update { force: true });
    }

    #[test]
    fn test_store_defaults_to_json() {
        let cli = Cli::parse_from(["rlesports", "fetch", "Rocket League Championship Series/Season 1"]);
        assert_eq!(cli.store, StoreKind::Json);
        assert_eq!(
            cli.command,
            Command::Fetch {
                name: "Rocket League Championship Series/Season 1".to_string()
            }
        );
    }
}
