use anyhow::Result;

use rlesports::cli::{Cli, Command};
use rlesports::{handle_completions, handle_fetch, handle_players, handle_update, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Update { force } => handle_update(*force, cli.store),
        Command::Fetch { name } => handle_fetch(name, cli.store),
        Command::Players => handle_players(cli.store),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
