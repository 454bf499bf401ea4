pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod http;
pub mod membership;
pub mod rate_limiter;
pub mod reconcile;
pub mod services;
pub mod storage;
pub mod wikitext;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::api::LiquipediaClient;
use crate::cache::Cache;
use crate::cli::StoreKind;
use crate::config::{AppConfig, rlcs_seasons};
use crate::services::players::PlayerService;
use crate::services::seasons::load_seasons;
use crate::services::update::{UpdateService, format_outcome, format_report};
use crate::storage::{JsonStore, SqliteStore, TournamentStore};

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_update(force: bool, store: StoreKind) -> Result<()> {
    let config = AppConfig::from_env()?;
    let mut service = UpdateService::new(
        LiquipediaClient::new(&config.scraper)?,
        open_store(store, &config)?,
        config.reconcile.clone(),
        rlcs_seasons(),
    );

    let report = service.run(force);
    println!("{}", format_report(&report));
    Ok(())
}

pub fn handle_fetch(name: &str, store: StoreKind) -> Result<()> {
    let config = AppConfig::from_env()?;
    let mut service = UpdateService::new(
        LiquipediaClient::new(&config.scraper)?,
        open_store(store, &config)?,
        config.reconcile.clone(),
        rlcs_seasons(),
    );

    let outcome = service.fetch_one(name)?;
    println!("{}", format_outcome(&outcome));
    Ok(())
}

pub fn handle_players(store: StoreKind) -> Result<()> {
    let config = AppConfig::from_env()?;
    let store = open_store(store, &config)?;
    let seasons = load_seasons(&rlcs_seasons(), &store)?;

    let mut service = PlayerService::new(
        LiquipediaClient::new(&config.scraper)?,
        Cache::new(&config.storage.cache_dir)?,
        Cache::new(&config.storage.data_dir)?,
    );
    let players = service.run(&seasons)?;
    println!("Wrote {} players", players.len());
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn open_store(kind: StoreKind, config: &AppConfig) -> Result<Box<dyn TournamentStore>> {
    let store: Box<dyn TournamentStore> = match kind {
        StoreKind::Json => Box::new(JsonStore::new(&config.storage.data_dir)?),
        StoreKind::Sqlite => Box::new(SqliteStore::open(&config.storage.database_path)?),
    };
    Ok(store)
}
