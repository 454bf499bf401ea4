use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ScraperSettings {
    pub api_base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Minimum spacing between two API calls
    pub rate_gap_secs: u64,
    pub poll_interval_secs: u64,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            api_base_url: "https://liquipedia.net/rocketleague/api.php".to_string(),
            user_agent: "RL Esports".to_string(),
            timeout_secs: 30,
            rate_gap_secs: 30,
            poll_interval_secs: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReconcileSettings {
    // TODO: revisit once rosters with two listed players are audited; 2 may be the better floor
    pub min_team_size: usize,
    pub participants_title: String,
    pub infobox_section_index: i32,
}

impl Default for ReconcileSettings {
    fn default() -> Self {
        Self {
            min_team_size: 1,
            participants_title: "participants".to_string(),
            infobox_section_index: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub data_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub database_path: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            cache_dir: PathBuf::from("cache"),
            database_path: PathBuf::from("rlesports.db"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub scraper: ScraperSettings,
    pub reconcile: ReconcileSettings,
    pub storage: StorageSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overlaid with `RLESPORTS_*` / `DATABASE_PATH` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::new();

        if let Some(dir) = lookup("RLESPORTS_DATA_DIR") {
            config.storage.data_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("RLESPORTS_CACHE_DIR") {
            config.storage.cache_dir = PathBuf::from(dir);
        }
        if let Some(path) = lookup("DATABASE_PATH") {
            config.storage.database_path = PathBuf::from(path);
        }
        if let Some(size) = lookup("RLESPORTS_MIN_TEAM_SIZE") {
            config.reconcile.min_team_size = parse_number("RLESPORTS_MIN_TEAM_SIZE", &size)?;
        }
        if let Some(gap) = lookup("RLESPORTS_RATE_GAP_SECS") {
            config.scraper.rate_gap_secs = parse_number("RLESPORTS_RATE_GAP_SECS", &gap)?;
        }

        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse()
        .with_context(|| format!("Invalid value for {}: {:?}", key, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.reconcile.min_team_size, 1);
        assert_eq!(config.scraper.rate_gap_secs, 30);
        assert_eq!(config.reconcile.participants_title, "participants");
    }

    #[test]
    fn test_environment_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("RLESPORTS_MIN_TEAM_SIZE", "2"),
            ("RLESPORTS_RATE_GAP_SECS", " 45 "),
            ("DATABASE_PATH", "/tmp/rl.db"),
        ]))
        .unwrap();
        assert_eq!(config.reconcile.min_team_size, 2);
        assert_eq!(config.scraper.rate_gap_secs, 45);
        assert_eq!(config.storage.database_path, PathBuf::from("/tmp/rl.db"));
    }

    #[test]
    fn test_invalid_number_is_an_error() {
        let err = AppConfig::from_lookup(lookup(&[("RLESPORTS_MIN_TEAM_SIZE", "two")])).unwrap_err();
        assert!(err.to_string().contains("RLESPORTS_MIN_TEAM_SIZE"));
    }
}
