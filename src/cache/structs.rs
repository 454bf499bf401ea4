use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File-based JSON store with two tiers: named collections at the top level and
/// raw per-page payloads under `raw/`
pub struct Cache {
    cache_dir: PathBuf,
    raw_dir: PathBuf,
}

impl Cache {
    /// Create a new cache instance
    pub fn new<P: AsRef<Path>>(cache_dir: P) -> Result<Self> {
        let cache_dir = cache_dir.as_ref().to_path_buf();
        let raw_dir = cache_dir.join("raw");

        fs::create_dir_all(&raw_dir).context("Failed to create raw cache directory")?;

        Ok(Self { cache_dir, raw_dir })
    }

    /// Save a named collection
    pub fn save<T: Serialize>(&self, key: &str, data: &T) -> Result<()> {
        let file_path = self.build_path(key);
        self.write_json(&file_path, data)?;
        info!("Saved data to cache: {}", file_path.display());
        Ok(())
    }

    /// Load a named collection
    pub fn load<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Result<Option<T>> {
        self.read_json_opt(&self.build_path(key))
    }

    /// Check if a named collection exists
    pub fn exists(&self, key: &str) -> bool {
        self.build_path(key).exists()
    }

    // --- Raw Page Tier ---

    /// Save a raw upstream payload, keyed by page name
    pub fn save_raw<T: Serialize>(&self, page: &str, data: &T) -> Result<()> {
        let file_path = self.build_raw_path(page);
        self.write_json(&file_path, data)?;
        info!("Saved raw data to cache: {}", file_path.display());
        Ok(())
    }

    /// Load a raw upstream payload
    pub fn load_raw<T: for<'de> Deserialize<'de>>(&self, page: &str) -> Result<Option<T>> {
        self.read_json_opt(&self.build_raw_path(page))
    }

    // --- Helper Methods ---

    fn build_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }

    fn build_raw_path(&self, page: &str) -> PathBuf {
        self.raw_dir.join(format!("{}.json", urlencoding::encode(page)))
    }

    /// Write beside the target, then rename over it
    fn write_json<T: Serialize>(&self, path: &Path, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, json)
            .with_context(|| format!("Failed to write cache file {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path)
            .with_context(|| format!("Failed to replace cache file {}", path.display()))?;
        Ok(())
    }

    fn read_json_opt<T: for<'de> Deserialize<'de>>(&self, path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read cache file {}", path.display()))?;
        let data = serde_json::from_str(&json).with_context(|| {
            format!(
                "Failed to parse JSON from {:?}. First 200 chars: {}",
                path,
                json.chars().take(200).collect::<String>()
            )
        })?;
        Ok(Some(data))
    }
}
