//! Configuration storage
//!
//! Stored as JSON in ~/.config/txmerkle/config.json unless a path is given.

use crate::model::{PublicKey, StakingConfig};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default capacity of the seen-message cache
pub const DEFAULT_MESSAGE_CACHE_CAPACITY: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Wallet receiving staking transactions
    pub staking_wallet: Option<PublicKey>,
    /// How many message ids to remember for deduplication
    pub message_cache_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            staking_wallet: None,
            message_cache_capacity: DEFAULT_MESSAGE_CACHE_CAPACITY,
        }
    }
}

impl Config {
    /// Default config location (~/.config/txmerkle/config.json)
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not find config directory".into()))?;
        Ok(config_dir.join("txmerkle").join("config.json"))
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;

        if config.message_cache_capacity == 0 {
            return Err(Error::Config("message_cache_capacity must be non-zero".into()));
        }
        Ok(config)
    }

    /// Load from `path` if given, else from the default location
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::load(&Self::default_path()?),
        }
    }

    /// Write to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// The staking wallet, required for issuing staking transactions
    pub fn staking(&self) -> Result<StakingConfig> {
        self.staking_wallet
            .map(StakingConfig::new)
            .ok_or_else(|| Error::Config("No staking_wallet configured".into()))
    }
}
