//! Configuration module for the lexat CLI.
//!
//! A `lexat.toml` file has two optional tables:
//!
//! ```toml
//! [scanner]            # any ScannerConfig field
//! scan_binary = true
//! cpair_comment_single = ";\n"
//!
//! [symbols]            # identifiers reported as symbols, with their values
//! width = 1
//! height = 2
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use dirs::config_dir;
use lexa_scan::{Scanner, ScannerConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LexatError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "lexat.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How input is tokenized.
    #[serde(default)]
    pub scanner: ScannerConfig,

    /// Symbols registered in scope 0 before scanning.
    #[serde(default)]
    pub symbols: BTreeMap<String, u32>,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise the search order is:
    /// 1. `lexat.toml` in the current directory
    /// 2. `lexat/lexat.toml` in the user's configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("no configuration file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LexatError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        debug!(path = %path.display(), "loading configuration");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text)
            .map_err(|e| LexatError::ScannerConfig(lexa_scan::ConfigError::Parse(e)))
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Find the first configuration file in the search order.
    pub fn find_config_file() -> Option<PathBuf> {
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.is_file() {
            return Some(local);
        }
        config_dir()
            .map(|dir| dir.join("lexat").join(CONFIG_FILE_NAME))
            .filter(|path| path.is_file())
    }

    /// A scanner built from this configuration with every symbol registered.
    pub fn build_scanner<'a>(&self) -> Scanner<'a, u32> {
        let mut scanner = Scanner::new(self.scanner.clone());
        for (name, value) in &self.symbols {
            scanner.add_symbol(name, *value);
        }
        scanner
    }

    /// Name of the symbol with `value`, if any.
    pub fn symbol_name(&self, value: u32) -> Option<&str> {
        self.symbols
            .iter()
            .find(|(_, v)| **v == value)
            .map(|(name, _)| name.as_str())
    }
}
