//! Server configuration
//!
//! `config.json` in the working directory, the same artifact the GPSS server
//! reads. Only the listening address is configured; the dispatch path never
//! touches this.

use std::fs;
use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Default config file name
pub const CONFIG_FILE: &str = "config.json";

/// Listening address for the server mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Host address to bind
    pub ip: String,
    /// Network port to bind
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ip: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Config {
    /// Load config from a JSON file, or defaults when the file is missing.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Save config as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))
    }

    /// The `ip:port` pair to bind.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
