//! Configuration for the transfer-graph CLI.
//!
//! Loaded from a TOML file with built-in defaults for every field.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag (or `TRANSFER_GRAPH_CONFIG`)
//! 2. XDG default: `~/.config/transfer-graph/config.toml`
//! 3. Built-in defaults
//!
//! An explicitly named file must exist; the XDG default may be absent.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use transfer_graph_core::{Error, Result, DEFAULT_TOP_N, WIKIPEDIA_BASE_URL};

/// League tables of the standard dataset, in load order.
pub const DEFAULT_SOURCES: [&str; 9] = [
    "1-bundesliga.csv",
    "championship.csv",
    "eredivisie.csv",
    "premier-liga.csv",
    "ligue-1.csv",
    "premier-league.csv",
    "serie-a.csv",
    "liga-nos.csv",
    "primera-division.csv",
];

// ============================================================================
// Configuration structs
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferConfig {
    pub data: DataConfig,
    pub links: LinksConfig,
    pub ranking: RankingConfig,
}

/// Where transfer tables are read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory that relative source paths are resolved against.
    pub base_dir: Option<String>,

    /// Source files, loaded in order.
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    pub wiki_base_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    pub default_top_n: usize,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            wiki_base_url: WIKIPEDIA_BASE_URL.to_string(),
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            default_top_n: DEFAULT_TOP_N,
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl TransferConfig {
    /// Load configuration from file or defaults.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match Self::resolve_config_path(explicit) {
            Some(path) if explicit.is_some() || path.exists() => {
                let text = std::fs::read_to_string(&path).map_err(|source| Error::Io {
                    path: path.clone(),
                    source,
                })?;
                tracing::debug!("reading config from {}", path.display());
                Self::from_toml_str(&text)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::config(e.to_string()))
    }

    /// Resolve the config file path from an explicit flag or the XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::default_config_path(),
        }
    }

    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("transfer-graph").join("config.toml"))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Apply command-line overrides. Non-empty `sources` replaces the list.
    pub fn apply_overrides(&mut self, data_dir: Option<String>, sources: Vec<String>) {
        if data_dir.is_some() {
            self.data.base_dir = data_dir;
        }
        if !sources.is_empty() {
            self.data.sources = sources;
        }
    }

    /// Source paths with relative entries resolved against `base_dir`.
    pub fn source_paths(&self) -> Vec<PathBuf> {
        self.data
            .sources
            .iter()
            .map(|source| match &self.data.base_dir {
                Some(base) => PathBuf::from(base).join(source),
                None => PathBuf::from(source),
            })
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
