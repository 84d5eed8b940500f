//! Configuration for the agora binary
//!
//! Read from a YAML file (`agora.yaml` in the working directory unless
//! `--config` points elsewhere). Every field is optional.
//!
//! ```yaml
//! storePath: .agora/store.json
//! defaultRounds: 2
//! thinkingMinMs: 1000
//! thinkingMaxMs: 2000
//! settleMs: 1500
//! ```

use std::path::{Path, PathBuf};

use agora_usecase::DebateConfig;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Key-value file holding the knowledge base
    pub store_path: PathBuf,

    /// Rounds used when `--rounds` is not given
    pub default_rounds: u32,

    pub thinking_min_ms: u64,
    pub thinking_max_ms: u64,
    pub settle_ms: u64,
}

impl AppConfig {
    /// File picked up from the working directory when present
    pub const DEFAULT_FILE: &'static str = "agora.yaml";

    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Explicit path must exist; otherwise fall back to `agora.yaml`, then defaults
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let default_path = Path::new(Self::DEFAULT_FILE);
        if default_path.exists() {
            debug!("Loading config from {}", default_path.display());
            return Self::from_file(default_path);
        }

        Ok(Self::default())
    }

    pub fn debate_config(&self) -> DebateConfig {
        DebateConfig {
            thinking_min_ms: self.thinking_min_ms,
            thinking_max_ms: self.thinking_max_ms,
            settle_ms: self.settle_ms,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let pacing = DebateConfig::default();
        Self {
            store_path: PathBuf::from(".agora").join("store.json"),
            default_rounds: 2,
            thinking_min_ms: pacing.thinking_min_ms,
            thinking_max_ms: pacing.thinking_max_ms,
            settle_ms: pacing.settle_ms,
        }
    }
}
