//! feltbot configuration system.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{BotError, Result};

/// Root configuration.
///
/// The `actions` list order matters: the scheduler evaluates actions in
/// declaration order, so earlier entries win ties when several cooldowns come
/// ready on the same tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default = "default_actions")]
    pub actions: Vec<ActionConfig>,
    /// Minimum seconds between any two dispatched commands.
    #[serde(default = "default_spacing_secs")]
    pub spacing_secs: u64,
    /// Scheduler evaluation interval in seconds.
    #[serde(default = "default_tick_secs")]
    pub tick_secs: u64,
}

/// One rate-limited income command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionConfig {
    /// The command identifier sent to the game, e.g. `$work`.
    pub id: String,
    /// Seconds the game enforces between uses of this command.
    pub cooldown_secs: u64,
}

fn default_actions() -> Vec<ActionConfig> {
    // Income commands carry the game's advertised cooldowns plus a 5s safety
    // margin. The deposit sweep is declared last so it loses every priority
    // tie and only goes out when no income command is due.
    vec![
        ActionConfig { id: "$work".into(), cooldown_secs: 5 * 60 + 5 },
        ActionConfig { id: "$slut".into(), cooldown_secs: 13 * 60 + 5 },
        ActionConfig { id: "$crime".into(), cooldown_secs: 20 * 60 + 5 },
        ActionConfig { id: "$dep all".into(), cooldown_secs: 30 * 60 },
    ]
}

fn default_spacing_secs() -> u64 { 6 }
fn default_tick_secs() -> u64 { 1 }

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            actions: default_actions(),
            spacing_secs: default_spacing_secs(),
            tick_secs: default_tick_secs(),
        }
    }
}

impl BotConfig {
    /// Load config from the default path (~/.feltbot/config.toml), falling
    /// back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| BotError::Config(format!("failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| BotError::Config(format!("failed to parse config: {e}")))?;
        Ok(config)
    }

    /// Get the default config path.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".feltbot")
            .join("config.toml")
    }
}
