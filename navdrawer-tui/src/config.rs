//! Launch configuration: a small read-only TOML file plus flag overrides.
//!
//! Nothing is written back at exit. The demo keeps no state across runs,
//! so the config file is the only place a preference can live.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use navdrawer_core::screen::Screen;

pub const DEFAULT_TICK_RATE_MS: u64 = 50;
pub const DEFAULT_DRAWER_TRAVEL_MS: u64 = 250;

/// Settings read once at startup. Flags override fields one by one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input poll timeout per frame, in milliseconds.
    pub tick_rate_ms: u64,
    /// Full drawer open/close travel time, in milliseconds.
    pub drawer_travel_ms: u64,
    /// Screen shown at launch.
    pub start_screen: Screen,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            drawer_travel_ms: DEFAULT_DRAWER_TRAVEL_MS,
            start_screen: Screen::Start,
        }
    }
}

impl Config {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn drawer_travel(&self) -> Duration {
        Duration::from_millis(self.drawer_travel_ms)
    }
}

/// Platform config path: `<config dir>/navdrawer/config.toml`.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("navdrawer")
        .join("config.toml")
}

/// Load config from disk. A missing file means defaults; a file that does
/// not parse is an error rather than a silent fallback.
pub fn load(path: &Path) -> Result<Config> {
    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content)
            .with_context(|| format!("invalid config file: {}", path.display())),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
        Err(err) => {
            Err(err).with_context(|| format!("failed to read config file: {}", path.display()))
        }
    }
}
