//! Optional RON configuration for pulsemon.
//!
//! Looked up from `--config` first, then `./pulsemon.ron`. Every field is
//! optional in the file; CLI flags win over file values.

use std::fs;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use pulse_core::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use pulse_engine::ServerSettings;
use pulse_logging::{pulse_debug, pulse_info};
use serde::Deserialize;

use crate::platform::logging::LogDestination;

const CONFIG_FILENAME: &str = "pulsemon.ron";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub bind_address: IpAddr,
    pub accept_timeout_ms: u64,
    pub connect_timeout_ms: u64,
    pub width: u32,
    pub height: u32,
    pub log: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        let settings = ServerSettings::default();
        Self {
            bind_address: settings.bind_address,
            accept_timeout_ms: settings.accept_timeout.as_millis() as u64,
            connect_timeout_ms: settings.connect_timeout.as_millis() as u64,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            log: LogDestination::Terminal,
        }
    }
}

impl AppConfig {
    /// Loads `explicit` if given, else `./pulsemon.ron` if it exists, else defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => {
                let local = PathBuf::from(CONFIG_FILENAME);
                if local.is_file() {
                    Self::load_file(&local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn load_file(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::parse(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        pulse_info!("Loaded config from {}", path.display());
        pulse_debug!("{:?}", config);
        Ok(config)
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let config: Self = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.accept_timeout_ms > 0, "accept_timeout_ms must be > 0");
        anyhow::ensure!(self.connect_timeout_ms > 0, "connect_timeout_ms must be > 0");
        Ok(())
    }

    pub fn server_settings(&self) -> ServerSettings {
        ServerSettings {
            bind_address: self.bind_address,
            accept_timeout: Duration::from_millis(self.accept_timeout_ms),
            connect_timeout: Duration::from_millis(self.connect_timeout_ms),
        }
    }
}
