//! # Configuration
//!
//! Two layers:
//! * [`ConfigFile`] is the on-disk key/value store holding the credentials.
//!   It is created with a placeholder on first run.
//! * [`Config`] is the runtime configuration assembled once at startup from
//!   the file and the command line, then passed by reference to whoever
//!   needs it.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ConfigError;

/// Value written to a fresh configuration file.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_BATCH_LIMIT: usize = 32;

pub struct Config {
    /// Credential for the MacAddress.io source.
    pub mac_address_api_key: String,
    /// Upper bound for a single source request, connect to last byte.
    pub timeout: Duration,
    /// How many addresses may be resolved at the same time.
    pub batch_limit: usize,
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mac_address_api_key: PLACEHOLDER_API_KEY.to_string(),
            timeout: DEFAULT_TIMEOUT,
            batch_limit: DEFAULT_BATCH_LIMIT,
            quiet: 0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(rename = "API", default)]
    pub api: ApiSection,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSection {
    #[serde(rename = "MacAddressApiKey", default = "placeholder_key")]
    pub mac_address_api_key: String,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            mac_address_api_key: placeholder_key(),
        }
    }
}

fn placeholder_key() -> String {
    PLACEHOLDER_API_KEY.to_string()
}

impl ConfigFile {
    /// Reads the file at `path`, writing a placeholder one first if it does not exist.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let fresh = ConfigFile::default();
            fresh.write(path)?;
            warn!(
                "Configuration file created at {}. Please set your MacAddress.io API key.",
                path.display()
            );
            return Ok(fresh);
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded configuration from {}", path.display());

        if !file.has_api_key() {
            warn!("No MacAddress.io API key configured in {}", path.display());
        }
        Ok(file)
    }

    pub fn write(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = toml::to_string(self)?;
        fs::write(path, content).map_err(io_err)
    }

    /// `false` while the key is still the placeholder or blank.
    pub fn has_api_key(&self) -> bool {
        let key = self.api.mac_address_api_key.trim();
        !key.is_empty() && key != PLACEHOLDER_API_KEY
    }
}

/// `config.toml` next to the running executable.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let exe = std::env::current_exe().map_err(|_| ConfigError::NoConfigDir)?;
    let dir = exe.parent().ok_or(ConfigError::NoConfigDir)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}
