use std::path::PathBuf;

use thiserror::Error;

/// Problems with the addresses handed to the tool. Fatal, raised before any lookup.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("at least one MAC address or a file with MAC addresses is required")]
    NoAddresses,

    #[error("could not read address file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not access configuration file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed configuration file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("could not serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("could not determine the directory of the running executable")]
    NoConfigDir,
}
