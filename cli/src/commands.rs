pub mod lookup;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use macvend_common::config::{Config, ConfigFile, DEFAULT_BATCH_LIMIT};

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "macvend")]
#[command(version)]
#[command(about = "Look up the manufacturer of MAC addresses across several online sources.")]
pub struct CommandLine {
    /// MAC addresses to look up
    #[arg(short, long, num_args = 1.., value_name = "MAC")]
    pub macs: Vec<String>,

    /// Text file with one MAC address per line
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Configuration file holding the API key [default: config.toml next to the executable]
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// How many addresses to resolve at the same time
    #[arg(short, long, default_value_t = DEFAULT_BATCH_LIMIT)]
    pub jobs: usize,

    /// Less output; hides banner, headers and the spinner
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Merges the flags with the credentials read from `file`.
    pub fn to_config(&self, file: &ConfigFile) -> Config {
        Config {
            mac_address_api_key: file.api.mac_address_api_key.clone(),
            timeout: Duration::from_secs(self.timeout),
            batch_limit: self.jobs,
            quiet: self.quiet,
        }
    }
}
