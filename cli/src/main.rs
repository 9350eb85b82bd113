mod commands;
mod input;
mod output;
mod terminal;

use std::process::ExitCode;
use std::sync::Arc;

use commands::{CommandLine, lookup};
use macvend_common::config::{self, Config, ConfigFile};
use macvend_core::vendors::{self, VendorSource};
use terminal::{logging, print};
use tracing::error;

/// Exit status when no usable addresses were given.
const INPUT_ERROR_EXIT: u8 = 2;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);
    print::banner(commands.no_banner, commands.quiet);

    run(commands, vendors::default_sources).await
}

/// Validates input, loads the configuration and runs the lookup.
///
/// `build_sources` is only called once the input is known to be usable.
/// Lookup failures are part of the output, so they never change the exit status.
async fn run<F>(commands: CommandLine, build_sources: F) -> anyhow::Result<ExitCode>
where
    F: FnOnce(&Config) -> anyhow::Result<Vec<Arc<dyn VendorSource>>>,
{
    let addresses = match input::collect(&commands.macs, commands.file.as_deref()) {
        Ok(addresses) => addresses,
        Err(e) => {
            error!("{e}");
            return Ok(ExitCode::from(INPUT_ERROR_EXIT));
        }
    };

    let config_path = match &commands.config {
        Some(path) => path.clone(),
        None => config::default_config_path()?,
    };
    let file = ConfigFile::load_or_create(&config_path)?;
    let cfg = commands.to_config(&file);

    let sources = build_sources(&cfg)?;
    lookup::lookup(addresses, sources, commands.output, &cfg).await?;
    Ok(ExitCode::SUCCESS)
}
