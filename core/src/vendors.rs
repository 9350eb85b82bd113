//! The central **abstraction** for vendor lookup sources.
//!
//! Every remote service implements [`VendorSource`]. Higher layers only
//! depend on the trait, so sources can be added or faked in tests without
//! touching the resolver.

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use macvend_common::config::Config;
use macvend_common::lookup::{LookupOutcome, LookupStatus};
use thiserror::Error;
use tracing::{debug, warn};

mod http;
mod macaddress_io;
mod macvendors;
mod wireshark;

pub use http::build_client;
pub use macaddress_io::MacAddressIo;
pub use macvendors::MacVendors;
pub use wireshark::Wireshark;

/// One external service able to map an OUI prefix to a manufacturer.
#[async_trait]
pub trait VendorSource: Send + Sync {
    /// Identifier used to key this source's outcomes.
    fn name(&self) -> &str;

    /// Performs a single request for `prefix`.
    ///
    /// Never fails: transport problems come back as
    /// [`LookupStatus::ConnectionError`], unusable answers as
    /// [`LookupStatus::NotFound`].
    async fn query(&self, prefix: &str) -> LookupOutcome;
}

/// Why a source could not produce a vendor name.
#[derive(Debug, Error)]
pub(crate) enum SourceError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("empty response body")]
    EmptyBody,
    #[error("vendor pattern not found in response")]
    NoMatch,
}

/// Collapses a source result into the outcome reported upstream.
pub(crate) fn into_outcome(source: &str, result: Result<String, SourceError>) -> LookupOutcome {
    let status = match result {
        Ok(vendor) => LookupStatus::Found(vendor),
        Err(SourceError::Transport(e)) => {
            warn!("{source} lookup failed: {e}");
            LookupStatus::ConnectionError
        }
        Err(e) => {
            debug!("{source} has no vendor: {e}");
            LookupStatus::NotFound
        }
    };
    LookupOutcome::new(source, status)
}

/// Builds the three production sources sharing one HTTP client.
pub fn default_sources(cfg: &Config) -> anyhow::Result<Vec<Arc<dyn VendorSource>>> {
    let client = build_client(cfg).context("building HTTP client")?;

    Ok(vec![
        Arc::new(MacVendors::new(client.clone())),
        Arc::new(MacAddressIo::new(client.clone(), cfg)),
        Arc::new(Wireshark::new(client)),
    ])
}
