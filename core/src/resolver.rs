//! # Fan-out Resolution
//!
//! Resolves one address by querying every configured [`VendorSource`]
//! concurrently and waiting for all of them.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use async_trait::async_trait;
use futures::FutureExt;
use macvend_common::lookup::{AddressResult, LookupOutcome, LookupStatus};
use macvend_common::network::mac;
use tokio::task::JoinSet;
use tracing::{debug, error, warn};

use crate::vendors::VendorSource;

/// Anything able to turn one raw address into its full set of outcomes.
///
/// [`crate::batch::BatchCoordinator`] depends on this rather than on
/// [`FanOutResolver`] directly.
#[async_trait]
pub trait AddressResolver: Send + Sync {
    async fn resolve(&self, address: &str) -> AddressResult;
}

/// Queries all sources for the same normalized key, one task per source.
pub struct FanOutResolver {
    sources: Vec<Arc<dyn VendorSource>>,
}

impl FanOutResolver {
    pub fn new(sources: Vec<Arc<dyn VendorSource>>) -> Self {
        Self { sources }
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }
}

#[async_trait]
impl AddressResolver for FanOutResolver {
    /// Returns exactly one outcome per source, in completion order.
    ///
    /// A source whose task panics is reported as
    /// [`LookupStatus::ConnectionError`] under its own name.
    async fn resolve(&self, address: &str) -> AddressResult {
        let prefix = mac::normalize(address);
        debug!("Resolving {address} as {prefix:?}");

        let mut tasks: JoinSet<LookupOutcome> = JoinSet::new();
        for source in &self.sources {
            let source = Arc::clone(source);
            let prefix = prefix.clone();
            tasks.spawn(async move {
                let name = source.name().to_string();
                match AssertUnwindSafe(source.query(&prefix)).catch_unwind().await {
                    // the resolver owns the source name, whatever the outcome says
                    Ok(outcome) if outcome.source() == name => outcome,
                    Ok(outcome) => {
                        warn!("{name} labelled its outcome {:?}", outcome.source());
                        LookupOutcome::new(name, outcome.into_status())
                    }
                    Err(_) => {
                        error!("{name} lookup for {prefix} panicked");
                        LookupOutcome::new(name, LookupStatus::ConnectionError)
                    }
                }
            });
        }

        let mut result = AddressResult::new(address, prefix);
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(outcome) => result.push(outcome),
                Err(e) => error!("Lookup task for {address} did not finish: {e}"),
            }
        }

        // Whatever did not report back still owes exactly one outcome.
        for source in &self.sources {
            if result.status_of(source.name()).is_none() {
                result.push(LookupOutcome::new(source.name(), LookupStatus::ConnectionError));
            }
        }

        result
    }
}
