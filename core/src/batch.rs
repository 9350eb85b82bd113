//! # Batch Resolution Service
//!
//! Resolves a list of addresses concurrently and folds the results into a
//! [`BatchResult`].
//!
//! Each address runs as its own task behind a semaphore, so at most
//! `limit` addresses are in flight no matter how long the list is. A task
//! that faults is logged and left out of the result; the others carry on.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::FutureExt;
use macvend_common::config::Config;
use macvend_common::lookup::{AddressResult, BatchResult};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, info};

use crate::resolver::AddressResolver;

type ProgressCallback = Arc<dyn Fn(usize) + Send + Sync>;

pub struct BatchCoordinator<R> {
    resolver: Arc<R>,
    limit: usize,
    on_address_done: Option<ProgressCallback>,
}

impl<R> BatchCoordinator<R>
where
    R: AddressResolver + 'static,
{
    pub fn new(resolver: R, cfg: &Config) -> Self {
        Self::with_limit(resolver, cfg.batch_limit)
    }

    /// `limit` is clamped to at least one concurrent address.
    pub fn with_limit(resolver: R, limit: usize) -> Self {
        Self {
            resolver: Arc::new(resolver),
            limit: limit.max(1),
            on_address_done: None,
        }
    }

    /// Called with the running count of finished addresses, failed ones included.
    pub fn on_progress(mut self, callback: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.on_address_done = Some(Arc::new(callback));
        self
    }

    /// Resolves every address and waits for all of them.
    ///
    /// Duplicates are resolved as often as they appear; the result keeps one
    /// entry per distinct raw address. Callers must reject an empty list before
    /// getting here.
    pub async fn resolve_batch(&self, addresses: &[String]) -> BatchResult {
        let permits = Arc::new(Semaphore::new(self.limit));
        let finished = Arc::new(AtomicUsize::new(0));
        let mut tasks: JoinSet<(String, Option<AddressResult>)> = JoinSet::new();

        for address in addresses {
            let address = address.clone();
            let resolver = Arc::clone(&self.resolver);
            let permits = Arc::clone(&permits);
            let finished = Arc::clone(&finished);
            let callback = self.on_address_done.clone();

            tasks.spawn(async move {
                let resolved = match permits.acquire_owned().await {
                    Ok(_permit) => AssertUnwindSafe(resolver.resolve(&address))
                        .catch_unwind()
                        .await
                        .ok(),
                    Err(_) => None,
                };

                let count = finished.fetch_add(1, Ordering::Relaxed) + 1;
                if let Some(cb) = callback {
                    cb(count);
                }
                (address, resolved)
            });
        }

        let mut batch = BatchResult::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((_, Some(result))) => batch.insert(result),
                Ok((address, None)) => error!("{address} raised an unexpected error, skipping"),
                Err(e) => error!("Address task did not finish: {e}"),
            }
        }

        info!(
            "Resolved {} of {} requested addresses",
            batch.len(),
            addresses.len()
        );
        batch
    }
}
