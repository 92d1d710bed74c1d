//! Expiry Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheEngine;

/// Spawns a background task that periodically purges expired entries.
///
/// The task sleeps for `cleanup_interval_secs` between sweeps and holds the
/// engine's write lock only for the duration of each purge. Purging never
/// touches the statistics counters.
///
/// Returns the task's JoinHandle so it can be aborted during shutdown.
pub fn spawn_cleanup_task(cache: Arc<CacheEngine>, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting expiry sweep task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.purge_expired().await;
            if removed > 0 {
                info!("Expiry sweep: removed {} expired entries", removed);
            } else {
                debug!("Expiry sweep: no expired entries found");
            }
        }
    })
}
