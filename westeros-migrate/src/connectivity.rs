//! Bounded waiting for a graph store to come up.

use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};
use westeros_migrate_repository::StoreError;

use crate::errors::MigrateError;

/// Default number of connection attempts before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100;

/// Default pause between connection attempts.
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(1);

/// How long to keep trying to reach a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts,
            interval,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_INTERVAL)
    }
}

/// Call `connect` until it succeeds or the policy runs out.
///
/// Only connection-class failures are retried; any other error is returned
/// right away. There is no pause after the last attempt.
///
/// # Arguments
///
/// * `store` - Name used in logs and in the final error
/// * `policy` - Attempt ceiling and pause between attempts
/// * `connect` - Produces one connection attempt
///
/// # Returns
///
/// * `Ok(T)` - The first successful connection
/// * `Err(MigrateError::ConnectionUnavailable)` - If every attempt hit a connection failure
/// * `Err(MigrateError::Store)` - If an attempt failed for another reason
pub async fn wait_for_store<T, F, Fut>(
    store: &str,
    policy: &RetryPolicy,
    mut connect: F,
) -> Result<T, MigrateError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, StoreError>>,
{
    let attempts = policy.max_attempts.max(1);

    for attempt in 1..=attempts {
        match connect().await {
            Ok(connection) => {
                if attempt > 1 {
                    info!(store, attempt, "Store became reachable");
                }
                return Ok(connection);
            }
            Err(e) if e.is_connection() => {
                warn!(
                    store,
                    attempt,
                    max_attempts = attempts,
                    error = %e,
                    retry_interval_ms = policy.interval.as_millis() as u64,
                    "Store unreachable"
                );
                if attempt < attempts {
                    sleep(policy.interval).await;
                }
            }
            Err(e) => return Err(e.into()),
        }
    }

    Err(MigrateError::ConnectionUnavailable {
        store: store.to_string(),
        attempts,
    })
}
