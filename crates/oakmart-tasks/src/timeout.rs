//! # Timeout Wrapping
//!
//! Races a caller-supplied operation against a timer.
//!
//! ## Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  with_timeout(op, 5s)                                                   │
//! │                                                                         │
//! │  op settles first   →  Ok(op's output)                                  │
//! │  timer fires first  →  Err(TimeoutError), warn! emitted                 │
//! │                                                                         │
//! │  A timeout means "stop waiting", not "abort work": wrap a spawned      │
//! │  task's JoinHandle if the operation must keep running after the        │
//! │  caller gives up. Retries belong to the calling layer; this helper     │
//! │  never retries.                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tracing::warn;

/// The operation did not settle within the allowed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("operation timed out after {}ms", .timeout.as_millis())]
pub struct TimeoutError {
    /// The timeout that elapsed.
    pub timeout: Duration,
}

/// Awaits `operation`, giving up after `timeout`.
///
/// ## Example
/// ```rust
/// use std::time::Duration;
/// use oakmart_tasks::with_timeout;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let result = with_timeout(async { 42 }, Duration::from_secs(5)).await;
/// assert_eq!(result.unwrap(), 42);
/// # }
/// ```
pub async fn with_timeout<F>(operation: F, timeout: Duration) -> Result<F::Output, TimeoutError>
where
    F: Future,
{
    match tokio::time::timeout(timeout, operation).await {
        Ok(output) => Ok(output),
        Err(_elapsed) => {
            warn!(timeout_ms = timeout.as_millis() as u64, "operation timed out");
            Err(TimeoutError { timeout })
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
