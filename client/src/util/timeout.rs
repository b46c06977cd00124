//! Global request deadline.
//!
//! Backend calls race a timer; whichever settles first wins. The race itself is
//! executor-agnostic so it can be driven in native tests, while the browser
//! build supplies a `gloo-timers` deadline.

#[cfg(test)]
#[path = "timeout_test.rs"]
mod timeout_test;

use std::future::Future;
use std::pin::pin;

use futures::future::{Either, select};

use crate::net::error::BackendError;

/// Resolve `operation` unless `deadline` completes first.
///
/// When both are ready on the same poll the operation wins.
///
/// # Errors
///
/// Returns [`BackendError::Timeout`] carrying `timeout_ms` if the deadline fires first.
pub async fn race_deadline<F, D>(operation: F, deadline: D, timeout_ms: u64) -> Result<F::Output, BackendError>
where
    F: Future,
    D: Future<Output = ()>,
{
    let operation = pin!(operation);
    let deadline = pin!(deadline);
    match select(operation, deadline).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(((), _)) => Err(BackendError::Timeout(timeout_ms)),
    }
}

/// Resolve `operation` within `timeout_ms` of browser time.
///
/// # Errors
///
/// Returns [`BackendError::Timeout`] when the deadline elapses first.
#[cfg(feature = "hydrate")]
pub async fn with_timeout<F>(operation: F, timeout_ms: u64) -> Result<F::Output, BackendError>
where
    F: Future,
{
    let millis = u32::try_from(timeout_ms).unwrap_or(u32::MAX);
    let deadline = gloo_timers::future::TimeoutFuture::new(millis);
    race_deadline(operation, deadline, timeout_ms).await
}
