// Bounded waiting for asynchronous page state.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use crate::error::{Error, Result};

/// Default timeout for wait operations (10 seconds)
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default polling interval (500ms)
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Options for wait operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitOptions {
    /// How long to keep polling before giving up
    pub timeout: Duration,
    /// Pause between polls
    pub poll_interval: Duration,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_WAIT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl WaitOptions {
    pub fn new(timeout: Duration, poll_interval: Duration) -> Self {
        Self {
            timeout,
            poll_interval,
        }
    }

    /// Set the timeout
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the polling interval
    pub const fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }
}

/// Poll `predicate` until it holds or the timeout elapses.
///
/// The predicate is polled immediately, then once per `poll_interval`.
/// A predicate error aborts the wait and propagates; a timeout fails with
/// [`Error::WaitTimeout`] naming `description`. There is no retry beyond
/// the polling loop itself: when the deadline passes, the wait is over.
pub async fn until<F, Fut>(options: WaitOptions, description: &str, mut predicate: F) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    let deadline = Instant::now() + options.timeout;
    loop {
        if predicate().await? {
            return Ok(());
        }
        if Instant::now() >= deadline {
            return Err(Error::WaitTimeout {
                waited_for: description.to_string(),
                timeout: options.timeout,
            });
        }
        tokio::time::sleep(options.poll_interval).await;
    }
}
