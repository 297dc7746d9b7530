//! Fixed-window request limiter for the digest endpoint.

use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Allows at most `max_requests` calls per `window`.
///
/// The window starts at the first request after the previous window expired.
/// A `max_requests` of zero disables limiting.
///
/// # Example
///
/// ```
/// use paycheck_digest::quota::RateLimiter;
/// use std::time::{Duration, Instant};
///
/// let limiter = RateLimiter::new(2, Duration::from_secs(60));
/// let now = Instant::now();
/// assert!(limiter.check(now));
/// assert!(limiter.check(now));
/// assert!(!limiter.check(now));
/// assert!(limiter.check(now + Duration::from_secs(61)));
/// ```
#[derive(Debug)]
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    state: Mutex<Option<(Instant, u32)>>,
}

impl RateLimiter {
    /// Creates a limiter allowing `max_requests` per `window`.
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            state: Mutex::new(None),
        }
    }

    /// Creates a limiter that admits every request.
    pub fn unlimited() -> Self {
        Self::new(0, Duration::ZERO)
    }

    /// Records a request at `now`, returning whether it is admitted.
    pub fn check(&self, now: Instant) -> bool {
        if self.max_requests == 0 {
            return true;
        }

        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        match *state {
            Some((started, count)) if now.saturating_duration_since(started) < self.window => {
                if count >= self.max_requests {
                    false
                } else {
                    *state = Some((started, count + 1));
                    true
                }
            }
            _ => {
                *state = Some((now, 1));
                true
            }
        }
    }
}
