//! Throttling for requests to the Steam Web API.

use std::fmt;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};

/// The default minimum interval between requests to the Steam Web API.
pub const DEFAULT_REQUEST_INTERVAL: Duration = Duration::from_millis(100);

/// A token bucket allowing one request per interval. Clones share the same bucket, so every
/// clone waits on the same clock.
#[derive(Clone)]
pub struct RequestLimiter {
    limiter: Arc<DefaultDirectRateLimiter>,
    interval: Duration,
}

impl fmt::Debug for RequestLimiter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RequestLimiter")
            .field("interval", &self.interval)
            .finish()
    }
}

impl Default for RequestLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_REQUEST_INTERVAL)
    }
}

impl RequestLimiter {
    /// Creates a limiter allowing one request per `interval`. Intervals of zero are raised to
    /// one nanosecond; use [`RequestLimiter::with_interval`] to disable limiting instead.
    pub fn new(interval: Duration) -> Self {
        let interval = interval.max(Duration::from_nanos(1));
        let quota = Quota::with_period(interval)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(NonZeroU32::MIN);

        Self {
            limiter: Arc::new(RateLimiter::direct(quota)),
            interval,
        }
    }

    /// Creates a limiter for `interval`. Returns `None` when `interval` is zero.
    pub fn with_interval(interval: Duration) -> Option<Self> {
        if interval.is_zero() {
            return None;
        }

        Some(Self::new(interval))
    }

    /// The minimum interval between requests.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Waits until a request is allowed.
    pub async fn until_ready(&self) {
        self.limiter.until_ready().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn zero_interval_disables_limiting() {
        assert!(RequestLimiter::with_interval(Duration::ZERO).is_none());
        assert!(RequestLimiter::with_interval(Duration::from_millis(5)).is_some());
    }

    #[tokio::test]
    async fn spaces_requests() {
        let limiter = RequestLimiter::new(Duration::from_millis(50));
        let start = Instant::now();

        limiter.until_ready().await;
        limiter.until_ready().await;
        limiter.until_ready().await;

        assert!(start.elapsed() >= Duration::from_millis(90));
    }

    #[tokio::test]
    async fn clones_share_the_bucket() {
        let limiter = RequestLimiter::new(Duration::from_millis(50));
        let other = limiter.clone();
        let start = Instant::now();
        let first = tokio::spawn(async move { other.until_ready().await });

        limiter.until_ready().await;
        first.await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(45));
    }
}
