//! Retry policy for transient API failures.
//!
//! A request is retried when it is rate limited (429), when the server fails
//! with a status in the configured server-error range (5xx by default), or
//! when the transport fails before any response arrives. Every other outcome
//! is final.
//!
//! # Backoff
//!
//! The wait before attempt `n + 1` is `min(max_delay, base_delay * 2^(n-1))`
//! with equal jitter applied: a uniformly random duration in the upper half
//! of that delay. A `Retry-After` header on a 429 response replaces the
//! computed backoff (still capped at `max_delay`).
//!
//! | attempt | un-jittered delay (defaults) |
//! |---------|------------------------------|
//! | 1       | 500ms                        |
//! | 2       | 1s                           |
//! | 3       | 2s                           |
//! | ...     | capped at 10s                |
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use shopify_rest::clients::RetryPolicy;
//!
//! let policy = RetryPolicy::new(4, Duration::from_millis(100), Duration::from_secs(1)).unwrap();
//! assert_eq!(policy.backoff(1), Duration::from_millis(100));
//! assert_eq!(policy.backoff(3), Duration::from_millis(400));
//! assert_eq!(policy.backoff(10), Duration::from_secs(1));
//! ```

use std::ops::RangeInclusive;
use std::time::Duration;

use rand::Rng;

use crate::clients::errors::HttpError;
use crate::error::ConfigError;

/// Default maximum number of attempts, including the first one.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default delay before the first retry.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(500);

/// Default upper bound for any single wait.
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(10);

/// Status code signalling throttling.
pub const RATE_LIMITED_STATUS: u16 = 429;

/// Retry policy configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
    max_delay: Duration,
    server_error_statuses: RangeInclusive<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
            server_error_statuses: 500..=599,
        }
    }
}

impl RetryPolicy {
    /// Creates a retry policy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRetryPolicy`] if `max_attempts` is zero
    /// or `max_delay` is shorter than `base_delay`.
    pub fn new(
        max_attempts: u32,
        base_delay: Duration,
        max_delay: Duration,
    ) -> Result<Self, ConfigError> {
        if max_delay < base_delay {
            return Err(ConfigError::InvalidRetryPolicy {
                reason: "max_delay must be greater than or equal to base_delay".to_string(),
            });
        }
        Self {
            base_delay,
            max_delay,
            ..Self::default()
        }
        .with_max_attempts(max_attempts)
    }

    /// A policy that sends every request exactly once.
    #[must_use]
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Returns a copy with a different attempt limit.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRetryPolicy`] if `max_attempts` is zero.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Result<Self, ConfigError> {
        if max_attempts == 0 {
            return Err(ConfigError::InvalidRetryPolicy {
                reason: "max_attempts must be at least 1".to_string(),
            });
        }
        self.max_attempts = max_attempts;
        Ok(self)
    }

    /// Returns a copy that only retries server errors within `statuses`.
    #[must_use]
    pub fn with_server_error_statuses(mut self, statuses: RangeInclusive<u16>) -> Self {
        self.server_error_statuses = statuses;
        self
    }

    /// Maximum number of attempts, including the first one.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay before the first retry.
    #[must_use]
    pub const fn base_delay(&self) -> Duration {
        self.base_delay
    }

    /// Upper bound for any single wait.
    #[must_use]
    pub const fn max_delay(&self) -> Duration {
        self.max_delay
    }

    /// Server-error statuses that are retried.
    #[must_use]
    pub const fn server_error_statuses(&self) -> &RangeInclusive<u16> {
        &self.server_error_statuses
    }

    /// Returns `true` if `error` is worth another attempt.
    #[must_use]
    pub fn should_retry(&self, error: &HttpError) -> bool {
        match error {
            HttpError::RateLimited(_) => true,
            HttpError::Server(e) => self.server_error_statuses.contains(&e.response.code),
            HttpError::Transport(e) => !e.is_builder(),
            _ => false,
        }
    }

    /// Exponential delay after failed attempt `attempt` (1-based), without jitter.
    #[must_use]
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31);
        self.base_delay
            .checked_mul(1_u32 << exponent)
            .map_or(self.max_delay, |delay| delay.min(self.max_delay))
    }

    /// Wait before the next attempt.
    ///
    /// Uses `retry_after` when the server supplied one, otherwise the
    /// jittered exponential backoff.
    #[must_use]
    pub fn delay_for(&self, attempt: u32, retry_after: Option<Duration>) -> Duration {
        if let Some(retry_after) = retry_after {
            return retry_after.min(self.max_delay);
        }
        let delay = self.backoff(attempt);
        let half = delay / 2;
        if half.is_zero() {
            return delay;
        }
        rand::thread_rng().gen_range(half..=delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::errors::{HttpResponseError, RateLimitedError, ServerError};

    fn response_error(code: u16) -> HttpResponseError {
        HttpResponseError::new(code, "error")
    }

    fn server_error(code: u16) -> ServerError {
        ServerError {
            response: response_error(code),
            retry_after: None,
        }
    }

    #[test]
    fn test_default_policy_values() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts(), 3);
        assert_eq!(policy.base_delay(), Duration::from_millis(500));
        assert_eq!(policy.max_delay(), Duration::from_secs(10));
    }

    #[test]
    fn test_backoff_doubles_and_caps() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff(1), Duration::from_millis(500));
        assert_eq!(policy.backoff(2), Duration::from_secs(1));
        assert_eq!(policy.backoff(3), Duration::from_secs(2));
        assert_eq!(policy.backoff(6), Duration::from_secs(10));
        assert_eq!(policy.backoff(u32::MAX), Duration::from_secs(10));
    }

    #[test]
    fn test_jittered_delay_stays_in_upper_half() {
        let policy = RetryPolicy::default();
        for _ in 0..100 {
            let delay = policy.delay_for(2, None);
            assert!(delay >= Duration::from_millis(500));
            assert!(delay <= Duration::from_secs(1));
        }
    }

    #[test]
    fn test_retry_after_overrides_backoff_and_is_capped() {
        let policy = RetryPolicy::default();
        assert_eq!(
            policy.delay_for(1, Some(Duration::from_secs(2))),
            Duration::from_secs(2)
        );
        assert_eq!(
            policy.delay_for(1, Some(Duration::from_secs(60))),
            Duration::from_secs(10)
        );
    }

    #[test]
    fn test_zero_base_delay_has_no_jitter() {
        let policy = RetryPolicy::new(3, Duration::ZERO, Duration::ZERO).unwrap();
        assert_eq!(policy.delay_for(1, None), Duration::ZERO);
    }

    #[test]
    fn test_new_rejects_invalid_values() {
        assert!(RetryPolicy::new(0, DEFAULT_BASE_DELAY, DEFAULT_MAX_DELAY).is_err());
        assert!(RetryPolicy::new(3, Duration::from_secs(5), Duration::from_secs(1)).is_err());
    }

    #[test]
    fn test_should_retry_classification() {
        let policy = RetryPolicy::default();

        assert!(policy.should_retry(&HttpError::RateLimited(RateLimitedError {
            response: response_error(429),
            retry_after: None,
        })));
        assert!(policy.should_retry(&HttpError::Server(server_error(503))));
        assert!(!policy.should_retry(&HttpError::Validation(response_error(422))));
        assert!(!policy.should_retry(&HttpError::Cancelled));
    }

    #[test]
    fn test_server_error_range_is_configurable() {
        let policy = RetryPolicy::default().with_server_error_statuses(500..=503);
        assert!(policy.should_retry(&HttpError::Server(server_error(503))));
        assert!(!policy.should_retry(&HttpError::Server(server_error(504))));
    }
}
