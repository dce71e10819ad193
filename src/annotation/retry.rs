use std::thread;
use std::time::Duration;

use tracing::warn;

use super::FetchError;

/// Total attempts per lookup, including the first
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Fixed wait between attempts
pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(1);

/// Fixed-backoff retry for transient lookup failures.
///
/// Only errors where [`FetchError::is_transient`] holds are retried; anything
/// else is returned from the first attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff: DEFAULT_BACKOFF,
        }
    }
}

impl RetryPolicy {
    /// `max_attempts` below 1 is treated as 1.
    #[must_use]
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    /// Run `op` until it succeeds, fails non-transiently, or attempts run out.
    ///
    /// `label` names the lookup in retry warnings.
    ///
    /// # Errors
    ///
    /// Returns the error from the final attempt.
    pub fn run<T, F>(&self, label: &str, mut op: F) -> Result<T, FetchError>
    where
        F: FnMut() -> Result<T, FetchError>,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match op() {
                Ok(value) => return Ok(value),
                Err(e) if e.is_transient() && attempt < max_attempts => {
                    warn!(
                        "Lookup of {} failed (attempt {}/{}): {}. Retrying in {:?}",
                        label, attempt, max_attempts, e, self.backoff
                    );
                    if !self.backoff.is_zero() {
                        thread::sleep(self.backoff);
                    }
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_first_success_is_not_retried() {
        let mut calls = 0;
        let result = RetryPolicy::new(3, Duration::ZERO).run("v", || {
            calls += 1;
            Ok::<_, FetchError>(42)
        });
        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_non_transient_error_fails_fast() {
        let mut calls = 0;
        let result: Result<(), _> = RetryPolicy::new(3, Duration::ZERO).run("v", || {
            calls += 1;
            Err(FetchError::Client(400))
        });
        assert!(matches!(result, Err(FetchError::Client(400))));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_transient_error_exhausts_attempts() {
        let mut calls = 0;
        let result: Result<(), _> = RetryPolicy::new(3, Duration::ZERO).run("v", || {
            calls += 1;
            Err(FetchError::RateLimited)
        });
        assert!(matches!(result, Err(FetchError::RateLimited)));
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_zero_attempts_still_tries_once() {
        let mut calls = 0;
        let policy = RetryPolicy::new(0, Duration::ZERO);
        assert_eq!(policy.max_attempts, 1);
        let _: Result<(), _> = policy.run("v", || {
            calls += 1;
            Err(FetchError::Timeout("t".to_string()))
        });
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_backoff_is_applied_between_attempts() {
        let policy = RetryPolicy::new(3, Duration::from_millis(20));
        let start = Instant::now();
        let _: Result<(), _> = policy.run("v", || Err(FetchError::Server(500)));
        // Two waits between three attempts
        assert!(start.elapsed() >= Duration::from_millis(40));
    }
}
