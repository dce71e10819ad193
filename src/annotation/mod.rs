//! Lookup of annotation records from the remote variant service.
//!
//! - [`AnnotationSource`]: lookup-by-identifier seam used by the file processor
//! - [`client::MyVariantClient`]: MyVariant.info implementation over blocking HTTP
//! - [`retry::RetryPolicy`]: fixed-backoff retry of transient failures
//! - [`Fetcher`]: a source paired with its retry policy
//!
//! A lookup resolves to one of three outcomes:
//!
//! | Outcome | Meaning |
//! |---------|---------|
//! | `Ok(Some(payload))` | The service returned the requested field group |
//! | `Ok(None)` | Unknown variant, or the response lacked the field group |
//! | `Err(FetchError)` | The lookup failed (after retries, if transient) |

use thiserror::Error;

pub mod client;
pub mod payload;
pub mod retry;

pub use payload::{AnnotationPayload, AnnotationRecord};

use retry::RetryPolicy;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("rate limited by annotation service (HTTP 429)")]
    RateLimited,

    #[error("annotation service error: HTTP {0}")]
    Server(u16),

    #[error("request rejected by annotation service: HTTP {0}")]
    Client(u16),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("invalid API URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// Whether a later attempt could plausibly succeed
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Timeout(_) | Self::RateLimited | Self::Server(_)
        )
    }
}

/// Something that can look up annotations for a variant identifier.
pub trait AnnotationSource {
    /// Look up one identifier. `Ok(None)` means "not found".
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] describing why the lookup failed.
    fn fetch(&self, identifier: &str) -> Result<Option<AnnotationPayload>, FetchError>;
}

impl<S: AnnotationSource + ?Sized> AnnotationSource for &S {
    fn fetch(&self, identifier: &str) -> Result<Option<AnnotationPayload>, FetchError> {
        (**self).fetch(identifier)
    }
}

impl<S: AnnotationSource + ?Sized> AnnotationSource for Box<S> {
    fn fetch(&self, identifier: &str) -> Result<Option<AnnotationPayload>, FetchError> {
        (**self).fetch(identifier)
    }
}

/// An annotation source wrapped in a retry policy.
#[derive(Debug)]
pub struct Fetcher<S> {
    source: S,
    retry: RetryPolicy,
}

impl<S: AnnotationSource> Fetcher<S> {
    pub fn new(source: S, retry: RetryPolicy) -> Self {
        Self { source, retry }
    }

    /// Look up `identifier`, retrying transient failures per the policy.
    ///
    /// # Errors
    ///
    /// Returns the last error once attempts are exhausted, or the first
    /// non-transient error.
    pub fn fetch_with_retry(
        &self,
        identifier: &str,
    ) -> Result<Option<AnnotationPayload>, FetchError> {
        self.retry.run(identifier, || self.source.fetch(identifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::time::Duration;

    struct FlakySource {
        failures_left: Cell<u32>,
        calls: Cell<u32>,
    }

    impl AnnotationSource for FlakySource {
        fn fetch(&self, _identifier: &str) -> Result<Option<AnnotationPayload>, FetchError> {
            self.calls.set(self.calls.get() + 1);
            if self.failures_left.get() > 0 {
                self.failures_left.set(self.failures_left.get() - 1);
                return Err(FetchError::Server(503));
            }
            Ok(None)
        }
    }

    #[test]
    fn test_transient_classification() {
        assert!(FetchError::Network("reset".to_string()).is_transient());
        assert!(FetchError::Timeout("30s".to_string()).is_transient());
        assert!(FetchError::RateLimited.is_transient());
        assert!(FetchError::Server(502).is_transient());
        assert!(!FetchError::Client(400).is_transient());
        assert!(!FetchError::Malformed("not json".to_string()).is_transient());
        assert!(!FetchError::InvalidUrl("x".to_string()).is_transient());
    }

    #[test]
    fn test_fetcher_recovers_from_transient_failures() {
        let source = FlakySource {
            failures_left: Cell::new(2),
            calls: Cell::new(0),
        };
        let fetcher = Fetcher::new(&source, RetryPolicy::new(3, Duration::ZERO));
        assert!(fetcher.fetch_with_retry("chr1:g.1A>T").unwrap().is_none());
        assert_eq!(source.calls.get(), 3);
    }

    #[test]
    fn test_fetcher_gives_up_after_max_attempts() {
        let source = FlakySource {
            failures_left: Cell::new(5),
            calls: Cell::new(0),
        };
        let fetcher = Fetcher::new(&source, RetryPolicy::new(3, Duration::ZERO));
        let err = fetcher.fetch_with_retry("chr1:g.1A>T").unwrap_err();
        assert!(matches!(err, FetchError::Server(503)));
        assert_eq!(source.calls.get(), 3);
    }
}
