//! Run configuration shared by the file processor and the batch runner.

use std::time::Duration;

use crate::annotation::retry::RetryPolicy;

/// Default MyVariant.info API root
pub const DEFAULT_API_URL: &str = "https://myvariant.info/v1";

/// Annotation field group requested from the service (and expected in the response)
pub const DEFAULT_FIELD_GROUP: &str = "cgi";

/// Input column holding the variant identifiers
pub const IDENTIFIER_COLUMN: &str = "Genomic Alteration";

/// Sheet written back into each processed workbook
pub const OUTPUT_SHEET_NAME: &str = "CGI_Annotated";

/// Extension a workbook must carry to be processed
pub const WORKBOOK_EXTENSION: &str = ".xlsx";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for one annotation run.
#[derive(Debug, Clone)]
pub struct AnnotatorConfig {
    /// Root URL of the variant annotation API (no trailing slash required)
    pub api_url: String,

    /// Field group requested for each variant, e.g. `cgi`
    pub field_group: String,

    /// Header of the column holding variant identifiers
    pub identifier_column: String,

    /// Name of the sheet the results are written to
    pub sheet_name: String,

    /// HTTP request timeout
    pub timeout: Duration,

    /// Retry policy for transient lookup failures
    pub retry: RetryPolicy,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            field_group: DEFAULT_FIELD_GROUP.to_string(),
            identifier_column: IDENTIFIER_COLUMN.to_string(),
            sheet_name: OUTPUT_SHEET_NAME.to_string(),
            timeout: DEFAULT_TIMEOUT,
            retry: RetryPolicy::default(),
        }
    }
}

impl AnnotatorConfig {
    /// Override the API root
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Override the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the retry policy
    #[must_use]
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_myvariant_cgi() {
        let config = AnnotatorConfig::default();
        assert_eq!(config.api_url, "https://myvariant.info/v1");
        assert_eq!(config.field_group, "cgi");
        assert_eq!(config.identifier_column, "Genomic Alteration");
        assert_eq!(config.sheet_name, "CGI_Annotated");
        assert_eq!(config.retry.max_attempts, 3);
        assert_eq!(config.retry.backoff, Duration::from_secs(1));
    }

    #[test]
    fn test_builders_override_fields() {
        let config = AnnotatorConfig::default()
            .with_api_url("http://localhost:9999/v1")
            .with_timeout(Duration::from_secs(5))
            .with_retry(RetryPolicy::new(1, Duration::ZERO));
        assert_eq!(config.api_url, "http://localhost:9999/v1");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.retry.max_attempts, 1);
    }
}
