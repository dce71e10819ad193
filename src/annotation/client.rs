//! MyVariant.info client.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{StatusCode, Url};
use serde_json::Value;
use tracing::debug;

use super::{AnnotationPayload, AnnotationSource, FetchError};
use crate::config::AnnotatorConfig;

/// Blocking client for `GET {api_url}/variant/{identifier}?fields={field_group}`.
#[derive(Debug)]
pub struct MyVariantClient {
    client: Client,
    base_url: Url,
    field_group: String,
}

impl MyVariantClient {
    /// Build a client for the endpoint and field group in `config`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidUrl` if the API URL cannot be parsed or cannot
    /// carry path segments, or `FetchError::Network` if the HTTP client cannot
    /// be constructed.
    pub fn new(config: &AnnotatorConfig) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.api_url)
            .map_err(|e| FetchError::InvalidUrl(format!("'{}': {e}", config.api_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(format!(
                "'{}' cannot carry a path",
                config.api_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("cgi-annotator/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| FetchError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            field_group: config.field_group.clone(),
        })
    }

    /// URL of the lookup for `identifier`; the identifier is percent-encoded as one path segment.
    #[must_use]
    pub fn variant_url(&self, identifier: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("variant").push(identifier);
        }
        url.query_pairs_mut()
            .clear()
            .append_pair("fields", &self.field_group);
        url
    }
}

impl AnnotationSource for MyVariantClient {
    fn fetch(&self, identifier: &str) -> Result<Option<AnnotationPayload>, FetchError> {
        let url = self.variant_url(identifier);
        debug!("GET {}", url);

        let response = self.client.get(url).send().map_err(request_error)?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if let Some(err) = status_error(status) {
            return Err(err);
        }

        // Transport failures while reading the body are retryable; bad JSON is not
        let bytes = response.bytes().map_err(request_error)?;
        let body: Value =
            serde_json::from_slice(&bytes).map_err(|e| FetchError::Malformed(e.to_string()))?;
        Ok(AnnotationPayload::from_response(body, &self.field_group))
    }
}

fn request_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout(e.to_string())
    } else {
        FetchError::Network(e.to_string())
    }
}

/// Map a non-404 HTTP status to an error; `None` for success statuses.
fn status_error(status: StatusCode) -> Option<FetchError> {
    if status.is_success() {
        None
    } else if status == StatusCode::TOO_MANY_REQUESTS {
        Some(FetchError::RateLimited)
    } else if status.is_server_error() {
        Some(FetchError::Server(status.as_u16()))
    } else {
        Some(FetchError::Client(status.as_u16()))
    }
}
