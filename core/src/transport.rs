//! The seam between request building and the network.
//!
//! # Design
//! `PhotoQuery` only ever produces `HttpRequest` values; something else has
//! to execute them. `Transport` is that something. `ReqwestTransport` is the
//! production implementation: one `reqwest::Client` configured once with the
//! timeout and the `Authorization` header, so every request it sends carries
//! the credential without the call sites having to remember it.
//!
//! No retries, no interception. Whatever the exchange yields is returned.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes a GET described by `HttpRequest`.
///
/// Implementations must resolve non-2xx statuses to `ApiError::Http` and
/// must not retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// `Transport` backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base: Url,
    base_url: String,
}

impl ReqwestTransport {
    /// Build the HTTP client from `config`.
    ///
    /// # Errors
    /// `ApiError::Config` if the base URL does not parse, the access key
    /// is not a valid header value, or the client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let base = Url::parse(&base_url)
            .map_err(|e| ApiError::Config(format!("invalid base URL `{base_url}`: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::Config(format!("base URL `{base_url}` cannot carry a path")));
        }

        let mut auth = HeaderValue::from_str(&config.authorization())
            .map_err(|e| ApiError::Config(format!("invalid access key: {e}")))?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Config(format!("HTTP client construction failed: {e}")))?;

        Ok(Self {
            client,
            base,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `request.path` arrives with its segments already percent-encoded by
    /// `PhotoQuery`; it is appended to whatever path the base URL carries.
    fn url_for(&self, request: &HttpRequest) -> Url {
        let mut url = self.base.clone();
        let path = format!("{}{}", self.base.path().trim_end_matches('/'), request.path);
        url.set_path(&path);
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }
        url
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = self.url_for(&request);
        debug!(path = %request.path, params = request.query.len(), "sending request");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.text().await?;
        debug!(path = %request.path, status = status.as_u16(), "received response");

        if !status.is_success() {
            warn!(path = %request.path, status = status.as_u16(), "request rejected");
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(HttpResponse {
            status: status.as_u16(),
            headers,
            body,
        })
    }
}
