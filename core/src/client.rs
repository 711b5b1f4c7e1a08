//! The Unsplash client.
//!
//! # Design
//! `UnsplashClient` owns the validated configuration and one transport,
//! both fixed at construction. It carries no mutable state, so a single
//! instance can serve any number of concurrent calls from `&self`. Photo
//! endpoints hang off `photos()`, which borrows the client rather than
//! owning a copy of it.

use std::fmt;
use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::photos::PhotoQuery;
use crate::transport::{ReqwestTransport, Transport};

#[derive(Clone)]
pub struct UnsplashClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl UnsplashClient {
    /// Build a client that talks to `config.base_url` over reqwest.
    ///
    /// # Errors
    /// `ApiError::Config` if the access key is missing or empty, or the
    /// HTTP transport cannot be built from the configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        config.validate()?;
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self {
            config,
            transport: Arc::new(transport),
        })
    }

    /// Build a client around a caller-supplied transport. The transport is
    /// responsible for attaching `config.authorization()` to its requests.
    ///
    /// # Errors
    /// `ApiError::Config` if the access key is missing or empty.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self, ApiError> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn photos(&self) -> PhotoQuery<'_> {
        PhotoQuery::new(self)
    }

    pub(crate) async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.transport.send(request).await
    }
}

impl fmt::Debug for UnsplashClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnsplashClient")
            .field("base_url", &self.config.base_url)
            .field("timeout", &self.config.timeout)
            .finish_non_exhaustive()
    }
}
