//! Client configuration.
//!
//! The access key is the only required value. Base URL and timeout default
//! to the public API endpoint and a one second budget; the overrides exist
//! so tests can point a client at a local stub server.

use std::time::Duration;

use crate::error::ApiError;

pub const DEFAULT_BASE_URL: &str = "https://api.unsplash.com/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1000);

/// Environment variables checked by `ClientConfig::from_env`, in order.
pub const ACCESS_KEY_VARS: [&str; 2] = ["UNSPLASH_ACCESS_KEY", "ACCESSKEY"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub access_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read the access key from the process environment.
    ///
    /// # Errors
    /// Returns `ApiError::Config` when none of `ACCESS_KEY_VARS` is set to a
    /// non-empty value.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like `from_env`, with the variable lookup supplied by the caller.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        ACCESS_KEY_VARS
            .iter()
            .filter_map(|&name| lookup(name))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .map(Self::new)
            .ok_or_else(|| {
                ApiError::Config(format!(
                    "no access key found in {}",
                    ACCESS_KEY_VARS.join(" or ")
                ))
            })
    }

    /// Value of the `Authorization` header sent with every request.
    pub fn authorization(&self) -> String {
        format!("Client-ID {}", self.access_key)
    }

    pub(crate) fn validate(&self) -> Result<(), ApiError> {
        if self.access_key.trim().is_empty() {
            return Err(ApiError::Config(
                r#"property "accesskey" must be defined"#.to_string(),
            ));
        }
        if self.base_url.trim().is_empty() {
            return Err(ApiError::Config("base URL must not be empty".to_string()));
        }
        Ok(())
    }
}
