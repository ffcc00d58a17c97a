//! High-level API client with typed JSON methods.
//!
//! `RoyaleClient` combines the bearer token, the base URL and the HTTP
//! transport. Resource crates build paths and query parameters and hand them
//! to [`RoyaleClient::get_json`] and friends.
//!
//! ## Security
//!
//! - The bearer token is redacted in Debug output
//! - The token is skipped in tracing spans

use serde::{de::DeserializeOwned, Serialize};
use tracing::instrument;

use crate::client::RoyaleHttpClient;
use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::query::QueryParams;
use crate::request::{RequestBuilder, RequestMethod};
use crate::response::Response;

/// Authenticated API client.
///
/// Immutable after construction and cheap to clone, so one instance can be
/// shared across threads for independent calls.
///
/// # Example
///
/// ```rust,ignore
/// use royale_cr_client::RoyaleClient;
///
/// let client = RoyaleClient::new("my-api-token")?;
/// let player: serde_json::Value = client.get_json("/v1/players/%232PP")?;
/// ```
#[derive(Clone)]
pub struct RoyaleClient {
    http: RoyaleHttpClient,
    base_url: String,
    token: String,
}

impl std::fmt::Debug for RoyaleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoyaleClient")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl RoyaleClient {
    /// Create a client for the public API with the given bearer token.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(token, ClientConfig::default())
    }

    /// Create a client with custom configuration.
    pub fn with_config(token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(Error::new(ErrorKind::Config(
                "bearer token must not be empty".to_string(),
            )));
        }

        let parsed = url::Url::parse(&config.base_url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::new(ErrorKind::InvalidUrl(format!(
                "unsupported scheme '{}'",
                parsed.scheme()
            ))));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        let http = RoyaleHttpClient::new(config)?;
        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    /// Create a client from `ROYALE_API_TOKEN` and, if set, `ROYALE_API_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(crate::TOKEN_ENV_VAR).map_err(|_| {
            Error::new(ErrorKind::Config(format!(
                "environment variable not set: {}",
                crate::TOKEN_ENV_VAR
            )))
        })?;

        let mut builder = ClientConfig::builder();
        if let Ok(base_url) = std::env::var(crate::BASE_URL_ENV_VAR) {
            builder = builder.with_base_url(base_url);
        }

        Self::with_config(token, builder.build())
    }

    /// Get the base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the bearer token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Get the transport configuration.
    pub fn config(&self) -> &ClientConfig {
        self.http.config()
    }

    /// Resolve a path against the base URL.
    ///
    /// Paths are rooted at the API base; a missing leading `/` is added.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    // =========================================================================
    // Request construction
    // =========================================================================

    /// Build an authenticated request for `path`.
    ///
    /// Always sets `Accept`, `Authorization` and `User-Agent`.
    pub fn request(&self, method: RequestMethod, path: &str) -> RequestBuilder {
        RequestBuilder::new(method, self.url(path))
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
            .header("User-Agent", self.http.config().user_agent.as_str())
    }

    /// Build an authenticated GET request.
    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(RequestMethod::Get, path)
    }

    /// Build an authenticated POST request.
    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(RequestMethod::Post, path)
    }

    /// Execute a request and return the raw response.
    pub fn execute(&self, request: RequestBuilder) -> Result<Response> {
        self.http.execute(request)
    }

    // =========================================================================
    // Typed JSON Methods
    // =========================================================================

    /// GET request with JSON response deserialization.
    #[instrument(skip(self))]
    pub fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(self.get(path))?.json()
    }

    /// GET request with guarded query parameters.
    #[instrument(skip(self, params))]
    pub fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        params: QueryParams,
    ) -> Result<T> {
        self.execute(self.get(path).query_params(params))?.json()
    }

    /// POST request with JSON body and response.
    #[instrument(skip(self, body))]
    pub fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.post(path).json(body)?;
        self.execute(request)?.json()
    }
}
