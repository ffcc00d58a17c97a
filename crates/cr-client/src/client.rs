//! Blocking HTTP transport for the Clash Royale API.

use tracing::{debug, info, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::RequestBuilder;
use crate::response::Response;

/// HTTP client that sends prepared requests and reads their responses.
///
/// Failures are returned as-is: there is no retry, and timeouts come from
/// the transport configuration only.
#[derive(Debug, Clone)]
pub struct RoyaleHttpClient {
    inner: reqwest::blocking::Client,
    config: ClientConfig,
}

impl RoyaleHttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let inner = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a request and read the full response.
    ///
    /// Only transport failures are errors here; status codes are left to
    /// [`Response::json`].
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    pub fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let url = request.resolved_url()?;
        let mut req = self.inner.request(request.method.to_reqwest(), &url);

        if let Some(ref token) = request.bearer_token {
            req = req.bearer_auth(token);
        }

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            req = req.body(body.as_bytes().to_vec());
        }

        if self.config.enable_tracing {
            debug!(method = %request.method, url = %url, "Sending request");
        }

        let response = req.send().inspect_err(|e| {
            if self.config.enable_tracing {
                warn!(error = %e, "Request error");
            }
        })?;
        let status = response.status().as_u16();

        if self.config.enable_tracing {
            let content_length = response.content_length();
            if status < 400 {
                debug!(status, content_length, "Response received");
            } else {
                info!(status, content_length, "Unexpected status code");
            }
        }

        let body = response.bytes()?;
        Ok(Response::new(status, body.to_vec()))
    }
}
