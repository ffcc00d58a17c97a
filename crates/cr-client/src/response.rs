//! HTTP response handling and status-code based decoding.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind, Result};

/// The error body the API sends with every 4xx/5xx status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorBody {
    pub reason: String,
    pub message: String,
}

/// A fully read HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    body: Vec<u8>,
}

impl Response {
    /// Create a response from a status code and the raw body.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns true if the status is below 400.
    pub fn is_success(&self) -> bool {
        self.status < 400
    }

    /// The raw body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body according to the status code.
    ///
    /// See [`decode_response`].
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        decode_response(self.status, &self.body)
    }
}

/// Decode a response body according to its status code.
///
/// - status >= 400: the body is decoded as [`ErrorBody`] and returned as
///   [`ErrorKind::Api`]. If the error body itself does not decode, that
///   decode failure is returned instead.
/// - otherwise: the body is decoded into `T`.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T> {
    if status >= 400 {
        let error: ErrorBody = serde_json::from_slice(body)?;
        return Err(Error::new(ErrorKind::Api {
            status,
            reason: error.reason,
            message: error.message,
        }));
    }

    serde_json::from_slice(body).map_err(Into::into)
}
