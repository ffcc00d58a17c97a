//! Error types for cr-rest.

use royale_cr_client::ErrorKind as ClientErrorKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    pub kind: ErrorKind,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// HTTP status code of an API error.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the API reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Machine-readable reason of an API error.
    pub fn reason(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Api { reason, .. } => Some(reason),
            _ => None,
        }
    }

    /// Human-readable message of an API error.
    pub fn api_message(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("API error [{status}] {reason}: {message}")]
    Api {
        status: u16,
        reason: String,
        message: String,
    },

    #[error("Client error: {0}")]
    Client(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid timestamp: {0}")]
    Timestamp(String),
}

impl From<royale_cr_client::Error> for Error {
    fn from(err: royale_cr_client::Error) -> Self {
        let kind = match &err.kind {
            ClientErrorKind::Api {
                status,
                reason,
                message,
            } => ErrorKind::Api {
                status: *status,
                reason: reason.clone(),
                message: message.clone(),
            },
            ClientErrorKind::Timestamp(detail) => ErrorKind::Timestamp(detail.clone()),
            _ => ErrorKind::Client(err.to_string()),
        };

        Error {
            kind,
            source: Some(Box::new(err)),
        }
    }
}
