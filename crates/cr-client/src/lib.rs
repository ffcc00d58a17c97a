//! # cr-client
//!
//! Core HTTP client infrastructure for the Clash Royale API.
//!
//! This crate provides the request/response pipeline every resource uses:
//! - Bearer authentication and content negotiation headers
//! - Status-code based error branching with the API's `{reason, message}` body
//! - Typed JSON decoding of success payloads
//! - Tag normalisation and percent-encoding for path segments
//! - A guarded query-string builder shared by all resource callers
//! - Cursor paging and timestamp types
//!
//! There is no retry, caching or rate limiting. Every failure is reported to
//! the immediate caller.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Resource Layer                           │
//! │  (cr-rest: clans, players, locations, tournaments, replays) │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      RoyaleClient                           │
//! │  - Holds base URL, bearer token + HTTP client               │
//! │  - Provides typed JSON methods (get_json, post_json)        │
//! │  - Injects Accept / Authorization / User-Agent              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    RoyaleHttpClient                         │
//! │  - Blocking transport                                       │
//! │  - Error body decoding                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use royale_cr_client::RoyaleClient;
//!
//! fn main() -> Result<(), royale_cr_client::Error> {
//!     let client = RoyaleClient::new("my-api-token")?;
//!
//!     let clan: serde_json::Value = client.get_json("/v1/clans/%23ABC123")?;
//!     println!("{}", clan["name"]);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod paging;
mod query;
mod request;
mod response;
mod royale_client;
pub mod tag;
pub mod time;

pub use client::RoyaleHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use paging::{Cursors, Page, PagedQuery, Paging};
pub use query::{QueryField, QueryGuard, QueryParams};
pub use request::{RequestBody, RequestBuilder, RequestMethod};
pub use response::{decode_response, ErrorBody, Response};
pub use royale_client::RoyaleClient;
pub use tag::normalize_tag;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.clashroyale.com";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("royale-api/", env!("CARGO_PKG_VERSION"));

/// Environment variable holding the bearer token for [`RoyaleClient::from_env`].
pub const TOKEN_ENV_VAR: &str = "ROYALE_API_TOKEN";

/// Environment variable overriding the base URL for [`RoyaleClient::from_env`].
pub const BASE_URL_ENV_VAR: &str = "ROYALE_API_BASE_URL";
