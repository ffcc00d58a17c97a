//! # royale-api
//!
//! A typed Clash Royale API client library for Rust.
//!
//! This library provides blocking, type-safe access to the public game
//! statistics API: clans, players, locations, tournaments, replays and
//! battle logs.
//!
//! ## Security
//!
//! - The bearer token is redacted in Debug output
//! - Tracing spans skip the client and never record the token
//!
//! ## Crates
//!
//! - **royale-cr-client** - Core HTTP client: auth headers, error decoding, query guards, paging, timestamps
//! - **royale-cr-rest** - Resources: clans, players, locations, tournaments, replays
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use royale_api::{PagedQuery, RoyaleRestClient};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads ROYALE_API_TOKEN, and ROYALE_API_BASE_URL if set
//!     let client = RoyaleRestClient::from_env()?;
//!
//!     let clan = client.clan("#2CCCP").get()?;
//!     println!("{} ({} members)", clan.name, clan.members);
//!
//!     let top = client
//!         .location("global")
//!         .player_rankings(&PagedQuery::new().with_limit(10))?;
//!     for player in top {
//!         println!("{:>3} {}", player.rank, player.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "client")]
pub use royale_cr_client as client;
#[cfg(feature = "rest")]
pub use royale_cr_rest as rest;

// Re-export commonly used types at the top level
#[cfg(feature = "client")]
pub use royale_cr_client::{normalize_tag, ClientConfig, Page, PagedQuery, RoyaleClient};
#[cfg(feature = "rest")]
pub use royale_cr_rest::{ClanQuery, RoyaleRestClient, TournamentQuery};
