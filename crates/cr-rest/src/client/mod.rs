//! Clash Royale REST API client.
//!
//! This client wraps `RoyaleClient` from `cr-client` and provides typed
//! methods for every resource family. Operations on a single clan, player,
//! location, tournament or replay live on scoped handles returned by
//! [`RoyaleRestClient::clan`] and friends.

use royale_cr_client::{ClientConfig, RoyaleClient};

use crate::error::Result;

mod clans;
mod locations;
mod players;
mod replays;
mod tournaments;

pub use clans::ClanHandle;
pub use locations::LocationHandle;
pub use players::PlayerHandle;
pub use replays::ReplayHandle;
pub use tournaments::TournamentHandle;

/// Clash Royale REST API client.
///
/// Provides typed methods for all resources:
/// - Clan search and clan details
/// - Player profiles, chests, battle logs and token verification
/// - Locations and rankings
/// - Tournament search and details
/// - Replays
///
/// # Example
///
/// ```rust,ignore
/// use royale_cr_rest::RoyaleRestClient;
///
/// let client = RoyaleRestClient::new("my-api-token")?;
///
/// let clan = client.clan("#2CCCP").get()?;
/// let members = client.clan("#2CCCP").members(&Default::default())?;
/// let chests = client.player("#2PP").upcoming_chests()?;
/// ```
#[derive(Debug, Clone)]
pub struct RoyaleRestClient {
    client: RoyaleClient,
}

impl RoyaleRestClient {
    /// Create a new REST client against the default base URL.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let client = RoyaleClient::new(token)?;
        Ok(Self { client })
    }

    /// Create a new REST client with custom HTTP configuration.
    pub fn with_config(token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let client = RoyaleClient::with_config(token, config)?;
        Ok(Self { client })
    }

    /// Create a REST client from `ROYALE_API_TOKEN` and `ROYALE_API_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let client = RoyaleClient::from_env()?;
        Ok(Self { client })
    }

    /// Create a REST client from an existing RoyaleClient.
    pub fn from_client(client: RoyaleClient) -> Self {
        Self { client }
    }

    /// Get the underlying RoyaleClient.
    pub fn inner(&self) -> &RoyaleClient {
        &self.client
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Operations on one clan.
    pub fn clan(&self, tag: &str) -> ClanHandle<'_> {
        ClanHandle::new(self, tag)
    }

    /// Operations on one player.
    pub fn player(&self, tag: &str) -> PlayerHandle<'_> {
        PlayerHandle::new(self, tag)
    }

    /// Operations on one location. `id` is numeric or `global`.
    pub fn location(&self, id: impl ToString) -> LocationHandle<'_> {
        LocationHandle::new(self, id.to_string())
    }

    /// Operations on one tournament.
    pub fn tournament(&self, tag: &str) -> TournamentHandle<'_> {
        TournamentHandle::new(self, tag)
    }

    /// Operations on one replay.
    pub fn replay(&self, tag: &str) -> ReplayHandle<'_> {
        ReplayHandle::new(self, tag)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use royale_cr_client::ClientConfig;

    use super::RoyaleRestClient;

    /// Client pointed at a mock server.
    pub(crate) fn client_for(uri: &str) -> RoyaleRestClient {
        RoyaleRestClient::with_config(
            "test-token",
            ClientConfig::builder()
                .with_base_url(uri)
                .with_tracing(false)
                .build(),
        )
        .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_bind_normalised_identifiers() {
        let client = RoyaleRestClient::new("token").unwrap();

        assert_eq!(client.clan("ABC").tag(), "#ABC");
        assert_eq!(client.player("#2PP").tag(), "#2PP");
        assert_eq!(client.tournament("T1").tag(), "#T1");
        assert_eq!(client.replay("R1").tag(), "#R1");
        assert_eq!(client.location(57000249).id(), "57000249");
        assert_eq!(client.location("global").id(), "global");
    }

    #[test]
    fn test_from_client() {
        let inner = RoyaleClient::with_config(
            "token",
            ClientConfig::builder()
                .with_base_url("https://proxy.example.com/")
                .build(),
        )
        .unwrap();

        let client = RoyaleRestClient::from_client(inner);
        assert_eq!(client.base_url(), "https://proxy.example.com");
        assert_eq!(client.inner().token(), "token");
    }
}
