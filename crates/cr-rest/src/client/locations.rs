use tracing::instrument;

use royale_cr_client::{tag::encode_param, Page, PagedQuery};

use crate::error::Result;
use crate::location::{ClanRanking, Location, PlayerRanking};

use super::RoyaleRestClient;

impl RoyaleRestClient {
    /// List all locations.
    #[instrument(skip(self))]
    pub fn locations(&self, paging: &PagedQuery) -> Result<Page<Location>> {
        self.client
            .get_json_with_query("/v1/locations", paging.to_params())
            .map_err(Into::into)
    }
}

/// Operations on a single location.
#[derive(Debug, Clone)]
pub struct LocationHandle<'a> {
    client: &'a RoyaleRestClient,
    id: String,
}

impl<'a> LocationHandle<'a> {
    pub(crate) fn new(client: &'a RoyaleRestClient, id: String) -> Self {
        Self { client, id }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    fn path(&self, suffix: &str) -> String {
        format!("/v1/locations/{}{}", encode_param(&self.id), suffix)
    }

    #[instrument(skip(self), fields(id = %self.id))]
    pub fn get(&self) -> Result<Location> {
        self.client.client.get_json(&self.path("")).map_err(Into::into)
    }

    /// Clan trophy rankings for this location.
    #[instrument(skip(self), fields(id = %self.id))]
    pub fn clan_rankings(&self, paging: &PagedQuery) -> Result<Page<ClanRanking>> {
        self.rankings("clans", paging)
    }

    /// Player trophy rankings for this location.
    #[instrument(skip(self), fields(id = %self.id))]
    pub fn player_rankings(&self, paging: &PagedQuery) -> Result<Page<PlayerRanking>> {
        self.rankings("players", paging)
    }

    /// Clan war rankings for this location.
    #[instrument(skip(self), fields(id = %self.id))]
    pub fn clan_war_rankings(&self, paging: &PagedQuery) -> Result<Page<ClanRanking>> {
        self.rankings("clanwars", paging)
    }

    fn rankings<T: serde::de::DeserializeOwned>(
        &self,
        kind: &str,
        paging: &PagedQuery,
    ) -> Result<Page<T>> {
        let path = self.path(&format!("/rankings/{}", kind));
        self.client
            .client
            .get_json_with_query(&path, paging.to_params())
            .map_err(Into::into)
    }
}
