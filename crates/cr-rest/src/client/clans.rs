use tracing::instrument;

use royale_cr_client::{normalize_tag, tag::encode_tag, Page, PagedQuery};

use crate::clan::{Clan, ClanMember, ClanQuery, ClanWar, WarLogEntry};
use crate::error::Result;

use super::RoyaleRestClient;

impl RoyaleRestClient {
    /// Search clans by name, location, member count and score.
    ///
    /// Filters the API would reject are left out of the request.
    #[instrument(skip(self))]
    pub fn search_clans(&self, query: &ClanQuery) -> Result<Page<Clan>> {
        self.client
            .get_json_with_query("/v1/clans", query.to_params())
            .map_err(Into::into)
    }
}

/// Operations on a single clan, bound to its normalised tag.
#[derive(Debug, Clone)]
pub struct ClanHandle<'a> {
    client: &'a RoyaleRestClient,
    tag: String,
}

impl<'a> ClanHandle<'a> {
    pub(crate) fn new(client: &'a RoyaleRestClient, tag: &str) -> Self {
        Self {
            client,
            tag: normalize_tag(tag),
        }
    }

    /// The clan tag, with its leading `#`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    fn path(&self, suffix: &str) -> String {
        format!("/v1/clans/{}{}", encode_tag(&self.tag), suffix)
    }

    /// Get clan details including the member list.
    #[instrument(skip(self), fields(tag = %self.tag))]
    pub fn get(&self) -> Result<Clan> {
        self.client.client.get_json(&self.path("")).map_err(Into::into)
    }

    /// List clan members.
    #[instrument(skip(self), fields(tag = %self.tag))]
    pub fn members(&self, paging: &PagedQuery) -> Result<Page<ClanMember>> {
        self.client
            .client
            .get_json_with_query(&self.path("/members"), paging.to_params())
            .map_err(Into::into)
    }

    /// List the clan's past wars, most recent first.
    #[instrument(skip(self), fields(tag = %self.tag))]
    pub fn war_log(&self, paging: &PagedQuery) -> Result<Page<WarLogEntry>> {
        self.client
            .client
            .get_json_with_query(&self.path("/warlog"), paging.to_params())
            .map_err(Into::into)
    }

    /// Get the war the clan is currently in.
    #[instrument(skip(self), fields(tag = %self.tag))]
    pub fn current_war(&self) -> Result<ClanWar> {
        self.client
            .client
            .get_json(&self.path("/currentwar"))
            .map_err(Into::into)
    }
}
