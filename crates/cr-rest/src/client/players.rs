use serde::Serialize;
use tracing::instrument;

use royale_cr_client::{normalize_tag, tag::encode_tag};

use crate::battle::Battle;
use crate::error::Result;
use crate::player::{Player, UpcomingChests, VerificationResult};

use super::RoyaleRestClient;

#[derive(Serialize)]
struct VerifyTokenRequest<'a> {
    token: &'a str,
}

/// Operations on a single player, bound to its normalised tag.
#[derive(Debug, Clone)]
pub struct PlayerHandle<'a> {
    client: &'a RoyaleRestClient,
    tag: String,
}

impl<'a> PlayerHandle<'a> {
    pub(crate) fn new(client: &'a RoyaleRestClient, tag: &str) -> Self {
        Self {
            client,
            tag: normalize_tag(tag),
        }
    }

    /// The player tag, with its leading `#`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    fn path(&self, suffix: &str) -> String {
        format!("/v1/players/{}{}", encode_tag(&self.tag), suffix)
    }

    /// Get the player's profile.
    #[instrument(skip(self), fields(tag = %self.tag))]
    pub fn get(&self) -> Result<Player> {
        self.client.client.get_json(&self.path("")).map_err(Into::into)
    }

    /// Get the chests the player will receive next.
    #[instrument(skip(self), fields(tag = %self.tag))]
    pub fn upcoming_chests(&self) -> Result<UpcomingChests> {
        self.client
            .client
            .get_json(&self.path("/upcomingchests"))
            .map_err(Into::into)
    }

    /// Get the player's recent battles, most recent first.
    #[instrument(skip(self), fields(tag = %self.tag))]
    pub fn battle_log(&self) -> Result<Vec<Battle>> {
        self.client
            .client
            .get_json(&self.path("/battlelog"))
            .map_err(Into::into)
    }

    /// Check an API token the player copied from the game settings.
    #[instrument(skip(self, token), fields(tag = %self.tag))]
    pub fn verify_token(&self, token: &str) -> Result<VerificationResult> {
        self.client
            .client
            .post_json(&self.path("/verifytoken"), &VerifyTokenRequest { token })
            .map_err(Into::into)
    }
}
