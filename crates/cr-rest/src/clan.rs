//! Clan records and the clan search query.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use royale_cr_client::{time, PagedQuery, QueryField, QueryParams};

use crate::common::Arena;
use crate::error::Result;
use crate::location::Location;

/// Full clan details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Clan {
    pub tag: String,
    pub name: String,
    /// `open`, `inviteOnly` or `closed`.
    #[serde(rename = "type")]
    pub clan_type: String,
    pub description: String,
    pub badge_id: u32,
    pub clan_score: u32,
    pub location: Location,
    pub required_trophies: u32,
    pub donations_per_week: u32,
    pub clan_chest_status: String,
    pub clan_chest_points: u32,
    pub clan_chest_level: u32,
    pub clan_chest_max_level: u32,
    pub members: u32,
    pub member_list: Vec<ClanMember>,
}

/// A member entry of a clan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClanMember {
    pub tag: String,
    pub name: String,
    pub role: String,
    pub exp_level: u32,
    pub trophies: u32,
    pub arena: Arena,
    pub clan_rank: u32,
    pub previous_clan_rank: u32,
    pub donations: u32,
    pub donations_received: u32,
    pub clan_chest_points: u32,
}

/// A participant's results in a clan war.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClanWarParticipant {
    pub tag: String,
    pub name: String,
    pub cards_earned: u32,
    pub battles_played: u32,
    pub wins: u32,
}

/// A clan's standing in a clan war.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClanWarStanding {
    pub tag: String,
    pub name: String,
    pub badge_id: u32,
    pub clan_score: u32,
    pub participants: u32,
    pub battles_played: u32,
    pub wins: u32,
    pub crowns: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WarLogStanding {
    pub clan: ClanWarStanding,
    pub trophy_change: i32,
}

/// One finished war in a clan's war log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WarLogEntry {
    pub season_id: u32,
    /// Raw API timestamp, see [`WarLogEntry::created_date`].
    #[serde(rename = "createdDate")]
    pub raw_created_date: String,
    pub participants: Vec<ClanWarParticipant>,
    pub standings: Vec<WarLogStanding>,
}

impl WarLogEntry {
    /// When the war ended.
    pub fn created_date(&self) -> Result<DateTime<Utc>> {
        time::parse_timestamp(&self.raw_created_date).map_err(Into::into)
    }
}

/// The clan's current war.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClanWar {
    /// e.g. `notInWar`, `collectionDay`, `warDay`.
    pub state: String,
    /// Raw API timestamp, see [`ClanWar::collection_end_time`].
    #[serde(rename = "collectionEndTime")]
    pub raw_collection_end_time: String,
    pub clan: ClanWarStanding,
    pub participants: Vec<ClanWarParticipant>,
}

impl ClanWar {
    /// When collection day ends.
    pub fn collection_end_time(&self) -> Result<DateTime<Utc>> {
        time::parse_timestamp(&self.raw_collection_end_time).map_err(Into::into)
    }
}

/// Filters for the clan search endpoint.
///
/// Filters outside the API's accepted range are left out of the request
/// rather than sent and rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClanQuery {
    /// Clan name, at least 3 characters.
    pub name: Option<String>,
    /// Location id, at least 1.
    pub location_id: Option<u32>,
    /// Minimum member count, at least 2.
    pub min_members: Option<u32>,
    /// Maximum member count, 1 to 50.
    pub max_members: Option<u32>,
    /// Minimum clan score, at least 1.
    pub min_score: Option<u32>,
    /// Page size and cursors.
    pub paging: PagedQuery,
}

impl ClanQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_location_id(mut self, location_id: u32) -> Self {
        self.location_id = Some(location_id);
        self
    }

    pub fn with_min_members(mut self, min_members: u32) -> Self {
        self.min_members = Some(min_members);
        self
    }

    pub fn with_max_members(mut self, max_members: u32) -> Self {
        self.max_members = Some(max_members);
        self
    }

    pub fn with_min_score(mut self, min_score: u32) -> Self {
        self.min_score = Some(min_score);
        self
    }

    pub fn with_paging(mut self, paging: PagedQuery) -> Self {
        self.paging = paging;
        self
    }

    /// The guarded query parameters for this search.
    pub fn to_params(&self) -> QueryParams {
        let params = QueryParams::new()
            .text(QueryField::Name, self.name.as_deref())
            .number(QueryField::LocationId, self.location_id.map(i64::from))
            .number(QueryField::MinMembers, self.min_members.map(i64::from))
            .number(QueryField::MaxMembers, self.max_members.map(i64::from))
            .number(QueryField::MinScore, self.min_score.map(i64::from));
        self.paging.apply(params)
    }
}
