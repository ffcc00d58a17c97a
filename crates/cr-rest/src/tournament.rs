//! Tournament records and the tournament search query.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use royale_cr_client::{time, PagedQuery, QueryField, QueryParams};

use crate::battle::GameMode;
use crate::common::PlayerClan;
use crate::error::{Error, ErrorKind, Result};

/// A ranked participant of a tournament.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TournamentMember {
    pub tag: String,
    pub name: String,
    pub score: u32,
    pub rank: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clan: Option<PlayerClan>,
}

/// Summary returned by tournament search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TournamentHeader {
    pub tag: String,
    /// `open` or `passwordProtected`.
    #[serde(rename = "type")]
    pub tournament_type: String,
    pub status: String,
    pub creator_tag: String,
    pub name: String,
    pub description: String,
    pub capacity: u32,
    pub max_capacity: u32,
    pub preparation_duration: u32,
    pub duration: u32,
    #[serde(rename = "createdTime")]
    pub raw_created_time: String,
    pub first_place_card_prize: u32,
}

/// Full tournament details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tournament {
    pub tag: String,
    #[serde(rename = "type")]
    pub tournament_type: String,
    /// `inPreparation`, `inProgress` or `ended`.
    pub status: String,
    pub creator_tag: String,
    pub name: String,
    pub description: String,
    pub capacity: u32,
    pub max_capacity: u32,
    /// Seconds.
    pub preparation_duration: u32,
    /// Seconds.
    pub duration: u32,
    #[serde(rename = "createdTime")]
    pub raw_created_time: String,
    #[serde(rename = "startedTime", skip_serializing_if = "Option::is_none")]
    pub raw_started_time: Option<String>,
    #[serde(rename = "endedTime", skip_serializing_if = "Option::is_none")]
    pub raw_ended_time: Option<String>,
    pub first_place_card_prize: u32,
    pub game_mode: GameMode,
    pub members_list: Vec<TournamentMember>,
}

impl Tournament {
    pub fn created_time(&self) -> Result<DateTime<Utc>> {
        time::parse_timestamp(&self.raw_created_time).map_err(Into::into)
    }

    /// Start time, `None` while still in preparation.
    pub fn started_time(&self) -> Result<Option<DateTime<Utc>>> {
        parse_optional(self.raw_started_time.as_deref())
    }

    /// End time, `None` until the tournament has ended.
    pub fn ended_time(&self) -> Result<Option<DateTime<Utc>>> {
        parse_optional(self.raw_ended_time.as_deref())
    }
}

fn parse_optional(raw: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    raw.map(time::parse_timestamp)
        .transpose()
        .map_err(Into::into)
}

/// Tournament search by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TournamentQuery {
    pub name: String,
    pub paging: PagedQuery,
}

impl TournamentQuery {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            paging: PagedQuery::default(),
        }
    }

    pub fn with_paging(mut self, paging: PagedQuery) -> Self {
        self.paging = paging;
        self
    }

    /// Build the query parameters.
    ///
    /// The name is mandatory for this endpoint, so a name the API would
    /// reject is reported as [`ErrorKind::InvalidInput`] instead of dropped.
    pub fn to_params(&self) -> Result<QueryParams> {
        if !QueryField::Name.guard().admits_text(&self.name) {
            return Err(Error::new(ErrorKind::InvalidInput(format!(
                "tournament name must be at least 3 characters, got {:?}",
                self.name
            ))));
        }

        let params = QueryParams::new().text(QueryField::Name, Some(&self.name));
        Ok(self.paging.apply(params))
    }
}
