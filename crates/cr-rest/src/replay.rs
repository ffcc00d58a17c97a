//! Replay records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use royale_cr_client::time;

use crate::error::Result;

/// A shared battle replay.
///
/// The replay payload has no stable schema and is kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Replay {
    pub tag: String,
    #[serde(rename = "battleTime")]
    pub raw_battle_time: String,
    pub replay_data: serde_json::Value,
    pub share_count: u32,
    pub view_count: u32,
}

impl Replay {
    pub fn battle_time(&self) -> Result<DateTime<Utc>> {
        time::parse_timestamp(&self.raw_battle_time).map_err(Into::into)
    }
}
