//! Records shared across resources.

use serde::{Deserialize, Serialize};

/// Arena a player or clan member is in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Arena {
    pub id: u32,
    pub name: String,
}

/// Card artwork URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconUrls {
    pub medium: String,
}

/// A card in a collection, deck or battle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Card {
    pub name: String,
    pub level: u32,
    pub max_level: u32,
    pub count: u32,
    pub icon_urls: IconUrls,
    pub star_level: u32,
}

impl Card {
    /// Zero-indexed level as used by the game client.
    pub fn client_level(&self) -> u32 {
        self.level.saturating_sub(1)
    }
}

/// Short clan reference embedded in player records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerClan {
    pub tag: String,
    pub name: String,
    pub badge_id: u32,
}
