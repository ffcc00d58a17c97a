//! Player profile records.

use serde::{Deserialize, Serialize};

use crate::common::{Arena, Card, IconUrls, PlayerClan};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FavouriteCard {
    pub name: String,
    pub id: u32,
    pub max_level: u32,
    pub icon_urls: IconUrls,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Achievement {
    pub name: String,
    pub stars: u32,
    pub value: u32,
    pub target: u32,
    pub info: String,
}

/// Badge progress. Level fields are absent for one-off badges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Badge {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Season {
    pub rank: u32,
    pub trophies: u32,
    pub best_trophies: u32,
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeagueStats {
    pub best_season: Season,
    pub previous_season: Season,
    pub current_season: Season,
}

/// Full player profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Player {
    pub tag: String,
    pub name: String,
    pub exp_level: u32,
    pub trophies: u32,
    pub best_trophies: u32,
    pub wins: u32,
    pub losses: u32,
    pub battle_count: u32,
    pub three_crown_wins: u32,
    pub challenge_cards_won: u32,
    pub challenge_max_wins: u32,
    pub tournament_cards_won: u32,
    pub tournament_battle_count: u32,
    pub role: String,
    pub donations: u32,
    pub donations_received: u32,
    pub total_donations: u32,
    pub war_day_wins: u32,
    pub clan_cards_collected: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clan: Option<PlayerClan>,
    pub arena: Arena,
    pub achievements: Vec<Achievement>,
    pub badges: Vec<Badge>,
    pub cards: Vec<Card>,
    pub current_deck: Vec<Card>,
    pub current_favourite_card: FavouriteCard,
    pub league_statistics: LeagueStats,
    pub star_points: u32,
}

impl Player {
    /// Share of recorded wins among wins and losses, or `None` with no games.
    pub fn win_rate(&self) -> Option<f64> {
        let games = u64::from(self.wins) + u64::from(self.losses);
        if games == 0 {
            None
        } else {
            Some(f64::from(self.wins) / games as f64)
        }
    }
}

/// Result of checking a player's in-game API token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VerificationResult {
    pub tag: String,
    pub token: String,
    pub status: String,
}

impl VerificationResult {
    /// Whether the token belongs to the player.
    pub fn is_valid(&self) -> bool {
        self.status == "ok"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpcomingChest {
    /// Position in the chest cycle, 0 being the next chest.
    pub index: u32,
    pub name: String,
}

/// Chests the player will receive next.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpcomingChests {
    pub items: Vec<UpcomingChest>,
}

impl UpcomingChests {
    /// The next chest of the given name, if it is in the visible cycle.
    pub fn find(&self, name: &str) -> Option<&UpcomingChest> {
        self.items.iter().find(|chest| chest.name == name)
    }
}
