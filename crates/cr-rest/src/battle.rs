//! Battle log records and outcome helpers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use royale_cr_client::{normalize_tag, time};

use crate::common::{Arena, Card, PlayerClan};
use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameMode {
    pub id: u32,
    pub name: String,
}

/// One side's player in a battle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BattlePlayer {
    pub tag: String,
    pub name: String,
    pub starting_trophies: u32,
    pub trophy_change: i32,
    pub crowns: u32,
    /// Absent when the king tower was destroyed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub king_tower_hit_points: Option<u32>,
    /// Absent when both princess towers were destroyed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub princess_towers_hit_points: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clan: Option<PlayerClan>,
    pub cards: Vec<Card>,
}

/// A battle from a player's battle log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Battle {
    #[serde(rename = "type")]
    pub battle_type: String,
    /// Raw API timestamp, see [`Battle::battle_time`].
    #[serde(rename = "battleTime")]
    pub raw_battle_time: String,
    pub arena: Arena,
    pub game_mode: GameMode,
    pub deck_selection: String,
    pub team: Vec<BattlePlayer>,
    pub opponent: Vec<BattlePlayer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tournament_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenge_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenge_win_count_before: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replay_tag: Option<String>,
}

/// Which side won a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    Draw,
    TeamWin,
    OpponentWin,
}

impl Battle {
    /// Decide the winner by comparing the crowns of the first player on each
    /// side. An empty side counts as zero crowns.
    pub fn outcome(&self) -> BattleOutcome {
        let team = self.team.first().map_or(0, |p| p.crowns);
        let opponent = self.opponent.first().map_or(0, |p| p.crowns);

        match team.cmp(&opponent) {
            std::cmp::Ordering::Greater => BattleOutcome::TeamWin,
            std::cmp::Ordering::Less => BattleOutcome::OpponentWin,
            std::cmp::Ordering::Equal => BattleOutcome::Draw,
        }
    }

    /// The winning side, or `None` for a draw.
    pub fn winners(&self) -> Option<&[BattlePlayer]> {
        match self.outcome() {
            BattleOutcome::TeamWin => Some(&self.team),
            BattleOutcome::OpponentWin => Some(&self.opponent),
            BattleOutcome::Draw => None,
        }
    }

    /// The losing side, or `None` for a draw.
    pub fn losers(&self) -> Option<&[BattlePlayer]> {
        match self.outcome() {
            BattleOutcome::TeamWin => Some(&self.opponent),
            BattleOutcome::OpponentWin => Some(&self.team),
            BattleOutcome::Draw => None,
        }
    }

    /// Find a participant on either side. The tag is normalised first.
    pub fn player_by_tag(&self, tag: &str) -> Option<&BattlePlayer> {
        let tag = normalize_tag(tag);
        self.team
            .iter()
            .chain(self.opponent.iter())
            .find(|player| player.tag == tag)
    }

    pub fn battle_time(&self) -> Result<DateTime<Utc>> {
        time::parse_timestamp(&self.raw_battle_time).map_err(Into::into)
    }
}
