//! Location and ranking records.

use serde::{Deserialize, Serialize};

use crate::common::{Arena, PlayerClan};

/// A country or region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    pub id: u32,
    pub name: String,
    pub is_country: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

/// A clan's position in a location ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClanRanking {
    pub tag: String,
    pub name: String,
    pub rank: u32,
    pub previous_rank: i32,
    pub location: Location,
    pub badge_id: u32,
    pub clan_score: u32,
    pub members: u32,
}

/// A player's position in a location ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerRanking {
    pub tag: String,
    pub name: String,
    pub exp_level: u32,
    pub trophies: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clan: Option<PlayerClan>,
    #[serde(alias = "Rank")]
    pub rank: u32,
    pub previous_rank: i32,
    pub arena: Arena,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_without_country_code() {
        let location: Location =
            serde_json::from_str(r#"{"id":57000000,"name":"Europe","isCountry":false}"#).unwrap();
        assert_eq!(location.id, 57000000);
        assert!(!location.is_country);
        assert_eq!(location.country_code, None);

        let json = serde_json::to_value(&location).unwrap();
        assert!(json.get("countryCode").is_none());
    }

    #[test]
    fn test_player_ranking_accepts_both_rank_spellings() {
        let lower: PlayerRanking = serde_json::from_str(r##"{"tag":"#A","rank":3}"##).unwrap();
        let upper: PlayerRanking = serde_json::from_str(r##"{"tag":"#A","Rank":3}"##).unwrap();
        assert_eq!(lower.rank, 3);
        assert_eq!(upper.rank, 3);
        assert_eq!(lower.clan, None);
    }

    #[test]
    fn test_previous_rank_may_be_negative() {
        // Newly ranked entries report -1.
        let ranking: ClanRanking =
            serde_json::from_str(r##"{"tag":"#C","rank":1,"previousRank":-1}"##).unwrap();
        assert_eq!(ranking.previous_rank, -1);
    }
}
