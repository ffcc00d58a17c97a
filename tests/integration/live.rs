//! Read-only calls against the live API.

use super::common::{live_client, CLAN_TAG, PLAYER_TAG};
use royale_api::{ClanQuery, PagedQuery, TournamentQuery};

#[test]
#[ignore]
fn test_live_clan_details_and_members() {
    let client = live_client();
    let clan = client.clan(CLAN_TAG).get().expect("clan should exist");
    assert_eq!(clan.tag, CLAN_TAG);

    let members = client
        .clan(CLAN_TAG)
        .members(&PagedQuery::new().with_limit(5))
        .expect("members should list");
    assert!(members.len() <= 5);
}

#[test]
#[ignore]
fn test_live_clan_search() {
    let client = live_client();
    let page = client
        .search_clans(&ClanQuery::new().with_name("royale").with_paging(PagedQuery::new().with_limit(3)))
        .expect("search should succeed");
    assert!(page.len() <= 3);
}

#[test]
#[ignore]
fn test_live_player_battle_log_times_parse() {
    let client = live_client();
    let player = client.player(PLAYER_TAG);
    player.get().expect("player should exist");

    for battle in player.battle_log().expect("battle log should load") {
        battle.battle_time().expect("battle time should parse");
    }
}

#[test]
#[ignore]
fn test_live_unknown_clan_is_not_found() {
    let client = live_client();
    let err = client.clan("#QQQQQQQQQQ").get().unwrap_err();
    assert!(err.is_not_found(), "unexpected error: {err}");
}

#[test]
#[ignore]
fn test_live_locations_and_rankings() {
    let client = live_client();
    let locations = client.locations(&PagedQuery::new()).expect("locations should list");
    assert!(!locations.is_empty());

    let rankings = client
        .location("global")
        .clan_rankings(&PagedQuery::new().with_limit(3))
        .expect("global rankings should load");
    assert!(rankings.len() <= 3);
}

#[test]
#[ignore]
fn test_live_tournament_search() {
    let client = live_client();
    client
        .search_tournaments(&TournamentQuery::new("cup"))
        .expect("tournament search should succeed");
}
