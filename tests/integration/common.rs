use royale_api::RoyaleRestClient;

/// Well-known clan and player used by the live tests.
pub const CLAN_TAG: &str = "#2CCCP";
pub const PLAYER_TAG: &str = "#2PP";

/// Build a client from the environment.
///
/// Live tests MUST run against the real API. This panics with setup
/// instructions if `ROYALE_API_TOKEN` is missing or empty.
pub fn live_client() -> RoyaleRestClient {
    match std::env::var(royale_api::client::TOKEN_ENV_VAR) {
        Ok(token) if !token.trim().is_empty() => {}
        _ => panic!(
            "\n\n\
            LIVE TEST CONFIGURATION ERROR\n\
            ROYALE_API_TOKEN is not set or empty.\n\n\
            To fix:\n  \
              1. Create a key for your IP at https://developer.clashroyale.com\n  \
              2. Export: export ROYALE_API_TOKEN='...'\n\n"
        ),
    }

    RoyaleRestClient::from_env().expect("client should build from environment")
}
