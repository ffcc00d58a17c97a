//! # cr-rest
//!
//! Typed access to the Clash Royale REST API resources.
//!
//! ## Features
//!
//! - **Clans** - Search, details, member list, war log, current war
//! - **Players** - Profile, upcoming chests, battle log, token verification
//! - **Locations** - Location list and clan/player/clan-war rankings
//! - **Tournaments** - Search and details
//! - **Replays** - Replay details
//!
//! Identifier-scoped operations hang off small handle values that capture
//! the normalised tag, e.g. `client.clan("ABC").members(..)`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use royale_cr_rest::{ClanQuery, PagedQuery, RoyaleRestClient};
//!
//! fn main() -> Result<(), royale_cr_rest::Error> {
//!     let client = RoyaleRestClient::new("my-api-token")?;
//!
//!     // Player profile and recent battles
//!     let player = client.player("2PP").get()?;
//!     for battle in client.player("2PP").battle_log()? {
//!         println!("{} {:?}", battle.battle_type, battle.outcome());
//!     }
//!
//!     // Clan search, one page at a time
//!     let query = ClanQuery::new().with_name("legends").with_min_members(20);
//!     let clans = client.search_clans(&query)?;
//!
//!     // Rankings for a location
//!     let top = client
//!         .location("global")
//!         .player_rankings(&PagedQuery::new().with_limit(10))?;
//!
//!     Ok(())
//! }
//! ```

mod battle;
mod clan;
mod client;
mod common;
mod error;
mod location;
mod player;
mod replay;
mod tournament;

// Main client and scoped handles
pub use client::{
    ClanHandle, LocationHandle, PlayerHandle, ReplayHandle, RoyaleRestClient, TournamentHandle,
};

// Record types
pub use battle::{Battle, BattleOutcome, BattlePlayer, GameMode};
pub use clan::{
    Clan, ClanMember, ClanQuery, ClanWar, ClanWarParticipant, ClanWarStanding, WarLogEntry,
    WarLogStanding,
};
pub use common::{Arena, Card, IconUrls, PlayerClan};
pub use location::{ClanRanking, Location, PlayerRanking};
pub use player::{
    Achievement, Badge, FavouriteCard, LeagueStats, Player, Season, UpcomingChest,
    UpcomingChests, VerificationResult,
};
pub use replay::Replay;
pub use tournament::{Tournament, TournamentHeader, TournamentMember, TournamentQuery};

// Error types
pub use error::{Error, ErrorKind, Result};

// Re-export cr-client types that users might need
pub use royale_cr_client::{
    normalize_tag, ClientConfig, ClientConfigBuilder, Cursors, Page, PagedQuery, Paging,
};
