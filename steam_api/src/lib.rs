mod client;
mod errors;
mod handler;
mod query;
mod types;
pub mod services;
pub use self::client::{Client, STEAM_API_BASE_URL};
pub use self::types::{AppID, SteamID};
pub use self::errors::Error;
pub use self::handler::SteamApiHandler;
pub use self::query::{
    GlobalStatsQuery, OwnedGamesQuery, Query, Relationship, TradeHistoryQuery, TradeOffersQuery,
    VanityUrlType,
};
