mod common;
pub use self::common::Query;
pub(crate) use self::common::{append_indexed, bool_token, join_steam_ids, vanity_name};

mod econ;
pub use self::econ::{TradeHistoryQuery, TradeOffersQuery};

mod player;
pub use self::player::OwnedGamesQuery;

mod user;
pub use self::user::{Relationship, VanityUrlType};

mod user_stats;
pub use self::user_stats::GlobalStatsQuery;
