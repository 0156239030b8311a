//! One facade per Steam Web API interface.
//!
//! Facades borrow the handler's [`Client`](crate::Client) and API key, turn
//! typed arguments into query parameters and hand the URL to
//! [`Client::get_text`](crate::Client::get_text). They add no error
//! translation and no retry.

mod econ;
pub use self::econ::EconService;

mod game_servers;
pub use self::game_servers::GameServersService;

mod player;
pub use self::player::PlayerService;

mod user;
pub use self::user::SteamUser;

mod user_stats;
pub use self::user_stats::SteamUserStats;
