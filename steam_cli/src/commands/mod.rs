//! CLI subcommand implementations, one module per Steam Web API interface.

pub mod econ;
pub mod game_servers;
pub mod player;
pub mod user;
pub mod user_stats;
