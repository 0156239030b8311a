//! Entry point aggregating every service facade under one API key.

use crate::{
    services::{EconService, GameServersService, PlayerService, SteamUser, SteamUserStats},
    Client,
};

/// The main handler for Steam Web API requests.
///
/// Constructed once with an API key; every facade it hands out borrows the
/// same client and key.
///
/// ```no_run
/// # async fn run() -> Result<(), steam_api::Error> {
/// let steam = steam_api::SteamApiHandler::new("ABC123");
/// let body = steam.user_stats().get_number_of_current_players(1172620).await?;
/// println!("{}", body);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SteamApiHandler {
    client: Client,
    api_key: String,
}

impl SteamApiHandler {
    pub fn new(api_key: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
        }
    }

    /// Creates a handler against a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Self {
        Self {
            client: Client::with_base_url(base_url),
            api_key: api_key.to_string(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn econ(&self) -> EconService<'_> {
        EconService::new(&self.client, &self.api_key)
    }

    pub fn game_servers(&self) -> GameServersService<'_> {
        GameServersService::new(&self.client, &self.api_key)
    }

    pub fn player(&self) -> PlayerService<'_> {
        PlayerService::new(&self.client, &self.api_key)
    }

    pub fn user(&self) -> SteamUser<'_> {
        SteamUser::new(&self.client, &self.api_key)
    }

    pub fn user_stats(&self) -> SteamUserStats<'_> {
        SteamUserStats::new(&self.client, &self.api_key)
    }
}
