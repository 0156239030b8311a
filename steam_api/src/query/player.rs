use url::Url;

use crate::{AppID, SteamID};

use super::{append_indexed, bool_token, Query};

/// Parameters for `IPlayerService/GetOwnedGames`.
#[derive(Clone, Debug)]
pub struct OwnedGamesQuery {
    pub steamid: SteamID,
    /// Include the game name and icon for each app.
    pub include_appinfo: bool,
    /// Free games are excluded unless this is set and the user has played them.
    pub include_played_free_games: bool,
    /// Restricts the result to these apps; sent as `appids_filter[i]`.
    pub appids_filter: Vec<AppID>,
}

impl Query for OwnedGamesQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("steamid", &self.steamid.to_string())
            .append_pair("include_appinfo", bool_token(self.include_appinfo))
            .append_pair(
                "include_played_free_games",
                bool_token(self.include_played_free_games),
            );
        append_indexed(&mut url, "appids_filter", &self.appids_filter);
        url
    }
}

impl OwnedGamesQuery {
    pub fn new(steamid: SteamID) -> Self {
        Self {
            steamid,
            include_appinfo: false,
            include_played_free_games: false,
            appids_filter: Vec::new(),
        }
    }

    pub fn with_appinfo(mut self, include_appinfo: bool) -> Self {
        self.include_appinfo = include_appinfo;
        self
    }

    pub fn with_played_free_games(mut self, include_played_free_games: bool) -> Self {
        self.include_played_free_games = include_played_free_games;
        self
    }

    pub fn with_appid_filter(mut self, appid: AppID) -> Self {
        self.appids_filter.push(appid);
        self
    }
    pub fn with_appids_filter(mut self, appids: &[AppID]) -> Self {
        self.appids_filter.extend_from_slice(appids);
        self
    }
}
