use crate::{
    query::{GlobalStatsQuery, Query},
    AppID, Client, Error, SteamID,
};

const INTERFACE: &str = "ISteamUserStats";

/// `ISteamUserStats`: achievements and stats, global and per user.
///
/// The global achievement percentages and current player count are public
/// and never carry the API key.
#[derive(Clone, Copy)]
pub struct SteamUserStats<'a> {
    client: &'a Client,
    api_key: &'a str,
}

impl<'a> SteamUserStats<'a> {
    pub(crate) fn new(client: &'a Client, api_key: &'a str) -> Self {
        Self { client, api_key }
    }

    pub async fn get_global_achievement_percentages_for_app(
        &self,
        gameid: AppID,
    ) -> Result<String, Error> {
        let mut url = self.client.build_url(
            INTERFACE,
            "GetGlobalAchievementPercentagesForApp",
            "v2",
            None,
        )?;
        url.query_pairs_mut()
            .append_pair("gameid", &gameid.to_string());
        self.client.get_text(url).await
    }

    pub async fn get_global_stats_for_game(&self, query: &GlobalStatsQuery) -> Result<String, Error> {
        let url = self
            .client
            .build_url(INTERFACE, "GetGlobalStatsForGame", "v1", Some(self.api_key))?;
        self.client.get_text(query.add_to_url(&url)).await
    }

    pub async fn get_number_of_current_players(&self, appid: AppID) -> Result<String, Error> {
        let mut url = self
            .client
            .build_url(INTERFACE, "GetNumberOfCurrentPlayers", "v1", None)?;
        url.query_pairs_mut()
            .append_pair("appid", &appid.to_string());
        self.client.get_text(url).await
    }

    /// A player's achievements for one app, localized when `language` is given.
    pub async fn get_player_achievements(
        &self,
        steamid: SteamID,
        appid: AppID,
        language: Option<&str>,
    ) -> Result<String, Error> {
        let mut url =
            self.client
                .build_url(INTERFACE, "GetPlayerAchievements", "v1", Some(self.api_key))?;
        url.query_pairs_mut()
            .append_pair("steamid", &steamid.to_string())
            .append_pair("appid", &appid.to_string());
        if let Some(language) = language {
            url.query_pairs_mut().append_pair("l", language);
        }
        self.client.get_text(url).await
    }

    /// Full list of stats and achievements defined for an app.
    pub async fn get_schema_for_game(
        &self,
        appid: AppID,
        language: Option<&str>,
    ) -> Result<String, Error> {
        let mut url = self
            .client
            .build_url(INTERFACE, "GetSchemaForGame", "v2", Some(self.api_key))?;
        url.query_pairs_mut()
            .append_pair("appid", &appid.to_string());
        if let Some(language) = language {
            url.query_pairs_mut().append_pair("l", language);
        }
        self.client.get_text(url).await
    }

    pub async fn get_user_stats_for_game(
        &self,
        steamid: SteamID,
        appid: AppID,
    ) -> Result<String, Error> {
        let mut url = self
            .client
            .build_url(INTERFACE, "GetUserStatsForGame", "v2", Some(self.api_key))?;
        url.query_pairs_mut()
            .append_pair("steamid", &steamid.to_string())
            .append_pair("appid", &appid.to_string());
        self.client.get_text(url).await
    }
}
