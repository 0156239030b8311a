use crate::{
    query::{OwnedGamesQuery, Query},
    AppID, Client, Error, SteamID,
};

const INTERFACE: &str = "IPlayerService";

/// `IPlayerService`: games, playtime, levels and badges of a player.
#[derive(Clone, Copy)]
pub struct PlayerService<'a> {
    client: &'a Client,
    api_key: &'a str,
}

impl<'a> PlayerService<'a> {
    pub(crate) fn new(client: &'a Client, api_key: &'a str) -> Self {
        Self { client, api_key }
    }

    /// Games played recently; a `count` of 0 returns all of them.
    pub async fn get_recently_played_games(
        &self,
        steamid: SteamID,
        count: u32,
    ) -> Result<String, Error> {
        let mut url =
            self.client
                .build_url(INTERFACE, "GetRecentlyPlayedGames", "v1", Some(self.api_key))?;
        url.query_pairs_mut()
            .append_pair("steamid", &steamid.to_string())
            .append_pair("count", &count.to_string());
        self.client.get_text(url).await
    }

    /// Playtime for one app. The key must be associated with `appid`.
    pub async fn get_single_game_playtime(
        &self,
        steamid: SteamID,
        appid: AppID,
    ) -> Result<String, Error> {
        let mut url =
            self.client
                .build_url(INTERFACE, "GetSingleGamePlaytime", "v1", Some(self.api_key))?;
        url.query_pairs_mut()
            .append_pair("steamid", &steamid.to_string())
            .append_pair("appid", &appid.to_string());
        self.client.get_text(url).await
    }

    /// Games owned by the player, if their game details are visible to the key holder.
    pub async fn get_owned_games(&self, query: &OwnedGamesQuery) -> Result<String, Error> {
        let url = self
            .client
            .build_url(INTERFACE, "GetOwnedGames", "v1", Some(self.api_key))?;
        self.client.get_text(query.add_to_url(&url)).await
    }

    pub async fn get_steam_level(&self, steamid: SteamID) -> Result<String, Error> {
        let mut url = self
            .client
            .build_url(INTERFACE, "GetSteamLevel", "v1", Some(self.api_key))?;
        url.query_pairs_mut()
            .append_pair("steamid", &steamid.to_string());
        self.client.get_text(url).await
    }

    pub async fn get_badges(&self, steamid: SteamID) -> Result<String, Error> {
        let mut url = self
            .client
            .build_url(INTERFACE, "GetBadges", "v1", Some(self.api_key))?;
        url.query_pairs_mut()
            .append_pair("steamid", &steamid.to_string());
        self.client.get_text(url).await
    }

    /// Quests required for `badgeid` and which of them are completed.
    pub async fn get_community_badge_progress(
        &self,
        steamid: SteamID,
        badgeid: u32,
    ) -> Result<String, Error> {
        let mut url = self.client.build_url(
            INTERFACE,
            "GetCommunityBadgeProgress",
            "v1",
            Some(self.api_key),
        )?;
        url.query_pairs_mut()
            .append_pair("steamid", &steamid.to_string())
            .append_pair("badgeid", &badgeid.to_string());
        self.client.get_text(url).await
    }
}
