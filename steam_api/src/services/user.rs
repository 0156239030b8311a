use crate::{
    query::{join_steam_ids, vanity_name, Relationship, VanityUrlType},
    Client, Error, SteamID,
};

const INTERFACE: &str = "ISteamUser";

/// `ISteamUser`: profiles, friends, bans and vanity URL resolution.
#[derive(Clone, Copy)]
pub struct SteamUser<'a> {
    client: &'a Client,
    api_key: &'a str,
}

impl<'a> SteamUser<'a> {
    pub(crate) fn new(client: &'a Client, api_key: &'a str) -> Self {
        Self { client, api_key }
    }

    /// Friend list of a user. A private friend list comes back as a 401 body.
    pub async fn get_friend_list(
        &self,
        steamid: SteamID,
        relationship: Option<Relationship>,
    ) -> Result<String, Error> {
        let mut url = self
            .client
            .build_url(INTERFACE, "GetFriendList", "v1", Some(self.api_key))?;
        url.query_pairs_mut()
            .append_pair("steamid", &steamid.to_string());
        if let Some(relationship) = relationship {
            url.query_pairs_mut()
                .append_pair("relationship", relationship.to_string().as_str());
        }
        self.client.get_text(url).await
    }

    pub async fn get_player_bans(&self, steamids: &[SteamID]) -> Result<String, Error> {
        let mut url = self
            .client
            .build_url(INTERFACE, "GetPlayerBans", "v1", Some(self.api_key))?;
        url.query_pairs_mut()
            .append_pair("steamids", &join_steam_ids(steamids));
        self.client.get_text(url).await
    }

    /// Profile data (persona name, avatar, profile URL) for up to 100 users.
    pub async fn get_player_summaries(&self, steamids: &[SteamID]) -> Result<String, Error> {
        let mut url = self
            .client
            .build_url(INTERFACE, "GetPlayerSummaries", "v2", Some(self.api_key))?;
        url.query_pairs_mut()
            .append_pair("steamids", &join_steam_ids(steamids));
        self.client.get_text(url).await
    }

    /// Resolves a vanity name to a Steam ID.
    ///
    /// Accepts the bare name (`limegradient`) or the full community URL
    /// (`https://steamcommunity.com/id/limegradient/`).
    pub async fn resolve_vanity_url(
        &self,
        vanityurl: &str,
        url_type: Option<VanityUrlType>,
    ) -> Result<String, Error> {
        let mut url = self
            .client
            .build_url(INTERFACE, "ResolveVanityURL", "v1", Some(self.api_key))?;
        url.query_pairs_mut()
            .append_pair("vanityurl", vanity_name(vanityurl));
        if let Some(url_type) = url_type {
            url.query_pairs_mut()
                .append_pair("url_type", (url_type as u8).to_string().as_str());
        }
        self.client.get_text(url).await
    }
}
