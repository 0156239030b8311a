use steam_api::{
    GlobalStatsQuery, OwnedGamesQuery, Relationship, SteamApiHandler, TradeHistoryQuery,
    TradeOffersQuery, VanityUrlType,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const KEY: &str = "ABC123";

async fn only_request(mock_server: &MockServer) -> Request {
    let mut requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    requests.remove(0)
}

fn pairs(request: &Request) -> Vec<(String, String)> {
    request.url.query_pairs().into_owned().collect()
}

fn has_key(request: &Request) -> bool {
    request.url.query_pairs().any(|(k, _)| k == "key")
}

#[tokio::test]
async fn current_players_is_unauthenticated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ISteamUserStats/GetNumberOfCurrentPlayers/v1"))
        .and(query_param("appid", "1172620"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"response":{"player_count":1234,"result":1}}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let steam = SteamApiHandler::with_base_url(&mock_server.uri(), KEY);
    assert_eq!(steam.api_key(), "ABC123");
    let body = steam
        .user_stats()
        .get_number_of_current_players(1172620)
        .await
        .unwrap();
    assert_eq!(body, r#"{"response":{"player_count":1234,"result":1}}"#);

    let request = only_request(&mock_server).await;
    assert_eq!(request.url.query(), Some("appid=1172620"));
    assert!(!has_key(&request));
}

#[tokio::test]
async fn global_achievement_percentages_is_unauthenticated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/ISteamUserStats/GetGlobalAchievementPercentagesForApp/v2",
        ))
        .and(query_param("gameid", "440"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&mock_server)
        .await;

    let steam = SteamApiHandler::with_base_url(&mock_server.uri(), KEY);
    steam
        .user_stats()
        .get_global_achievement_percentages_for_app(440)
        .await
        .unwrap();

    assert!(!has_key(&only_request(&mock_server).await));
}

#[tokio::test]
async fn authenticated_calls_attach_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/IPlayerService/GetSteamLevel/v1"))
        .and(query_param("key", KEY))
        .and(query_param("steamid", "76561197960435530"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"response":{"player_level":7}}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let steam = SteamApiHandler::with_base_url(&mock_server.uri(), KEY);
    let body = steam
        .player()
        .get_steam_level(76561197960435530)
        .await
        .unwrap();
    assert_eq!(body, r#"{"response":{"player_level":7}}"#);
}

#[tokio::test]
async fn server_error_body_is_returned_as_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/IGameServersService/GetAccountList/v1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let steam = SteamApiHandler::with_base_url(&mock_server.uri(), KEY);
    let result = steam.game_servers().get_account_list().await;
    assert_eq!(result.unwrap(), "Internal Server Error");
}

#[tokio::test]
async fn unauthorized_body_is_returned_as_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ISteamUser/GetFriendList/v1"))
        .respond_with(ResponseTemplate::new(401).set_body_string("<html>Unauthorized</html>"))
        .mount(&mock_server)
        .await;

    let steam = SteamApiHandler::with_base_url(&mock_server.uri(), KEY);
    let body = steam
        .user()
        .get_friend_list(76561197960435530, Some(Relationship::Friend))
        .await
        .unwrap();
    assert_eq!(body, "<html>Unauthorized</html>");

    let request = only_request(&mock_server).await;
    assert_eq!(
        pairs(&request),
        vec![
            ("key".to_string(), KEY.to_string()),
            ("steamid".to_string(), "76561197960435530".to_string()),
            ("relationship".to_string(), "friend".to_string()),
        ]
    );
}

#[tokio::test]
async fn optional_relationship_is_omitted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let steam = SteamApiHandler::with_base_url(&mock_server.uri(), KEY);
    let body = steam
        .user()
        .get_friend_list(76561197960435530, None)
        .await
        .unwrap();
    assert_eq!(body, "");

    let request = only_request(&mock_server).await;
    assert!(pairs(&request).iter().all(|(k, _)| k != "relationship"));
}

#[tokio::test]
async fn vanity_url_and_bare_name_send_same_parameter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ISteamUser/ResolveVanityURL/v1"))
        .and(query_param("vanityurl", "foo"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(3)
        .mount(&mock_server)
        .await;

    let steam = SteamApiHandler::with_base_url(&mock_server.uri(), KEY);
    let user = steam.user();
    assert_eq!(
        user.resolve_vanity_url("https://steamcommunity.com/id/foo/", None)
            .await
            .unwrap(),
        "ok"
    );
    assert_eq!(user.resolve_vanity_url("foo", None).await.unwrap(), "ok");
    assert_eq!(
        user.resolve_vanity_url("https://steamcommunity.com/groups/foo", Some(VanityUrlType::Group))
            .await
            .unwrap(),
        "ok"
    );

    let requests = mock_server.received_requests().await.unwrap();
    assert!(pairs(&requests[0]).iter().all(|(k, _)| k != "url_type"));
    assert!(pairs(&requests[2]).contains(&("url_type".to_string(), "2".to_string())));
}

#[tokio::test]
async fn batch_lookups_send_comma_delimited_ids() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ISteamUser/GetPlayerSummaries/v2"))
        .and(query_param("steamids", "76561197960435530,76561197960287930"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/ISteamUser/GetPlayerBans/v1"))
        .and(query_param("steamids", "76561197960435530"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let steam = SteamApiHandler::with_base_url(&mock_server.uri(), KEY);
    steam
        .user()
        .get_player_summaries(&[76561197960435530, 76561197960287930])
        .await
        .unwrap();
    steam
        .user()
        .get_player_bans(&[76561197960435530])
        .await
        .unwrap();
}

#[tokio::test]
async fn global_stats_names_are_indexed_by_position() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ISteamUserStats/GetGlobalStatsForGame/v1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let steam = SteamApiHandler::with_base_url(&mock_server.uri(), KEY);
    let query = GlobalStatsQuery::new(440)
        .with_name("kills")
        .with_name("kills")
        .with_name("deaths");
    steam
        .user_stats()
        .get_global_stats_for_game(&query)
        .await
        .unwrap();

    let request = only_request(&mock_server).await;
    let names: Vec<(String, String)> = pairs(&request)
        .into_iter()
        .filter(|(k, _)| k.starts_with("name["))
        .collect();
    assert_eq!(
        names,
        vec![
            ("name[0]".to_string(), "kills".to_string()),
            ("name[1]".to_string(), "kills".to_string()),
            ("name[2]".to_string(), "deaths".to_string()),
        ]
    );
    assert!(pairs(&request).contains(&("count".to_string(), "3".to_string())));
}

#[tokio::test]
async fn player_achievements_language_uses_l() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ISteamUserStats/GetPlayerAchievements/v1"))
        .and(query_param("l", "german"))
        .and(query_param("appid", "440"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let steam = SteamApiHandler::with_base_url(&mock_server.uri(), KEY);
    steam
        .user_stats()
        .get_player_achievements(76561197960435530, 440, Some("german"))
        .await
        .unwrap();
}

#[tokio::test]
async fn schema_and_user_stats_use_v2() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ISteamUserStats/GetSchemaForGame/v2"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/ISteamUserStats/GetUserStatsForGame/v2"))
        .and(query_param("steamid", "76561197960435530"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let steam = SteamApiHandler::with_base_url(&mock_server.uri(), KEY);
    steam
        .user_stats()
        .get_schema_for_game(440, None)
        .await
        .unwrap();
    steam
        .user_stats()
        .get_user_stats_for_game(76561197960435530, 440)
        .await
        .unwrap();
}

#[tokio::test]
async fn owned_games_sends_boolean_tokens() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/IPlayerService/GetOwnedGames/v1"))
        .and(query_param("include_appinfo", "1"))
        .and(query_param("include_played_free_games", "0"))
        .and(query_param("appids_filter[0]", "440"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let steam = SteamApiHandler::with_base_url(&mock_server.uri(), KEY);
    let query = OwnedGamesQuery::new(76561197960435530)
        .with_appinfo(true)
        .with_appid_filter(440);
    steam.player().get_owned_games(&query).await.unwrap();
}

#[tokio::test]
async fn player_service_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/IPlayerService/GetRecentlyPlayedGames/v1"))
        .and(query_param("count", "0"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/IPlayerService/GetSingleGamePlaytime/v1"))
        .and(query_param("appid", "570"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/IPlayerService/GetBadges/v1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/IPlayerService/GetCommunityBadgeProgress/v1"))
        .and(query_param("badgeid", "2"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let steam = SteamApiHandler::with_base_url(&mock_server.uri(), KEY);
    let player = steam.player();
    player
        .get_recently_played_games(76561197960435530, 0)
        .await
        .unwrap();
    player
        .get_single_game_playtime(76561197960435530, 570)
        .await
        .unwrap();
    player.get_badges(76561197960435530).await.unwrap();
    player
        .get_community_badge_progress(76561197960435530, 2)
        .await
        .unwrap();
}

#[tokio::test]
async fn econ_service_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/IEconService/GetTradeHistory/v1"))
        .and(query_param("max_trades", "25"))
        .and(query_param("include_total", "1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/IEconService/GetTradeOffers/v1"))
        .and(query_param("get_recieved_offers", "1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/IEconService/GetTradeOffer/v1"))
        .and(query_param("tradeofferid", "5843210"))
        .and(query_param("language", "english"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/IEconService/GetTradeOffersSummary/v1"))
        .and(query_param("time_last_visit", "1700000000"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let steam = SteamApiHandler::with_base_url(&mock_server.uri(), KEY);
    let econ = steam.econ();
    econ.get_trade_history(&TradeHistoryQuery::new(25).with_include_total(true))
        .await
        .unwrap();
    econ.get_trade_offers(&TradeOffersQuery::default().with_received_offers(true))
        .await
        .unwrap();
    econ.get_trade_offer(5843210, "english").await.unwrap();
    econ.get_trade_offers_summary(1700000000).await.unwrap();

    for request in mock_server.received_requests().await.unwrap() {
        assert!(pairs(&request).contains(&("key".to_string(), KEY.to_string())));
    }
}

#[tokio::test]
async fn concurrent_calls_are_independent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ISteamUserStats/GetNumberOfCurrentPlayers/v1"))
        .and(query_param("appid", "440"))
        .respond_with(ResponseTemplate::new(200).set_body_string("tf2"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ISteamUserStats/GetNumberOfCurrentPlayers/v1"))
        .and(query_param("appid", "570"))
        .respond_with(ResponseTemplate::new(200).set_body_string("dota"))
        .mount(&mock_server)
        .await;

    let steam = SteamApiHandler::with_base_url(&mock_server.uri(), KEY);
    let stats = steam.user_stats();
    let (a, b) = tokio::join!(
        stats.get_number_of_current_players(440),
        stats.get_number_of_current_players(570)
    );
    assert_eq!(a.unwrap(), "tf2");
    assert_eq!(b.unwrap(), "dota");
}
