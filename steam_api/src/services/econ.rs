use crate::{
    query::{Query, TradeHistoryQuery, TradeOffersQuery},
    Client, Error,
};

const INTERFACE: &str = "IEconService";

/// `IEconService`: trade offers and trade history. All methods are authenticated.
#[derive(Clone, Copy)]
pub struct EconService<'a> {
    client: &'a Client,
    api_key: &'a str,
}

impl<'a> EconService<'a> {
    pub(crate) fn new(client: &'a Client, api_key: &'a str) -> Self {
        Self { client, api_key }
    }

    /// Fetches a page of the account's trade history.
    pub async fn get_trade_history(&self, query: &TradeHistoryQuery) -> Result<String, Error> {
        let url = self
            .client
            .build_url(INTERFACE, "GetTradeHistory", "v1", Some(self.api_key))?;
        self.client.get_text(query.add_to_url(&url)).await
    }

    /// Lists sent and/or received trade offers.
    pub async fn get_trade_offers(&self, query: &TradeOffersQuery) -> Result<String, Error> {
        let url = self
            .client
            .build_url(INTERFACE, "GetTradeOffers", "v1", Some(self.api_key))?;
        self.client.get_text(query.add_to_url(&url)).await
    }

    /// Fetches a single trade offer, with item descriptions in `language`.
    pub async fn get_trade_offer(&self, tradeofferid: u64, language: &str) -> Result<String, Error> {
        let mut url = self
            .client
            .build_url(INTERFACE, "GetTradeOffer", "v1", Some(self.api_key))?;
        url.query_pairs_mut()
            .append_pair("tradeofferid", &tradeofferid.to_string())
            .append_pair("language", language);
        self.client.get_text(url).await
    }

    /// Counts of pending and new offers since `time_last_visit` (unix time).
    pub async fn get_trade_offers_summary(&self, time_last_visit: u64) -> Result<String, Error> {
        let mut url =
            self.client
                .build_url(INTERFACE, "GetTradeOffersSummary", "v1", Some(self.api_key))?;
        url.query_pairs_mut()
            .append_pair("time_last_visit", &time_last_visit.to_string());
        self.client.get_text(url).await
    }
}
