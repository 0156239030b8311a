use url::Url;

use super::{bool_token, Query};

/// Parameters for `IEconService/GetTradeHistory`.
///
/// Flags are always sent; the paging anchors and language are omitted unless set.
#[derive(Clone, Debug)]
pub struct TradeHistoryQuery {
    pub max_trades: u32,
    pub start_after_time: Option<u64>,
    pub start_after_tradeid: Option<u64>,
    pub navigating_back: bool,
    pub get_descriptions: bool,
    pub language: Option<String>,
    pub include_failed: bool,
    pub include_total: bool,
}

impl Query for TradeHistoryQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("max_trades", &self.max_trades.to_string());
        if let Some(start_after_time) = self.start_after_time {
            url.query_pairs_mut()
                .append_pair("start_after_time", &start_after_time.to_string());
        }
        if let Some(start_after_tradeid) = self.start_after_tradeid {
            url.query_pairs_mut()
                .append_pair("start_after_tradeid", &start_after_tradeid.to_string());
        }
        url.query_pairs_mut()
            .append_pair("navigating_back", bool_token(self.navigating_back))
            .append_pair("get_descriptions", bool_token(self.get_descriptions));
        if let Some(language) = &self.language {
            url.query_pairs_mut().append_pair("language", language);
        }
        url.query_pairs_mut()
            .append_pair("include_failed", bool_token(self.include_failed))
            .append_pair("include_total", bool_token(self.include_total));
        url
    }
}

impl TradeHistoryQuery {
    pub fn new(max_trades: u32) -> Self {
        Self {
            max_trades,
            start_after_time: None,
            start_after_tradeid: None,
            navigating_back: false,
            get_descriptions: false,
            language: None,
            include_failed: false,
            include_total: false,
        }
    }

    /// Continues after the trade with this time and id (the last trade of the previous page).
    pub fn with_start_after(mut self, time: u64, tradeid: u64) -> Self {
        self.start_after_time = Some(time);
        self.start_after_tradeid = Some(tradeid);
        self
    }

    pub fn with_navigating_back(mut self, navigating_back: bool) -> Self {
        self.navigating_back = navigating_back;
        self
    }

    pub fn with_descriptions(mut self, get_descriptions: bool) -> Self {
        self.get_descriptions = get_descriptions;
        self
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    pub fn with_include_failed(mut self, include_failed: bool) -> Self {
        self.include_failed = include_failed;
        self
    }

    pub fn with_include_total(mut self, include_total: bool) -> Self {
        self.include_total = include_total;
        self
    }
}

/// Parameters for `IEconService/GetTradeOffers`.
#[derive(Clone, Debug, Default)]
pub struct TradeOffersQuery {
    pub get_sent_offers: bool,
    pub get_received_offers: bool,
    pub get_descriptions: bool,
    pub language: Option<String>,
    pub active_only: bool,
    pub historical_only: bool,
    /// With `active_only`, offers updated since this unix time are also returned.
    pub time_historical_cutoff: Option<u64>,
}

impl Query for TradeOffersQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        // "recieved" is the remote API's spelling.
        url.query_pairs_mut()
            .append_pair("get_sent_offers", bool_token(self.get_sent_offers))
            .append_pair("get_recieved_offers", bool_token(self.get_received_offers))
            .append_pair("get_descriptions", bool_token(self.get_descriptions));
        if let Some(language) = &self.language {
            url.query_pairs_mut().append_pair("language", language);
        }
        url.query_pairs_mut()
            .append_pair("active_only", bool_token(self.active_only))
            .append_pair("historical_only", bool_token(self.historical_only));
        if let Some(cutoff) = self.time_historical_cutoff {
            url.query_pairs_mut()
                .append_pair("time_historical_cutoff", &cutoff.to_string());
        }
        url
    }
}

impl TradeOffersQuery {
    pub fn with_sent_offers(mut self, get_sent_offers: bool) -> Self {
        self.get_sent_offers = get_sent_offers;
        self
    }

    pub fn with_received_offers(mut self, get_received_offers: bool) -> Self {
        self.get_received_offers = get_received_offers;
        self
    }

    pub fn with_descriptions(mut self, get_descriptions: bool) -> Self {
        self.get_descriptions = get_descriptions;
        self
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = Some(language.to_string());
        self
    }

    pub fn with_active_only(mut self, active_only: bool) -> Self {
        self.active_only = active_only;
        self
    }

    pub fn with_historical_only(mut self, historical_only: bool) -> Self {
        self.historical_only = historical_only;
        self
    }

    pub fn with_time_historical_cutoff(mut self, cutoff: u64) -> Self {
        self.time_historical_cutoff = Some(cutoff);
        self
    }
}
