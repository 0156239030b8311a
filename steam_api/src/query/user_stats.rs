use url::Url;

use crate::AppID;

use super::{append_indexed, Query};

/// Parameters for `ISteamUserStats/GetGlobalStatsForGame`.
///
/// Stat names are sent as `name[0]..name[n-1]` in the order given. `count`
/// defaults to the number of names.
#[derive(Clone, Debug)]
pub struct GlobalStatsQuery {
    pub appid: AppID,
    pub count: Option<u32>,
    pub names: Vec<String>,
    /// Start of the daily totals window, unix time.
    pub startdate: Option<u64>,
    /// End of the daily totals window, unix time.
    pub enddate: Option<u64>,
}

impl Query for GlobalStatsQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let count = self.count.unwrap_or(self.names.len() as u32);
        url.query_pairs_mut()
            .append_pair("appid", &self.appid.to_string())
            .append_pair("count", &count.to_string());
        append_indexed(&mut url, "name", &self.names);
        if let Some(startdate) = self.startdate {
            url.query_pairs_mut()
                .append_pair("startdate", &startdate.to_string());
        }
        if let Some(enddate) = self.enddate {
            url.query_pairs_mut()
                .append_pair("enddate", &enddate.to_string());
        }
        url
    }
}

impl GlobalStatsQuery {
    pub fn new(appid: AppID) -> Self {
        Self {
            appid,
            count: None,
            names: Vec::new(),
            startdate: None,
            enddate: None,
        }
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.names.push(name.to_string());
        self
    }
    pub fn with_names(mut self, names: &[String]) -> Self {
        self.names.extend_from_slice(names);
        self
    }

    pub fn with_startdate(mut self, startdate: u64) -> Self {
        self.startdate = Some(startdate);
        self
    }

    pub fn with_enddate(mut self, enddate: u64) -> Self {
        self.enddate = Some(enddate);
        self
    }
}
