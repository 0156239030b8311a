//! HTTP client for the Steam Web API: URL construction and the single GET round trip.

use url::Url;

use crate::Error;

/// Production host for the Steam Web API.
pub const STEAM_API_BASE_URL: &str = "https://api.steampowered.com";

const USER_AGENT: &str = concat!("steam_api/", env!("CARGO_PKG_VERSION"));

/// Low-level client for the Steam Web API.
///
/// Builds `https://<host>/<interface>/<method>/<version>` URLs and performs one
/// GET per call, returning the raw body text. Each request builds a fresh
/// `reqwest::Client`; there is no pooling, retry or timeout.
#[derive(Debug, Clone)]
pub struct Client {
    /// Base URL for the API. Defaults to [`STEAM_API_BASE_URL`].
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production Steam Web API.
    pub fn new() -> Self {
        Self::with_base_url(STEAM_API_BASE_URL)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    /// Builds the request URL for `interface/method/version`.
    ///
    /// When `api_key` is given it is attached verbatim as the `key` query
    /// parameter; otherwise the URL carries no query string.
    pub fn build_url(
        &self,
        interface: &str,
        method: &str,
        version: &str,
        api_key: Option<&str>,
    ) -> Result<Url, Error> {
        let mut url = Url::parse(
            format!(
                "{}/{}/{}/{}",
                &self.base_api_url, interface, method, version
            )
            .as_str(),
        )
        .map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e)
        })?;
        if let Some(key) = api_key {
            url.query_pairs_mut().append_pair("key", key);
        }
        Ok(url)
    }

    /// Performs a single GET and resolves with the full response body.
    ///
    /// The body is accumulated chunk by chunk until the stream ends. Any
    /// transport failure, including the connection closing before the body is
    /// complete, is returned as [`Error::Transport`] and no partial body is
    /// produced. The HTTP status is not inspected beyond logging.
    pub async fn get_text(&self, url: Url) -> Result<String, Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::ClientBuild(e)
            })?;

        // The query string may carry the API key, so only the path is logged.
        tracing::debug!("GET {}", url.path());
        let mut resp = client.get(url).send().await.map_err(|e| {
            tracing::error!("Failed to get resource: {}", e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        let mut body: Vec<u8> = Vec::new();
        while let Some(chunk) = resp.chunk().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })? {
            body.extend_from_slice(&chunk);
        }

        if !status.is_success() {
            tracing::warn!("Request returned status {}", status);
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}
