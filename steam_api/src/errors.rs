//! Error types for the API client.

/// Errors that can occur when building or sending Steam Web API requests.
///
/// A non-success HTTP status is not an error: the body is returned as-is and
/// left to the caller to interpret.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The interface, method or version could not form a valid URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The request could not be sent or its body could not be read in full
    /// (DNS, connection, TLS, or the stream closed early).
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),
    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}
