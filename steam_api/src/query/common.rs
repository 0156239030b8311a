//! Shared query infrastructure: the [`Query`] trait and the serialization rules
//! every Steam Web API parameter goes through.

use url::Url;

use crate::SteamID;

/// Trait implemented by all query builders.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// Steam expects booleans as `1`/`0` rather than `true`/`false`.
pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// Appends each value under `name[i]`, `i` being its position in `values`.
pub(crate) fn append_indexed<T: ToString>(url: &mut Url, name: &str, values: &[T]) {
    if values.is_empty() {
        return;
    }
    let mut pairs = url.query_pairs_mut();
    for (i, value) in values.iter().enumerate() {
        pairs.append_pair(format!("{}[{}]", name, i).as_str(), &value.to_string());
    }
}

/// Batch lookups take their ids as one comma-delimited value.
pub(crate) fn join_steam_ids(steam_ids: &[SteamID]) -> String {
    steam_ids
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Reduces a full profile URL to its vanity name.
///
/// `https://steamcommunity.com/id/foo/` and `foo` both yield `foo`. Anything
/// that is not an http(s) URL with a non-empty path segment is returned
/// untouched.
pub(crate) fn vanity_name(input: &str) -> &str {
    let has_segment = match Url::parse(input) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => url
            .path_segments()
            .is_some_and(|mut segments| segments.any(|s| !s.is_empty())),
        _ => false,
    };
    if !has_segment {
        return input;
    }
    input
        .split(['?', '#'])
        .next()
        .unwrap_or(input)
        .rsplit('/')
        .find(|s| !s.is_empty())
        .unwrap_or(input)
}
