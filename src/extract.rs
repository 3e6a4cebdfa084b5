//! Video identifier extraction from share links and watch-page URLs.

use url::Url;

/// Host used for single-video short links (`https://youtu.be/<id>`)
pub const SHORT_LINK_HOST: &str = "youtu.be";

/// Canonical platform hosts (`https://www.youtube.com/watch?v=<id>`)
pub const CANONICAL_HOSTS: [&str; 2] = ["www.youtube.com", "youtube.com"];

pub const WATCH_PATH: &str = "/watch";

/// Extract a video identifier from a URL.
///
/// - `youtu.be/<id>` yields everything after the leading `/` of the path
/// - `youtube.com/watch?v=<id>` (bare or `www.`) yields the first non-blank `v` value
///
/// Anything else, including input that does not parse as a URL, yields `None`.
pub fn extract_video_id(input: &str) -> Option<String> {
    let url = Url::parse(input).ok()?;
    let host = url.host_str()?;

    if host == SHORT_LINK_HOST {
        let path = url.path();
        let id = path.strip_prefix('/').unwrap_or(path);
        // `Url` percent-encodes the path; hand back the text as written
        return Some(match urlencoding::decode(id) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => id.to_string(),
        });
    }

    if CANONICAL_HOSTS.contains(&host) && url.path() == WATCH_PATH {
        return url
            .query_pairs()
            .find(|(key, value)| key == "v" && !value.is_empty())
            .map(|(_, value)| value.into_owned());
    }

    None
}

/// Resolve user input that may be either a URL or a bare identifier.
///
/// URLs go through [`extract_video_id`]; anything that does not parse as a URL
/// is taken verbatim (trimmed) as the identifier.
pub fn resolve_video_id(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    match Url::parse(trimmed) {
        Ok(_) => extract_video_id(trimmed),
        Err(_) => Some(trimmed.to_string()),
    }
}
