//! Traffic-rank feature.
//!
//! Queries a ranking endpoint returning XML and reads the `RANK` attribute
//! of its `<REACH>` element, whatever the response status. Any failure counts
//! as low traffic.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::fetch::{fetch_page, FetchError, HttpOptions};

/// Ranks at or beyond this are low-traffic.
pub const LOW_TRAFFIC_RANK: u64 = 100_000;

static RE_REACH_RANK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?is)<REACH\b[^>]*?\bRANK\s*=\s*["']([^"']*)["']"#).unwrap());

#[derive(Debug, Error)]
pub enum TrafficError {
    #[error("rank request failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("no REACH rank in response")]
    MissingRank,
    #[error("invalid rank {0:?}")]
    InvalidRank(String),
}

/// Request URL for `url` against `endpoint` (the URL is appended percent-encoded).
pub fn rank_query_url(endpoint: &str, url: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(url.as_bytes()).collect();
    format!("{}{}", endpoint, encoded)
}

/// Extracts the reach rank from a ranking response body.
pub fn parse_rank(body: &str) -> Result<u64, TrafficError> {
    let raw = RE_REACH_RANK
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .ok_or(TrafficError::MissingRank)?;
    raw.parse::<u64>()
        .map_err(|_| TrafficError::InvalidRank(raw.to_string()))
}

/// Looks up the rank of `url`.
pub fn lookup_rank(endpoint: &str, url: &str, opts: &HttpOptions) -> Result<u64, TrafficError> {
    let page = fetch_page(&rank_query_url(endpoint, url), opts)?;
    parse_rank(&page.body)
}

/// 1 if the rank is at or beyond [`LOW_TRAFFIC_RANK`] or could not be obtained.
pub fn web_traffic(endpoint: &str, url: &str, opts: &HttpOptions) -> u32 {
    match lookup_rank(endpoint, url, opts) {
        Ok(rank) => u32::from(rank >= LOW_TRAFFIC_RANK),
        Err(e) => {
            tracing::debug!(url, error = %e, "traffic rank unavailable");
            1
        }
    }
}
