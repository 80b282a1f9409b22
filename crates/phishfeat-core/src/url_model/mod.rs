//! URL modeling for feature extraction.
//!
//! Splits arbitrary input strings into scheme / netloc / path / query /
//! fragment without rejecting anything, and derives the host and the
//! registrable domain used for WHOIS queries.

mod host;
mod split;

pub use host::{host_from_netloc, registrable_domain};
pub use split::{split_url, UrlParts};

/// Returns true if the scheme is one the page fetcher will request.
pub fn is_fetchable_scheme(scheme: &str) -> bool {
    scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
}
