//! Checks computed from the URL string alone.

use once_cell::sync::Lazy;
use regex::Regex;
use std::net::IpAddr;

use super::flag;
use crate::url_model::split_url;

/// URLs at least this many characters long are flagged.
pub const LONG_URL_CHARS: usize = 54;

/// A `//` found after this character index marks an embedded redirect.
const REDIRECT_MARKER_MIN_POS: usize = 6;

const SHORTENING_SERVICES: &str = concat!(
    r"bit\.ly|goo\.gl|shorte\.st|go2l\.ink|x\.co|ow\.ly|t\.co|tinyurl|tr\.im|is\.gd|cli\.gs|",
    r"yfrog\.com|migre\.me|ff\.im|tiny\.cc|url4\.eu|twit\.ac|su\.pr|twurl\.nl|snipurl\.com|",
    r"short\.to|BudURL\.com|ping\.fm|post\.ly|Just\.as|bkite\.com|snipr\.com|fic\.kr|loopt\.us|",
    r"doiop\.com|short\.ie|kl\.am|wp\.me|rubyurl\.com|om\.ly|to\.ly|bit\.do|t\.co|lnkd\.in|db\.tt|",
    r"qr\.ae|adf\.ly|goo\.gl|bitly\.com|cur\.lv|tinyurl\.com|ow\.ly|bit\.ly|ity\.im|q\.gs|is\.gd|",
    r"po\.st|bc\.vc|twitthis\.com|u\.to|j\.mp|buzurl\.com|cutt\.us|u\.bb|yourls\.org|x\.co|",
    r"prettylinkpro\.com|scrnch\.me|filoops\.info|vzturl\.com|qr\.net|1url\.com|tweez\.me|v\.gd|",
    r"tr\.im|link\.zip\.net",
);

static RE_SHORTENER: Lazy<Regex> =
    Lazy::new(|| Regex::new(SHORTENING_SERVICES).expect("shortener pattern"));

/// The eight URL-string features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LexicalFeatures {
    pub have_ip: u32,
    pub have_at: u32,
    pub url_length: u32,
    pub url_depth: u32,
    pub redirection: u32,
    pub https_domain: u32,
    pub tiny_url: u32,
    pub prefix_suffix: u32,
}

impl LexicalFeatures {
    pub fn from_url(url: &str) -> Self {
        Self {
            have_ip: have_ip(url),
            have_at: have_at(url),
            url_length: url_length(url),
            url_depth: url_depth(url),
            redirection: redirection(url),
            https_domain: https_domain(url),
            tiny_url: tiny_url(url),
            prefix_suffix: prefix_suffix(url),
        }
    }
}

/// 1 if the whole string is an IPv4 or IPv6 literal.
pub fn have_ip(url: &str) -> u32 {
    flag(url.parse::<IpAddr>().is_ok())
}

pub fn have_at(url: &str) -> u32 {
    flag(url.contains('@'))
}

pub fn url_length(url: &str) -> u32 {
    flag(url.chars().count() >= LONG_URL_CHARS)
}

/// Number of non-empty path segments.
pub fn url_depth(url: &str) -> u32 {
    let count = split_url(url)
        .path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// 1 if the last `//` sits past the scheme separator position.
pub fn redirection(url: &str) -> u32 {
    match url.rfind("//") {
        Some(byte_pos) => flag(url[..byte_pos].chars().count() > REDIRECT_MARKER_MIN_POS),
        None => 0,
    }
}

pub fn https_domain(url: &str) -> u32 {
    flag(split_url(url).netloc.contains("https"))
}

pub fn tiny_url(url: &str) -> u32 {
    flag(RE_SHORTENER.is_match(url))
}

pub fn prefix_suffix(url: &str) -> u32 {
    flag(split_url(url).netloc.contains('-'))
}
