//! Checks computed from a fetched page.

use once_cell::sync::Lazy;
use regex::Regex;

use super::flag;
use crate::fetch::FetchedPage;

/// More redirect hops than this is flagged.
pub const MAX_QUIET_REDIRECTS: u32 = 2;

static RE_IFRAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"<iframe>|<frameBorder>").unwrap());
static RE_MOUSE_OVER: Lazy<Regex> = Lazy::new(|| Regex::new(r"onmouseover").unwrap());
static RE_RIGHT_CLICK: Lazy<Regex> = Lazy::new(|| Regex::new(r"event.button==2").unwrap());

/// The four page-content features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentFeatures {
    pub iframe: u32,
    pub mouse_over: u32,
    pub right_click: u32,
    pub web_forwards: u32,
}

impl ContentFeatures {
    pub fn from_page(page: &FetchedPage) -> Self {
        Self {
            iframe: iframe(page),
            mouse_over: mouse_over(page),
            right_click: right_click(page),
            web_forwards: web_forwards(page),
        }
    }

    /// Defaults when the page could not be fetched.
    pub fn unavailable() -> Self {
        Self {
            iframe: 1,
            mouse_over: 1,
            right_click: 1,
            web_forwards: 1,
        }
    }
}

pub fn iframe(page: &FetchedPage) -> u32 {
    flag(RE_IFRAME.is_match(&page.body))
}

pub fn mouse_over(page: &FetchedPage) -> u32 {
    flag(RE_MOUSE_OVER.is_match(&page.body))
}

pub fn right_click(page: &FetchedPage) -> u32 {
    flag(RE_RIGHT_CLICK.is_match(&page.body))
}

pub fn web_forwards(page: &FetchedPage) -> u32 {
    flag(page.redirect_count > MAX_QUIET_REDIRECTS)
}
