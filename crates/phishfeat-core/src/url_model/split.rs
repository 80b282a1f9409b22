//! Lenient URL splitting.

use super::host::host_from_netloc;

/// Components of a URL string. Slices borrow from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts<'a> {
    /// Lowercased scheme, empty if none was recognised.
    pub scheme: String,
    /// Authority section (userinfo, host, port), case preserved.
    pub netloc: &'a str,
    pub path: &'a str,
    pub query: &'a str,
    pub fragment: &'a str,
}

impl UrlParts<'_> {
    /// Lowercased host without userinfo, port or IPv6 brackets.
    pub fn host(&self) -> String {
        host_from_netloc(self.netloc)
    }
}

fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.'
}

/// Splits `url` into its components.
///
/// A scheme is recognised only as a leading ASCII letter followed by scheme
/// characters and `:`. The netloc exists only when the remainder starts with
/// `//`, so `bit.ly/test` has an empty netloc and its whole text is the path.
pub fn split_url(url: &str) -> UrlParts<'_> {
    let url = url.trim_start_matches(|c: char| c <= ' ');

    let mut scheme = String::new();
    let mut rest = url;
    if let Some(i) = url.find(':') {
        let candidate = &url[..i];
        let starts_alpha = candidate
            .chars()
            .next()
            .map(|c| c.is_ascii_alphabetic())
            .unwrap_or(false);
        if starts_alpha && candidate.chars().all(is_scheme_char) {
            scheme = candidate.to_ascii_lowercase();
            rest = &url[i + 1..];
        }
    }

    let mut netloc = "";
    if let Some(after) = rest.strip_prefix("//") {
        let end = after.find(&['/', '?', '#'][..]).unwrap_or(after.len());
        netloc = &after[..end];
        rest = &after[end..];
    }

    let (rest, fragment) = match rest.split_once('#') {
        Some((r, f)) => (r, f),
        None => (rest, ""),
    };
    let (path, query) = match rest.split_once('?') {
        Some((p, q)) => (p, q),
        None => (rest, ""),
    };

    UrlParts {
        scheme,
        netloc,
        path,
        query,
        fragment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_url() {
        let p = split_url("HTTPS://user:pw@Example.com:8080/a/b/c.html?x=1#top");
        assert_eq!(p.scheme, "https");
        assert_eq!(p.netloc, "user:pw@Example.com:8080");
        assert_eq!(p.path, "/a/b/c.html");
        assert_eq!(p.query, "x=1");
        assert_eq!(p.fragment, "top");
        assert_eq!(p.host(), "example.com");
    }

    #[test]
    fn no_scheme_means_no_netloc() {
        let p = split_url("bit.ly/test");
        assert_eq!(p.scheme, "");
        assert_eq!(p.netloc, "");
        assert_eq!(p.path, "bit.ly/test");
        assert_eq!(p.host(), "");
    }

    #[test]
    fn scheme_relative() {
        let p = split_url("//cdn.example.net/lib.js");
        assert_eq!(p.scheme, "");
        assert_eq!(p.netloc, "cdn.example.net");
        assert_eq!(p.path, "/lib.js");
    }

    #[test]
    fn netloc_ends_at_query_or_fragment() {
        let p = split_url("http://example.com?q=1");
        assert_eq!(p.netloc, "example.com");
        assert_eq!(p.path, "");
        assert_eq!(p.query, "q=1");

        let p = split_url("http://example.com#frag");
        assert_eq!(p.netloc, "example.com");
        assert_eq!(p.fragment, "frag");
    }

    #[test]
    fn digit_led_prefix_is_not_a_scheme() {
        let p = split_url("1http://example.com");
        assert_eq!(p.scheme, "");
        assert_eq!(p.path, "1http://example.com");
    }

    #[test]
    fn host_port_without_slashes_is_scheme_and_path() {
        let p = split_url("localhost:8080/x");
        assert_eq!(p.scheme, "localhost");
        assert_eq!(p.netloc, "");
        assert_eq!(p.path, "8080/x");
    }

    #[test]
    fn empty_and_whitespace() {
        let p = split_url("");
        assert_eq!(p.path, "");
        let p = split_url("  http://a.b/");
        assert_eq!(p.scheme, "http");
        assert_eq!(p.netloc, "a.b");
    }
}
