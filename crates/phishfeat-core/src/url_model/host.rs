//! Host and registrable-domain derivation.

use std::net::IpAddr;

/// Strips userinfo, port and IPv6 brackets from a netloc and lowercases it.
pub fn host_from_netloc(netloc: &str) -> String {
    let hostinfo = match netloc.rsplit_once('@') {
        Some((_, h)) => h,
        None => netloc,
    };
    let host = if let Some(bracketed) = hostinfo.strip_prefix('[') {
        bracketed.split(']').next().unwrap_or("")
    } else {
        hostinfo.split(':').next().unwrap_or("")
    };
    host.trim_end_matches('.').to_ascii_lowercase()
}

/// Name to send to WHOIS for `host`.
///
/// Returns `None` for an empty host. IP literals are returned unchanged.
/// Otherwise the registrable domain under the public suffix list; a host that
/// is itself a suffix (or has no registrable part) is sent as-is.
pub fn registrable_domain(host: &str) -> Option<String> {
    let host = host.trim().trim_end_matches('.').to_ascii_lowercase();
    if host.is_empty() || host.split('.').all(str::is_empty) {
        return None;
    }
    if host.parse::<IpAddr>().is_ok() {
        return Some(host);
    }
    match psl::domain_str(&host) {
        Some(domain) => Some(domain.to_string()),
        None => Some(host),
    }
}
