//! WHOIS lookup error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WhoisError {
    /// The URL had no host to query.
    #[error("no host to query")]
    NoHost,
    /// Server table could not be read or parsed.
    #[error("whois server table: {0}")]
    Servers(String),
    /// Network or protocol failure from the WHOIS client.
    #[error("whois lookup for {domain} failed: {message}")]
    Lookup { domain: String, message: String },
    /// The server answered but nothing recognisable came back.
    #[error("no whois record for {domain}")]
    NoMatch { domain: String },
}
