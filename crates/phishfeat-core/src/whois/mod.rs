//! WHOIS lookups for the domain features.
//!
//! The extractor only depends on the [`DomainLookup`] trait; [`WhoisClient`]
//! is the network implementation over the `whois-rust` crate.

mod error;
mod parse;

pub use error::WhoisError;
pub use parse::{parse_whois_date, parse_whois_text, WhoisRecord};

use std::fs;
use std::time::Duration;

use whois_rust::{WhoIs, WhoIsLookupOptions};

use crate::config::WhoisConfig;

/// Built-in server table: IANA fallback plus direct servers for common TLDs.
const BUILTIN_SERVERS: &str = include_str!("servers.json");

/// Source of registration records. Implementations must be shareable across
/// worker threads.
pub trait DomainLookup: Send + Sync {
    fn lookup(&self, domain: &str) -> Result<WhoisRecord, WhoisError>;
}

/// Queries WHOIS servers over TCP port 43.
pub struct WhoisClient {
    whois: WhoIs,
    timeout: Duration,
    follow: u16,
}

impl WhoisClient {
    /// Builds a client from config; `timeout` applies to each server query.
    pub fn new(cfg: &WhoisConfig, timeout: Duration) -> Result<Self, WhoisError> {
        let servers = match &cfg.servers_path {
            Some(path) => fs::read_to_string(path)
                .map_err(|e| WhoisError::Servers(format!("{}: {}", path.display(), e)))?,
            None => BUILTIN_SERVERS.to_string(),
        };
        let whois = WhoIs::from_string(servers).map_err(|e| WhoisError::Servers(e.to_string()))?;
        Ok(Self {
            whois,
            timeout,
            follow: cfg.follow,
        })
    }

    /// Raw response text for `domain`.
    pub fn lookup_raw(&self, domain: &str) -> Result<String, WhoisError> {
        let lookup_err = |e: whois_rust::WhoIsError| WhoisError::Lookup {
            domain: domain.to_string(),
            message: e.to_string(),
        };
        let mut options = WhoIsLookupOptions::from_string(domain).map_err(lookup_err)?;
        options.timeout = Some(self.timeout);
        options.follow = self.follow;
        self.whois.lookup(options).map_err(lookup_err)
    }
}

impl DomainLookup for WhoisClient {
    fn lookup(&self, domain: &str) -> Result<WhoisRecord, WhoisError> {
        if domain.trim().is_empty() {
            return Err(WhoisError::NoHost);
        }
        let raw = self.lookup_raw(domain)?;
        let record = parse_whois_text(&raw);
        if !record.is_meaningful() {
            return Err(WhoisError::NoMatch {
                domain: domain.to_string(),
            });
        }
        tracing::trace!(domain, registrar = ?record.registrar, "whois record parsed");
        Ok(record)
    }
}
