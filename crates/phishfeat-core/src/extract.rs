//! Per-URL feature extraction.
//!
//! Runs the lexical checks, one WHOIS lookup (plus the traffic rank when it
//! succeeds) and one page fetch. A failed lookup or fetch sets its whole
//! feature group to the suspicious default; nothing is retried and no error
//! reaches the caller.

use std::sync::Arc;

use chrono::Utc;

use crate::config::PhishfeatConfig;
use crate::fetch::{fetch_page, HttpOptions};
use crate::heuristics::{ContentFeatures, DomainFeatures, FeatureVector, LexicalFeatures};
use crate::traffic;
use crate::url_model::{registrable_domain, split_url};
use crate::whois::{DomainLookup, WhoisError, WhoisRecord};

/// Settings for one extractor, usually derived from [`PhishfeatConfig`].
#[derive(Debug, Clone)]
pub struct ExtractorSettings {
    pub http: HttpOptions,
    pub traffic_endpoint: String,
}

impl ExtractorSettings {
    pub fn from_config(cfg: &PhishfeatConfig) -> Self {
        Self {
            http: HttpOptions {
                timeout: cfg.timeout(),
                user_agent: cfg.user_agent.clone(),
            },
            traffic_endpoint: cfg.traffic_endpoint.clone(),
        }
    }
}

/// Features of one URL plus which groups fell back to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extraction {
    pub features: FeatureVector,
    pub whois_failed: bool,
    pub fetch_failed: bool,
}

/// Shared, thread-safe extractor. Clone it into each worker.
#[derive(Clone)]
pub struct FeatureExtractor {
    lookup: Arc<dyn DomainLookup>,
    settings: ExtractorSettings,
}

impl FeatureExtractor {
    pub fn new(lookup: Arc<dyn DomainLookup>, settings: ExtractorSettings) -> Self {
        Self { lookup, settings }
    }

    /// Computes all 16 features for `url`. Blocks on network I/O.
    pub fn extract(&self, url: &str) -> Extraction {
        let lexical = LexicalFeatures::from_url(url);

        let (domain, whois_failed) = match self.lookup_record(url) {
            Ok(record) => {
                let web_traffic =
                    traffic::web_traffic(&self.settings.traffic_endpoint, url, &self.settings.http);
                (DomainFeatures::from_record(&record, web_traffic, Utc::now()), false)
            }
            Err(e) => {
                tracing::debug!(url, error = %e, "whois lookup failed; domain features defaulted");
                (DomainFeatures::unavailable(), true)
            }
        };

        let (content, fetch_failed) = match fetch_page(url, &self.settings.http) {
            Ok(page) => {
                tracing::trace!(
                    url,
                    status = page.status,
                    redirects = page.redirect_count,
                    final_url = page.effective_url.as_deref().unwrap_or(url),
                    "page fetched"
                );
                (ContentFeatures::from_page(&page), false)
            }
            Err(e) => {
                tracing::debug!(url, error = %e, timeout = e.is_timeout(), "page fetch failed; content features defaulted");
                (ContentFeatures::unavailable(), true)
            }
        };

        Extraction {
            features: FeatureVector {
                lexical,
                domain,
                content,
            },
            whois_failed,
            fetch_failed,
        }
    }

    fn lookup_record(&self, url: &str) -> Result<WhoisRecord, WhoisError> {
        let host = split_url(url).host();
        let domain = registrable_domain(&host).ok_or(WhoisError::NoHost)?;
        self.lookup.lookup(&domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    struct Unreachable;

    impl DomainLookup for Unreachable {
        fn lookup(&self, domain: &str) -> Result<WhoisRecord, WhoisError> {
            Err(WhoisError::Lookup {
                domain: domain.to_string(),
                message: "connection refused".to_string(),
            })
        }
    }

    #[derive(Default)]
    struct Recording(Mutex<Vec<String>>);

    impl DomainLookup for Recording {
        fn lookup(&self, domain: &str) -> Result<WhoisRecord, WhoisError> {
            self.0.lock().unwrap().push(domain.to_string());
            Err(WhoisError::NoMatch {
                domain: domain.to_string(),
            })
        }
    }

    fn offline_settings() -> ExtractorSettings {
        ExtractorSettings {
            http: HttpOptions {
                timeout: Duration::from_secs(1),
                ..HttpOptions::default()
            },
            traffic_endpoint: "http://127.0.0.1:9/data?url=".to_string(),
        }
    }

    #[test]
    fn shortener_without_network_uses_defaults() {
        let extractor = FeatureExtractor::new(Arc::new(Unreachable), offline_settings());
        let out = extractor.extract("bit.ly/test");
        assert!(out.whois_failed);
        assert!(out.fetch_failed);
        assert_eq!(out.features, FeatureVector::offline("bit.ly/test"));
        assert_eq!(out.features.lexical.tiny_url, 1);
        assert_eq!(out.features.domain.dns_record, 1);
    }

    #[test]
    fn failure_path_is_deterministic() {
        let extractor = FeatureExtractor::new(Arc::new(Unreachable), offline_settings());
        let a = extractor.extract("http://127.0.0.1:9/login");
        let b = extractor.extract("http://127.0.0.1:9/login");
        assert_eq!(a, b);
        assert_eq!(a.features.content, ContentFeatures::unavailable());
    }

    #[test]
    fn whois_is_queried_with_registrable_domain() {
        let recording = Arc::new(Recording::default());
        let extractor = FeatureExtractor::new(recording.clone(), offline_settings());
        extractor.extract("ftp://login.secure.example.co.uk/a");
        extractor.extract("no-host-here");
        let seen = recording.0.lock().unwrap().clone();
        assert_eq!(seen, vec!["example.co.uk".to_string()]);
    }

    #[test]
    fn settings_from_config() {
        let cfg = PhishfeatConfig {
            timeout_secs: 9,
            user_agent: "ua".to_string(),
            ..PhishfeatConfig::default()
        };
        let s = ExtractorSettings::from_config(&cfg);
        assert_eq!(s.http.timeout, Duration::from_secs(9));
        assert_eq!(s.http.user_agent, "ua");
        assert_eq!(s.traffic_endpoint, cfg.traffic_endpoint);
    }
}
