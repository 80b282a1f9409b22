//! Feature heuristics and the fixed-order feature vector.
//!
//! Every function here is total: it returns a value for any input and never
//! fails. Network-dependent groups have an `unavailable()` constructor that
//! yields the suspicious default used when their lookup fails.

pub mod content;
pub mod domain;
pub mod lexical;

pub use content::ContentFeatures;
pub use domain::DomainFeatures;
pub use lexical::LexicalFeatures;

/// Number of features per URL.
pub const FEATURE_COUNT: usize = 16;

/// Output column names, in vector order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Have_IP",
    "Have_At",
    "URL_Length",
    "URL_Depth",
    "Redirection",
    "https_Domain",
    "TinyURL",
    "Prefix/Suffix",
    "DNS_Record",
    "Web_Traffic",
    "Domain_Age",
    "Domain_End",
    "iFrame",
    "Mouse_Over",
    "Right_Click",
    "Web_Forwards",
];

/// The 16 features of one URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureVector {
    pub lexical: LexicalFeatures,
    pub domain: DomainFeatures,
    pub content: ContentFeatures,
}

impl FeatureVector {
    /// Vector with both network groups at their failure defaults.
    pub fn offline(url: &str) -> Self {
        Self {
            lexical: LexicalFeatures::from_url(url),
            domain: DomainFeatures::unavailable(),
            content: ContentFeatures::unavailable(),
        }
    }

    /// Values in `FEATURE_NAMES` order.
    pub fn values(&self) -> [u32; FEATURE_COUNT] {
        let l = &self.lexical;
        let d = &self.domain;
        let c = &self.content;
        [
            l.have_ip,
            l.have_at,
            l.url_length,
            l.url_depth,
            l.redirection,
            l.https_domain,
            l.tiny_url,
            l.prefix_suffix,
            d.dns_record,
            d.web_traffic,
            d.domain_age,
            d.domain_end,
            c.iframe,
            c.mouse_over,
            c.right_click,
            c.web_forwards,
        ]
    }

    /// `(name, value)` pairs in column order.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, u32)> {
        FEATURE_NAMES.into_iter().zip(self.values())
    }
}

pub(crate) fn flag(b: bool) -> u32 {
    u32::from(b)
}
