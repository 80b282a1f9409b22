//! Parse raw WHOIS text into a [`WhoisRecord`].
//!
//! Formats vary by registry, so field names and dates are matched on a
//! best-effort basis. The first occurrence of each field wins.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static RE_DOMAIN_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:Domain Name|domain)\s*:\s*(.+)$").unwrap());
static RE_REGISTRAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:Registrar|Sponsoring Registrar|registrar name)\s*:\s*(.+)$").unwrap()
});
static RE_CREATION_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:Creation Date|Created On|Created Date|Registered on|Registration Time|Domain Registration Date|created|registered)\s*:\s*(.+)$",
    )
    .unwrap()
});
static RE_EXPIRATION_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:Registry Expiry Date|Registrar Registration Expiration Date|Expiry Date|Expiration Date|Expires On|Expiration Time|Domain Expiration Date|paid-till|expires|expire)\s*:\s*(.+)$",
    )
    .unwrap()
});
static RE_IGNORE_PREFIXES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:%|#|>>>|NOTE:|URL of the ICANN)").unwrap());

/// Date/time layouts tried in order after RFC 3339.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%dT%H:%M:%S%.fZ",
    "%Y-%m-%dT%H:%M:%SZ",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y.%m.%d %H:%M:%S",
    "%d-%b-%Y %H:%M:%S",
];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%b-%Y", "%d.%m.%Y", "%Y/%m/%d", "%Y.%m.%d"];

/// Registration metadata used by the domain features.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhoisRecord {
    pub domain_name: Option<String>,
    pub registrar: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
    pub expiration_date: Option<DateTime<Utc>>,
}

impl WhoisRecord {
    /// True if the text contained anything that looks like a registration.
    pub fn is_meaningful(&self) -> bool {
        self.domain_name.is_some()
            || self.registrar.is_some()
            || self.creation_date.is_some()
            || self.expiration_date.is_some()
    }
}

fn capture(re: &Regex, line: &str) -> Option<String> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}

pub fn parse_whois_text(raw: &str) -> WhoisRecord {
    let mut record = WhoisRecord::default();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() || RE_IGNORE_PREFIXES.is_match(line) {
            continue;
        }
        if record.domain_name.is_none() {
            if let Some(v) = capture(&RE_DOMAIN_NAME, line) {
                record.domain_name = Some(v.to_lowercase());
                continue;
            }
        }
        if record.registrar.is_none() {
            if let Some(v) = capture(&RE_REGISTRAR, line) {
                record.registrar = Some(v);
                continue;
            }
        }
        if record.creation_date.is_none() {
            if let Some(v) = capture(&RE_CREATION_DATE, line) {
                record.creation_date = parse_whois_date(&v);
                continue;
            }
        }
        if record.expiration_date.is_none() {
            if let Some(v) = capture(&RE_EXPIRATION_DATE, line) {
                record.expiration_date = parse_whois_date(&v);
            }
        }
    }

    record
}

/// Parses one WHOIS date value. Trailing zone names or comments are dropped
/// if the full value does not parse.
pub fn parse_whois_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    parse_date_exact(value).or_else(|| {
        let first = value.split_whitespace().next()?;
        if first == value {
            return None;
        }
        parse_date_exact(first)
    })
}

fn parse_date_exact(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
        }
    }
    None
}
