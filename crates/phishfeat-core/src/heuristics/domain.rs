//! Registration-date checks and the domain feature group.

use chrono::{DateTime, Utc};

use super::flag;
use crate::whois::WhoisRecord;

/// Six 30-day months.
pub const SHORT_SPAN_DAYS: i64 = 6 * 30;

/// `DNS_Record`, `Web_Traffic`, `Domain_Age`, `Domain_End`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainFeatures {
    pub dns_record: u32,
    pub web_traffic: u32,
    pub domain_age: u32,
    pub domain_end: u32,
}

impl DomainFeatures {
    /// Features for a successful WHOIS lookup.
    pub fn from_record(record: &WhoisRecord, web_traffic: u32, now: DateTime<Utc>) -> Self {
        Self {
            dns_record: 0,
            web_traffic,
            domain_age: domain_age(record),
            domain_end: domain_end(record, now),
        }
    }

    /// Defaults when the WHOIS lookup failed.
    pub fn unavailable() -> Self {
        Self {
            dns_record: 1,
            web_traffic: 1,
            domain_age: 1,
            domain_end: 1,
        }
    }
}

/// 1 if the registration span (creation to expiration) is under six months
/// or either date is missing.
pub fn domain_age(record: &WhoisRecord) -> u32 {
    match (record.creation_date, record.expiration_date) {
        (Some(created), Some(expires)) => {
            flag((expires - created).num_days() < SHORT_SPAN_DAYS)
        }
        _ => 1,
    }
}

/// 1 if the domain expires within six months of `now` (or already has), or
/// the expiration date is missing.
pub fn domain_end(record: &WhoisRecord, now: DateTime<Utc>) -> u32 {
    match record.expiration_date {
        Some(expires) => flag((expires - now).num_days() < SHORT_SPAN_DAYS),
        None => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    fn record(created: Option<DateTime<Utc>>, expires: Option<DateTime<Utc>>) -> WhoisRecord {
        WhoisRecord {
            domain_name: Some("example.com".to_string()),
            creation_date: created,
            expiration_date: expires,
            ..WhoisRecord::default()
        }
    }

    #[test]
    fn long_lived_domain() {
        let r = record(
            Some(now() - Duration::days(3650)),
            Some(now() + Duration::days(365)),
        );
        assert_eq!(domain_age(&r), 0);
        assert_eq!(domain_end(&r, now()), 0);
    }

    #[test]
    fn short_registration_span() {
        let r = record(Some(now() - Duration::days(10)), Some(now() + Duration::days(100)));
        assert_eq!(domain_age(&r), 1);
        assert_eq!(domain_end(&r, now()), 1);
    }

    #[test]
    fn span_boundary() {
        let created = now();
        let r = record(Some(created), Some(created + Duration::days(SHORT_SPAN_DAYS)));
        assert_eq!(domain_age(&r), 0);
        let r = record(Some(created), Some(created + Duration::days(SHORT_SPAN_DAYS - 1)));
        assert_eq!(domain_age(&r), 1);
    }

    #[test]
    fn expired_domain_is_flagged() {
        let r = record(Some(now() - Duration::days(800)), Some(now() - Duration::days(1)));
        assert_eq!(domain_end(&r, now()), 1);
    }

    #[test]
    fn missing_dates_fail_open() {
        let r = record(None, Some(now() + Duration::days(900)));
        assert_eq!(domain_age(&r), 1);
        assert_eq!(domain_end(&r, now()), 0);
        let r = record(Some(now()), None);
        assert_eq!(domain_age(&r), 1);
        assert_eq!(domain_end(&r, now()), 1);
    }

    #[test]
    fn group_constructors() {
        let r = record(
            Some(now() - Duration::days(3650)),
            Some(now() + Duration::days(365)),
        );
        let f = DomainFeatures::from_record(&r, 1, now());
        assert_eq!((f.dns_record, f.web_traffic, f.domain_age, f.domain_end), (0, 1, 0, 0));
        assert_eq!(DomainFeatures::unavailable().dns_record, 1);
    }
}
