//! Page fetch error type.

use thiserror::Error;

/// Why a page could not be fetched. All variants map to the same feature
/// defaults; the distinction only feeds logs.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Scheme is not http/https (includes scheme-less input).
    #[error("unsupported scheme {scheme:?}")]
    UnsupportedScheme { scheme: String },
    /// Curl reported an error (timeout, DNS, connection, TLS, ...).
    #[error("{0}")]
    Curl(#[from] curl::Error),
}

impl FetchError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Curl(e) if e.is_operation_timedout())
    }
}
