//! HTTP GET with redirect tracking.
//!
//! Uses the curl crate (libcurl). Redirects are followed and counted so
//! callers can inspect the hop count; the body is decoded lossily as UTF-8.

mod error;

pub use error::FetchError;

use std::str;
use std::time::Duration;

use crate::url_model::{is_fetchable_scheme, split_url};

/// Upper bound on followed redirects.
const MAX_REDIRECTS: u32 = 30;

/// Per-request settings shared by page and traffic lookups.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    /// Applies both to connecting and to the whole transfer.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            user_agent: concat!("phishfeat/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// A fetched response after following redirects.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Status of the final response.
    pub status: u32,
    pub body: String,
    /// Number of redirect hops curl followed.
    pub redirect_count: u32,
    /// URL of the final response, if curl reported one.
    pub effective_url: Option<String>,
}

/// Performs a GET and returns the final response, whatever its status.
///
/// Only `http` and `https` URLs are requested; anything else fails without
/// touching the network. Runs in the current thread; call from
/// `spawn_blocking` if used from async code.
pub fn fetch_page(url: &str, opts: &HttpOptions) -> Result<FetchedPage, FetchError> {
    let scheme = split_url(url).scheme;
    if !is_fetchable_scheme(&scheme) {
        return Err(FetchError::UnsupportedScheme { scheme });
    }

    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(MAX_REDIRECTS)?;
    easy.connect_timeout(opts.timeout)?;
    easy.timeout(opts.timeout)?;
    easy.useragent(&opts.user_agent)?;
    // Empty string: offer every encoding libcurl can decode.
    easy.accept_encoding("")?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    let redirect_count = easy.redirect_count()?;
    let effective_url = easy.effective_url()?.map(str::to_string);

    Ok(FetchedPage {
        status,
        body: String::from_utf8_lossy(&body).into_owned(),
        redirect_count,
        effective_url,
    })
}
