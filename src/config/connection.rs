//! Connection-string parsing
//!
//! `scheme://[api_key[:api_secret]@]cloud_name[/secure_distribution][?query]`

use crate::domain::{
    Configuration, API_KEY, API_SECRET, CLOUD_NAME, PRIVATE_CDN, SECURE_DISTRIBUTION,
};
use std::borrow::Cow;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConnectionStringError {
    #[error("invalid connection string: {source}")]
    Invalid {
        #[from]
        source: url::ParseError,
    },
}

/// Parse a connection-string into a configuration.
///
/// Query parameters are merged last and overwrite the keys derived from the
/// URL itself; a repeated parameter keeps its last value.
///
/// `api_secret` is everything after the first colon of the userinfo, so a
/// secret may contain `:` (percent-encoded or not). The cloud name keeps its
/// case as written. `secure_distribution` is the raw path without its leading
/// slash; unlike the userinfo it is not percent-decoded.
pub fn parse_connection_string(raw: &str) -> Result<Configuration, ConnectionStringError> {
    let url = Url::parse(raw.trim())?;
    let mut config = Configuration::new();

    if let Some(host) = url.host_str().filter(|h| !h.is_empty()) {
        config.insert(CLOUD_NAME, host);
    }

    let has_userinfo = !url.username().is_empty() || url.password().is_some();
    if has_userinfo {
        config.insert(API_KEY, decode(url.username()).into_owned());
        if let Some(secret) = url.password() {
            config.insert(API_SECRET, decode(secret).into_owned());
        }
    }

    let path = url.path();
    if path.is_empty() {
        config.insert(PRIVATE_CDN, false);
    } else {
        config.insert(PRIVATE_CDN, true);
        let distribution = path.strip_prefix('/').unwrap_or(path);
        config.insert(SECURE_DISTRIBUTION, distribution);
    }

    for (key, value) in url.query_pairs() {
        config.insert(key.into_owned(), value.into_owned());
    }

    Ok(config)
}

/// Percent-decode a URL component, keeping the raw text when it is not UTF-8.
fn decode(component: &str) -> Cow<'_, str> {
    urlencoding::decode(component).unwrap_or(Cow::Borrowed(component))
}
