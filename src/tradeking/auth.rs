//! OAuth 1.0a request signing for the TradeKing API

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha1::Sha1;
use url::Url;

use crate::common::errors::{Result, TradingError};

type HmacSha1 = Hmac<Sha1>;

/// RFC 3986 unreserved characters pass through; everything else is encoded
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Consumer and access-token credential pair for OAuth 1.0a
#[derive(Debug, Clone)]
pub struct OAuthCredentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

impl OAuthCredentials {
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.into(),
            access_token_secret: access_token_secret.into(),
        }
    }
}

fn percent(value: &str) -> String {
    utf8_percent_encode(value, OAUTH_ENCODE_SET).to_string()
}

/// Build the `Authorization: OAuth ...` header value for one request.
///
/// A fresh nonce and timestamp are generated per call.
pub fn authorization_header(
    credentials: &OAuthCredentials,
    method: &str,
    url: &str,
) -> Result<String> {
    let timestamp = chrono::Utc::now().timestamp();
    let nonce: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect();
    sign_request(credentials, method, url, timestamp, &nonce)
}

/// Sign a request with an explicit timestamp and nonce.
///
/// The signature base string covers the HTTP method, the base URL, and all
/// query plus oauth parameters, percent-encoded and sorted. XML request
/// bodies are not form-encoded and therefore excluded, per OAuth 1.0a.
pub fn sign_request(
    credentials: &OAuthCredentials,
    method: &str,
    url: &str,
    timestamp: i64,
    nonce: &str,
) -> Result<String> {
    let parsed = Url::parse(url)
        .map_err(|e| TradingError::Authentication(format!("invalid request URL {}: {}", url, e)))?;

    let host = parsed
        .host_str()
        .ok_or_else(|| TradingError::Authentication(format!("URL has no host: {}", url)))?;
    let base_url = match parsed.port() {
        Some(port) => format!("{}://{}:{}{}", parsed.scheme(), host, port, parsed.path()),
        None => format!("{}://{}{}", parsed.scheme(), host, parsed.path()),
    };

    let timestamp_str = timestamp.to_string();
    let mut params: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    params.push(("oauth_consumer_key".into(), credentials.consumer_key.clone()));
    params.push(("oauth_nonce".into(), nonce.to_string()));
    params.push(("oauth_signature_method".into(), "HMAC-SHA1".into()));
    params.push(("oauth_timestamp".into(), timestamp_str.clone()));
    params.push(("oauth_token".into(), credentials.access_token.clone()));
    params.push(("oauth_version".into(), "1.0".into()));

    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent(k), percent(v)))
        .collect();
    encoded.sort();
    let param_string = encoded
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    let base_string = format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent(&base_url),
        percent(&param_string)
    );

    let signing_key = format!(
        "{}&{}",
        percent(&credentials.consumer_secret),
        percent(&credentials.access_token_secret)
    );
    let mut mac = HmacSha1::new_from_slice(signing_key.as_bytes())
        .map_err(|e| TradingError::Authentication(format!("failed to create HMAC: {}", e)))?;
    mac.update(base_string.as_bytes());
    let signature = BASE64.encode(mac.finalize().into_bytes());

    Ok(format!(
        "OAuth oauth_consumer_key=\"{}\", oauth_nonce=\"{}\", oauth_signature=\"{}\", \
         oauth_signature_method=\"HMAC-SHA1\", oauth_timestamp=\"{}\", oauth_token=\"{}\", \
         oauth_version=\"1.0\"",
        percent(&credentials.consumer_key),
        percent(nonce),
        percent(&signature),
        timestamp_str,
        percent(&credentials.access_token),
    ))
}
