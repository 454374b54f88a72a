//! Access-token cookie handling.
//!
//! The token travels as url-encoded JSON in a session cookie, the same
//! shape the OAuth callback received it in.

use axum::http::{header, HeaderMap};
use uber_oauth::AccessToken;

/// Cookie holding the serialized access token.
pub const ACCESS_TOKEN_COOKIE: &str = "uber_access_token";

/// Read the access token from the request cookies.
///
/// Anything that fails to parse counts as "not connected".
pub fn access_token(headers: &HeaderMap) -> Option<AccessToken> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    let value = cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == ACCESS_TOKEN_COOKIE).then_some(value)
    })?;

    let json = urlencoding::decode(value).ok()?;
    serde_json::from_str(&json).ok()
}

/// Build the `Set-Cookie` value that stores the access token.
pub fn store_access_token(token: &AccessToken) -> serde_json::Result<String> {
    let json = serde_json::to_string(token)?;
    Ok(format!(
        "{}={}; Path=/; HttpOnly",
        ACCESS_TOKEN_COOKIE,
        urlencoding::encode(&json)
    ))
}
