//! The `access_token` cookie.
//!
//! Browsers get the access token as an HttpOnly cookie alongside the JSON
//! body, so the frontend never has to store it in script-visible storage.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Build the `Set-Cookie` value carrying a freshly issued access token.
pub fn build_access_cookie(token: &str, max_age_secs: i64, secure: bool) -> String {
    let mut cookie = format!(
        "{ACCESS_TOKEN_COOKIE}={token}; HttpOnly; Path=/; SameSite=Lax; Max-Age={max_age_secs}"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value that expires the cookie immediately.
pub fn clear_access_cookie(secure: bool) -> String {
    build_access_cookie("", 0, secure)
}

/// Find the access token among the request's `Cookie` headers.
pub fn access_token_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == ACCESS_TOKEN_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}
