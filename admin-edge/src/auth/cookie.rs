//! `adminToken` cookie helpers

use http::HeaderMap;
use http::header::COOKIE;

pub const ADMIN_TOKEN_COOKIE: &str = "adminToken";

/// Value of the `adminToken` cookie, if the request carries one
pub fn read_token_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == ADMIN_TOKEN_COOKIE)
        .map(|(_, value)| value.trim_matches('"').to_string())
}

/// `Set-Cookie` value storing the token
pub fn token_cookie(token: &str) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        ADMIN_TOKEN_COOKIE, token
    )
}

/// `Set-Cookie` value expiring the token
pub fn clear_token_cookie() -> String {
    format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        ADMIN_TOKEN_COOKIE
    )
}

/// Whether `token` can be carried in a cookie value unquoted
pub fn is_cookie_safe(token: &str) -> bool {
    !token.is_empty()
        && token
            .bytes()
            .all(|b| b.is_ascii_graphic() && !matches!(b, b';' | b',' | b'"' | b'\\'))
}
