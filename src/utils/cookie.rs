//! Session cookie parsing and construction.
//!
//! The session token travels in an HttpOnly cookie. Parsing splits the
//! `Cookie` header on semicolons and picks the session entry, ignoring any
//! other cookies the client sends along.

use axum::http::HeaderMap;
use axum::http::header::COOKIE;

/// Name of the session cookie.
pub const AUTH_COOKIE: &str = "auth_token";

/// Extracts the session token from a request's `Cookie` header.
pub fn extract(headers: &HeaderMap) -> Option<String> {
    headers
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let mut parts = cookie.trim().splitn(2, '=');
                match (parts.next(), parts.next()) {
                    (Some(AUTH_COOKIE), Some(value)) if !value.is_empty() => {
                        Some(value.to_string())
                    }
                    _ => None,
                }
            })
        })
}

/// Builds the `Set-Cookie` value carrying a session token.
///
/// HttpOnly keeps the token away from scripts; SameSite=Strict keeps it off
/// cross-site requests. `secure` should be on whenever the service is
/// reached over HTTPS.
pub fn build(token: &str, max_age_seconds: i64, secure: bool) -> String {
    let mut cookie = format!(
        "{AUTH_COOKIE}={token}; HttpOnly; SameSite=Strict; Path=/; Max-Age={max_age_seconds}"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Builds the `Set-Cookie` value that clears the session cookie.
pub fn clear(secure: bool) -> String {
    build("", 0, secure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_the_session_cookie_among_others() {
        let headers = headers_with("theme=dark; auth_token=abc.def.ghi; lang=en");
        assert_eq!(extract(&headers).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn missing_or_empty_cookie_yields_none() {
        assert_eq!(extract(&HeaderMap::new()), None);
        assert_eq!(extract(&headers_with("theme=dark")), None);
        assert_eq!(extract(&headers_with("auth_token=")), None);
    }

    #[test]
    fn build_and_clear_shape_the_attributes() {
        let cookie = build("tok", 3600, false);
        assert_eq!(
            cookie,
            "auth_token=tok; HttpOnly; SameSite=Strict; Path=/; Max-Age=3600"
        );

        let secure = build("tok", 3600, true);
        assert!(secure.ends_with("; Secure"));

        let cleared = clear(false);
        assert!(cleared.starts_with("auth_token=;"));
        assert!(cleared.contains("Max-Age=0"));
    }
}
