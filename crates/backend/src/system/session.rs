use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use axum::Json;
use contracts::system::session::SessionUser;

use crate::shared::config;

/// Authentication happens upstream; the reverse proxy forwards the
/// signed-in identity in these headers.
const USER_HEADER: &str = "x-forwarded-user";
const NAME_HEADER: &str = "x-forwarded-name";

fn user_from_headers(headers: &HeaderMap) -> Option<SessionUser> {
    let username = headers
        .get(USER_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())?;

    let display_name = headers
        .get(NAME_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string);

    Some(SessionUser {
        username: username.to_string(),
        display_name,
        avatar_url: None,
    })
}

/// Proxy headers win; `session.dev_user` in config.toml gives local
/// development a session without a proxy in front.
pub fn resolve(headers: &HeaderMap) -> Option<SessionUser> {
    if let Some(user) = user_from_headers(headers) {
        return Some(user);
    }

    config::get()
        .session
        .dev_user
        .as_ref()
        .map(|username| SessionUser {
            username: username.clone(),
            display_name: None,
            avatar_url: None,
        })
}

/// GET /api/session
pub async fn current_session(headers: HeaderMap) -> Result<Json<SessionUser>, StatusCode> {
    resolve(&headers).map(Json).ok_or(StatusCode::UNAUTHORIZED)
}

/// Middleware for routes that require a signed-in user. The resolved
/// user lands in request extensions for the handler to extract.
pub async fn require_session(
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let user = resolve(req.headers()).ok_or(StatusCode::UNAUTHORIZED)?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn reads_user_and_name_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_HEADER, HeaderValue::from_static("ada"));
        headers.insert(NAME_HEADER, HeaderValue::from_static("Ada Lovelace"));

        let user = user_from_headers(&headers).expect("user");
        assert_eq!(user.username, "ada");
        assert_eq!(user.display_name.as_deref(), Some("Ada Lovelace"));
        assert!(user.avatar_url.is_none());
    }

    #[test]
    fn missing_or_blank_user_header_yields_none() {
        assert!(user_from_headers(&HeaderMap::new()).is_none());

        let mut headers = HeaderMap::new();
        headers.insert(USER_HEADER, HeaderValue::from_static("   "));
        assert!(user_from_headers(&headers).is_none());
    }

    #[test]
    fn name_header_alone_is_not_a_session() {
        let mut headers = HeaderMap::new();
        headers.insert(NAME_HEADER, HeaderValue::from_static("Ada Lovelace"));
        assert!(user_from_headers(&headers).is_none());
    }
}
