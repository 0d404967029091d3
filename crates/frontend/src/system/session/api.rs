use contracts::system::session::SessionUser;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Ask the session provider who is signed in.
///
/// 401 means "nobody" and is not an error; anything else unexpected is.
pub async fn fetch_session() -> Result<Option<SessionUser>, String> {
    let response = Request::get(&api_url("/api/session"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() == 401 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(format!("Session check failed: {}", response.status()));
    }

    response
        .json::<SessionUser>()
        .await
        .map(Some)
        .map_err(|e| format!("Failed to parse response: {}", e))
}
