use contracts::domain::a001_project::aggregate::{SubmitProjectRequest, SubmitProjectResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// POST the finished payload to the submission endpoint.
///
/// Validation rejections come back as HTTP 200 with `success: false`,
/// so the body is parsed regardless of status.
pub async fn submit_project(request: SubmitProjectRequest) -> Result<SubmitProjectResponse, String> {
    let response = Request::post(&api_url("/api/projects/submit"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    response
        .json::<SubmitProjectResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
