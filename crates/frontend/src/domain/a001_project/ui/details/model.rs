use contracts::domain::a001_project::aggregate::Project;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

pub async fn fetch_by_id(id: String) -> Result<Project, String> {
    let response = Request::get(&api_url(&format!("/api/projects/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() == 404 {
        return Err("Project not found".to_string());
    }
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Project>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
