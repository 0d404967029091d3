//! Thin client for the external upload service.
//!
//! Takes an ordered list of browser file handles and returns one stored-file
//! URL per input, in the same order. Storage itself lives behind the
//! deployment's /api/upload endpoint.

use crate::shared::api_utils::api_url;
use contracts::shared::upload::UploadResponse;
use gloo_net::http::Request;

pub async fn upload_files(files: Vec<web_sys::File>) -> Result<Vec<String>, String> {
    let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    for file in &files {
        form.append_with_blob_and_filename("files", file, &file.name())
            .map_err(|e| format!("{e:?}"))?;
    }

    let response = Request::post(&api_url("/api/upload"))
        .body(form)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Upload failed: {}", response.status()));
    }

    let parsed = response
        .json::<UploadResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if parsed.urls.len() != files.len() {
        return Err(format!(
            "Upload returned {} urls for {} files",
            parsed.urls.len(),
            files.len()
        ));
    }

    Ok(parsed.urls)
}
