use axum::extract::Path;
use axum::http::StatusCode;
use axum::{Extension, Json};
use contracts::domain::a001_project::aggregate::{
    Project, SubmitProjectRequest, SubmitProjectResponse,
};
use contracts::system::session::SessionUser;
use uuid::Uuid;

use crate::domain::a001_project::service::{self, SubmitError};

/// POST /api/projects/submit
///
/// Validation rejections come back as 200 with `success: false` so the
/// client can read the error list from the body.
pub async fn submit(
    Extension(user): Extension<SessionUser>,
    Json(request): Json<SubmitProjectRequest>,
) -> Result<Json<SubmitProjectResponse>, StatusCode> {
    match service::submit(request, &user).await {
        Ok(project) => Ok(Json(SubmitProjectResponse::created(project.summary()))),
        Err(SubmitError::Validation(errors)) => {
            tracing::warn!(?errors, "submission rejected");
            Ok(Json(SubmitProjectResponse::rejected(errors)))
        }
        Err(SubmitError::Internal(e)) => {
            tracing::error!("failed to submit project: {:?}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/projects
pub async fn list_recent() -> Result<Json<Vec<Project>>, StatusCode> {
    service::list_recent(50).await.map(Json).map_err(|e| {
        tracing::error!("failed to list projects: {:?}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// GET /api/projects/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Project>, StatusCode> {
    let id = Uuid::parse_str(&id).map_err(|_| StatusCode::BAD_REQUEST)?;

    match service::get_by_id(id).await {
        Ok(Some(project)) => Ok(Json(project)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("failed to load project {}: {:?}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
