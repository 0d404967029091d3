use contracts::domain::a001_project::aggregate::{Project, SubmitProjectRequest};
use contracts::system::session::SessionUser;
use thiserror::Error;
use uuid::Uuid;

use super::repository;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("validation failed")]
    Validation(Vec<String>),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Validates the request and persists a new project on behalf of `user`.
pub async fn submit(
    request: SubmitProjectRequest,
    user: &SessionUser,
) -> Result<Project, SubmitError> {
    request.validate().map_err(SubmitError::Validation)?;

    let project = Project::from_submission(request, user.label().to_string());
    repository::insert(&project).await?;

    tracing::info!(
        project_id = %project.to_string_id(),
        author = %project.author,
        "project submitted"
    );
    Ok(project)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Project>> {
    repository::get_by_id(id).await
}

pub async fn list_recent(limit: u64) -> anyhow::Result<Vec<Project>> {
    repository::list_recent(limit).await
}
