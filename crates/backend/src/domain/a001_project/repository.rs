use chrono::Utc;
use contracts::domain::a001_project::aggregate::{Project, ProjectId};
use contracts::domain::common::EntityMetadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_project")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub tagline: String,
    pub url: Option<String>,
    pub confession: String,
    pub logo_url: Option<String>,
    /// JSON array of stored-file URLs
    pub gallery_urls: String,
    /// JSON array of tag strings
    pub tags: String,
    pub failure_type: String,
    pub author: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Project {
    type Error = anyhow::Error;

    // A row whose id does not parse must never surface with a fabricated
    // id; the detail link would point at nothing.
    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let uuid = Uuid::parse_str(&m.id)
            .map_err(|e| anyhow::anyhow!("corrupt project id {:?}: {}", m.id, e))?;
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
        };

        Ok(Project {
            id: ProjectId(uuid),
            title: m.title,
            tagline: m.tagline,
            url: m.url,
            confession: m.confession,
            logo_url: m.logo_url,
            gallery_urls: serde_json::from_str(&m.gallery_urls).unwrap_or_default(),
            tags: serde_json::from_str(&m.tags).unwrap_or_default(),
            failure_type: m.failure_type,
            author: m.author,
            metadata,
        })
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn insert(project: &Project) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(project.to_string_id()),
        title: Set(project.title.clone()),
        tagline: Set(project.tagline.clone()),
        url: Set(project.url.clone()),
        confession: Set(project.confession.clone()),
        logo_url: Set(project.logo_url.clone()),
        gallery_urls: Set(serde_json::to_string(&project.gallery_urls)?),
        tags: Set(serde_json::to_string(&project.tags)?),
        failure_type: Set(project.failure_type.clone()),
        author: Set(project.author.clone()),
        is_deleted: Set(project.metadata.is_deleted),
        created_at: Set(Some(project.metadata.created_at)),
        updated_at: Set(Some(project.metadata.updated_at)),
    };
    Entity::insert(active).exec(conn()).await?;
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Project>> {
    let found = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    found.map(Project::try_from).transpose()
}

/// Most recently confessed projects, newest first. Corrupt rows are
/// logged and skipped rather than failing the whole listing.
pub async fn list_recent(limit: u64) -> anyhow::Result<Vec<Project>> {
    let items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_desc(Column::CreatedAt)
        .limit(limit)
        .all(conn())
        .await?;
    Ok(items
        .into_iter()
        .filter_map(|m| match Project::try_from(m) {
            Ok(project) => Some(project),
            Err(e) => {
                tracing::warn!("skipping unreadable project row: {}", e);
                None
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str) -> Model {
        Model {
            id: id.to_string(),
            title: "Fridge Poet".to_string(),
            tagline: "Magnetic poetry, but an app".to_string(),
            url: None,
            confession: "Nobody logged in.".to_string(),
            logo_url: None,
            gallery_urls: "[\"/uploads/a.png\"]".to_string(),
            tags: "[\"iot\"]".to_string(),
            failure_type: "no-users".to_string(),
            author: "ada".to_string(),
            is_deleted: false,
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
        }
    }

    #[test]
    fn valid_row_converts() {
        let id = Uuid::new_v4();
        let project = Project::try_from(row(&id.to_string())).expect("convert");
        assert_eq!(project.id.0, id);
        assert_eq!(project.gallery_urls, vec!["/uploads/a.png"]);
        assert_eq!(project.tags, vec!["iot"]);
    }

    #[test]
    fn corrupt_id_is_an_error_not_a_fresh_id() {
        let err = Project::try_from(row("not-a-uuid")).unwrap_err();
        assert!(err.to_string().contains("not-a-uuid"));
    }
}
