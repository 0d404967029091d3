use crate::domain::common::{AggregateId, EntityMetadata};
use crate::enums::failure_type::FailureType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Field caps
// ============================================================================

/// Maximum title length in characters
pub const TITLE_MAX_CHARS: usize = 100;
/// Maximum tagline length in characters
pub const TAGLINE_MAX_CHARS: usize = 60;
/// Maximum confession length in characters
pub const CONFESSION_MAX_CHARS: usize = 2000;
/// Maximum number of tags per project
pub const MAX_TAGS: usize = 5;
/// Maximum number of gallery images per project
pub const MAX_GALLERY_IMAGES: usize = 5;

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a submitted project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub Uuid);

impl ProjectId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ProjectId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProjectId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A failed project confessed by a community member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,

    pub title: String,
    pub tagline: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    pub confession: String,

    #[serde(rename = "logoUrl")]
    pub logo_url: Option<String>,

    #[serde(rename = "galleryUrls")]
    pub gallery_urls: Vec<String>,

    pub tags: Vec<String>,

    #[serde(rename = "failureType")]
    pub failure_type: String,

    /// Username of the submitter
    pub author: String,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Project {
    /// Build a new project from an accepted submission
    pub fn from_submission(request: SubmitProjectRequest, author: String) -> Self {
        Self {
            id: ProjectId::new_v4(),
            title: request.title,
            tagline: request.tagline,
            url: request.url,
            confession: request.confession,
            logo_url: request.logo_url,
            gallery_urls: request.gallery_urls,
            tags: request.tags,
            failure_type: request.failure_type,
            author,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn summary(&self) -> ProjectSummary {
        ProjectSummary {
            id: self.id.as_string(),
            title: self.title.clone(),
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Wire payload for POST /api/projects/submit
///
/// `url` is omitted from JSON entirely when absent; `logoUrl` is always
/// present and serializes as null when there is no logo.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SubmitProjectRequest {
    pub title: String,
    pub tagline: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    pub confession: String,

    #[serde(rename = "logoUrl")]
    pub logo_url: Option<String>,

    #[serde(rename = "galleryUrls")]
    pub gallery_urls: Vec<String>,

    pub tags: Vec<String>,

    #[serde(rename = "failureType")]
    pub failure_type: String,
}

impl SubmitProjectRequest {
    /// Authoritative validation, performed server-side.
    ///
    /// Collects every violation instead of stopping at the first one;
    /// the client surfaces only the first message.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push("Title is required".to_string());
        } else if self.title.chars().count() > TITLE_MAX_CHARS {
            errors.push(format!("Title must be at most {} characters", TITLE_MAX_CHARS));
        }

        if self.tagline.trim().is_empty() {
            errors.push("Tagline is required".to_string());
        } else if self.tagline.chars().count() > TAGLINE_MAX_CHARS {
            errors.push(format!(
                "Tagline must be at most {} characters",
                TAGLINE_MAX_CHARS
            ));
        }

        if self.confession.trim().is_empty() {
            errors.push("Confession is required".to_string());
        } else if self.confession.chars().count() > CONFESSION_MAX_CHARS {
            errors.push(format!(
                "Confession must be at most {} characters",
                CONFESSION_MAX_CHARS
            ));
        }

        if self.tags.len() > MAX_TAGS {
            errors.push(format!("At most {} tags are allowed", MAX_TAGS));
        }

        if self.gallery_urls.len() > MAX_GALLERY_IMAGES {
            errors.push(format!(
                "At most {} gallery images are allowed",
                MAX_GALLERY_IMAGES
            ));
        }

        // The failure type is optional, but when given it must be a known code
        if !self.failure_type.is_empty() && FailureType::from_code(&self.failure_type).is_none() {
            errors.push(format!("Unknown failure type: {}", self.failure_type));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Minimal projection of a project returned to the submitting client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectSummary {
    pub id: String,
    pub title: String,
}

/// Wire response of POST /api/projects/submit
///
/// The `success` flag is the contract: HTTP status stays 200 for
/// validation rejections so the client can read the error list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitProjectResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectSummary>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl SubmitProjectResponse {
    pub fn created(project: ProjectSummary) -> Self {
        Self {
            success: true,
            project: Some(project),
            errors: None,
        }
    }

    pub fn rejected(errors: Vec<String>) -> Self {
        Self {
            success: false,
            project: None,
            errors: Some(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> SubmitProjectRequest {
        SubmitProjectRequest {
            title: "AI Recipe Bot".to_string(),
            tagline: "Only makes sandwiches".to_string(),
            url: None,
            confession: "It just makes PB&J".to_string(),
            logo_url: None,
            gallery_urls: vec![],
            tags: vec!["ai".to_string(), "fail".to_string()],
            failure_type: "abandoned".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_missing_required_fields_collects_all_errors() {
        let request = SubmitProjectRequest::default();
        let errors = request.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0], "Title is required");
        assert_eq!(errors[1], "Tagline is required");
        assert_eq!(errors[2], "Confession is required");
    }

    #[test]
    fn test_length_caps() {
        let mut request = valid_request();
        request.title = "x".repeat(TITLE_MAX_CHARS + 1);
        request.tagline = "x".repeat(TAGLINE_MAX_CHARS + 1);
        request.confession = "x".repeat(CONFESSION_MAX_CHARS + 1);
        let errors = request.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("100"));
        assert!(errors[1].contains("60"));
        assert!(errors[2].contains("2000"));
    }

    #[test]
    fn test_tag_count_cap() {
        let mut request = valid_request();
        request.tags = (0..6).map(|i| format!("tag{}", i)).collect();
        let errors = request.validate().unwrap_err();
        assert_eq!(errors, vec!["At most 5 tags are allowed".to_string()]);
    }

    #[test]
    fn test_unknown_failure_type_rejected() {
        let mut request = valid_request();
        request.failure_type = "sabotage".to_string();
        let errors = request.validate().unwrap_err();
        assert_eq!(errors, vec!["Unknown failure type: sabotage".to_string()]);
    }

    #[test]
    fn test_empty_failure_type_accepted() {
        let mut request = valid_request();
        request.failure_type = String::new();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_wire_shape_omits_url_and_nulls_logo() {
        // Exact wire body for a submission without url or images
        let request = valid_request();
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": "AI Recipe Bot",
                "tagline": "Only makes sandwiches",
                "confession": "It just makes PB&J",
                "logoUrl": null,
                "galleryUrls": [],
                "tags": ["ai", "fail"],
                "failureType": "abandoned",
            })
        );
        assert!(value.get("url").is_none());
    }

    #[test]
    fn test_wire_shape_with_url_and_images() {
        let mut request = valid_request();
        request.url = Some("https://my-failed-project.com".to_string());
        request.logo_url = Some("/uploads/logo.png".to_string());
        request.gallery_urls = vec!["/uploads/a.png".to_string()];
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["url"], "https://my-failed-project.com");
        assert_eq!(value["logoUrl"], "/uploads/logo.png");
        assert_eq!(value["galleryUrls"][0], "/uploads/a.png");
    }

    #[test]
    fn test_request_roundtrip_without_url() {
        let request = valid_request();
        let json = serde_json::to_string(&request).unwrap();
        let back: SubmitProjectRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn test_response_helpers() {
        let ok = SubmitProjectResponse::created(ProjectSummary {
            id: "abc".to_string(),
            title: "t".to_string(),
        });
        assert!(ok.success);
        assert!(ok.errors.is_none());

        let bad = SubmitProjectResponse::rejected(vec!["Title too short".to_string()]);
        assert!(!bad.success);
        assert_eq!(bad.errors.unwrap()[0], "Title too short");
    }
}
