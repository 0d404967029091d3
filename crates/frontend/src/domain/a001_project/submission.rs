//! Submission workflow for a failed-project confession.
//!
//! The draft and the submission pipeline are kept free of browser types:
//! the upload service and the submission endpoint are injected as async
//! closures, so the whole workflow runs under plain `cargo test`.

use contracts::domain::a001_project::aggregate::{
    SubmitProjectRequest, SubmitProjectResponse, MAX_TAGS,
};
use std::future::Future;

/// Message shown when the server gives us nothing better
pub const GENERIC_FAILURE_MESSAGE: &str = "Submission failed. Please try again.";

/// The in-memory, unsaved form state for the lifetime of the page visit.
///
/// File attachments are not part of the draft; they live next to it in the
/// view model, because browser file handles never cross into this module.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub tagline: String,
    pub url: String,
    pub confession: String,
    /// Insertion-ordered; duplicates are not prevented
    pub tags: Vec<String>,
    /// Transient input buffer for the tag entry field
    pub current_tag: String,
    pub failure_type: String,
}

impl ProjectDraft {
    /// Append the trimmed tag buffer and clear it.
    ///
    /// Silent no-op when the buffer is whitespace-only or the tag cap
    /// is already reached.
    pub fn add_tag(&mut self) {
        let tag = self.current_tag.trim();
        if !tag.is_empty() && self.tags.len() < MAX_TAGS {
            self.tags.push(tag.to_string());
            self.current_tag.clear();
        }
    }

    /// Remove every occurrence of the given tag
    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    /// Advisory gate for the submit control; the server stays the
    /// source of truth for validation.
    pub fn is_submittable(&self) -> bool {
        !self.title.is_empty() && !self.tagline.is_empty() && !self.confession.is_empty()
    }

    /// Build the wire payload. An empty url field is dropped entirely.
    pub fn to_request(&self, logo_url: Option<String>, gallery_urls: Vec<String>) -> SubmitProjectRequest {
        SubmitProjectRequest {
            title: self.title.clone(),
            tagline: self.tagline.clone(),
            url: if self.url.trim().is_empty() {
                None
            } else {
                Some(self.url.clone())
            },
            confession: self.confession.clone(),
            logo_url,
            gallery_urls,
            tags: self.tags.clone(),
            failure_type: self.failure_type.clone(),
        }
    }
}

/// Terminal result of one submission attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The server accepted the submission
    Created { id: String },
    /// The server rejected it; `message` is the first reported error
    Rejected { message: String },
    /// An upload or transport step threw; detail is not user-facing
    Failed { message: String },
}

/// Run the ordered submission pipeline: logo upload, gallery upload,
/// then the JSON POST. Steps run sequentially, never concurrently; any
/// failed step aborts the rest. Already-uploaded files are not cleaned
/// up on a later failure (the store is garbage-collected externally).
///
/// When several logo files are attached only the first stored reference
/// is kept.
pub async fn run_submission<F, Up, UpFut, Sub, SubFut>(
    draft: &ProjectDraft,
    logo_files: Vec<F>,
    gallery_files: Vec<F>,
    upload: Up,
    submit: Sub,
) -> SubmitOutcome
where
    Up: Fn(Vec<F>) -> UpFut,
    UpFut: Future<Output = Result<Vec<String>, String>>,
    Sub: FnOnce(SubmitProjectRequest) -> SubFut,
    SubFut: Future<Output = Result<SubmitProjectResponse, String>>,
{
    let mut logo_url = None;
    if !logo_files.is_empty() {
        match upload(logo_files).await {
            Ok(urls) => logo_url = urls.into_iter().next(),
            Err(e) => {
                log::error!("logo upload failed: {}", e);
                return SubmitOutcome::Failed {
                    message: GENERIC_FAILURE_MESSAGE.to_string(),
                };
            }
        }
    }

    let mut gallery_urls = Vec::new();
    if !gallery_files.is_empty() {
        match upload(gallery_files).await {
            Ok(urls) => gallery_urls = urls,
            Err(e) => {
                log::error!("gallery upload failed: {}", e);
                return SubmitOutcome::Failed {
                    message: GENERIC_FAILURE_MESSAGE.to_string(),
                };
            }
        }
    }

    let request = draft.to_request(logo_url, gallery_urls);
    match submit(request).await {
        Ok(response) if response.success => match response.project {
            Some(project) => SubmitOutcome::Created { id: project.id },
            None => {
                log::error!("server reported success without a project");
                SubmitOutcome::Failed {
                    message: GENERIC_FAILURE_MESSAGE.to_string(),
                }
            }
        },
        Ok(response) => SubmitOutcome::Rejected {
            message: response
                .errors
                .and_then(|errors| errors.into_iter().next())
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
        },
        Err(e) => {
            log::error!("submit request failed: {}", e);
            SubmitOutcome::Failed {
                message: GENERIC_FAILURE_MESSAGE.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_project::aggregate::{ProjectSummary, SubmitProjectResponse};
    use std::cell::{Cell, RefCell};
    use std::future::ready;
    use std::rc::Rc;

    fn draft() -> ProjectDraft {
        ProjectDraft {
            title: "AI Recipe Bot".to_string(),
            tagline: "Only makes sandwiches".to_string(),
            url: String::new(),
            confession: "It just makes PB&J".to_string(),
            tags: vec!["ai".to_string(), "fail".to_string()],
            current_tag: String::new(),
            failure_type: "abandoned".to_string(),
        }
    }

    #[test]
    fn test_add_tag_trims_and_clears_buffer() {
        let mut d = ProjectDraft::default();
        d.current_tag = "  rust  ".to_string();
        d.add_tag();
        assert_eq!(d.tags, vec!["rust"]);
        assert_eq!(d.current_tag, "");
    }

    #[test]
    fn test_add_tag_whitespace_only_is_noop() {
        let mut d = ProjectDraft::default();
        d.current_tag = "   \t ".to_string();
        d.add_tag();
        assert!(d.tags.is_empty());
        // the buffer is left alone on a no-op
        assert_eq!(d.current_tag, "   \t ");
    }

    #[test]
    fn test_add_tag_at_cap_is_noop() {
        let mut d = ProjectDraft::default();
        d.tags = (0..5).map(|i| format!("t{}", i)).collect();
        d.current_tag = "one-more".to_string();
        d.add_tag();
        assert_eq!(d.tags.len(), 5);
        assert_eq!(d.current_tag, "one-more");
    }

    #[test]
    fn test_add_tag_allows_duplicates() {
        let mut d = ProjectDraft::default();
        d.current_tag = "rust".to_string();
        d.add_tag();
        d.current_tag = "rust".to_string();
        d.add_tag();
        assert_eq!(d.tags, vec!["rust", "rust"]);
    }

    #[test]
    fn test_remove_tag_removes_all_occurrences_and_is_idempotent() {
        let mut d = ProjectDraft::default();
        d.tags = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        d.remove_tag("a");
        assert_eq!(d.tags, vec!["b"]);
        d.remove_tag("a");
        assert_eq!(d.tags, vec!["b"]);
    }

    #[test]
    fn test_is_submittable_requires_title_tagline_confession() {
        let mut d = draft();
        assert!(d.is_submittable());
        d.confession.clear();
        assert!(!d.is_submittable());
    }

    #[test]
    fn test_to_request_drops_empty_url() {
        let request = draft().to_request(None, vec![]);
        assert_eq!(request.url, None);
        assert_eq!(request.logo_url, None);
        assert!(request.gallery_urls.is_empty());

        let mut d = draft();
        d.url = "https://my-failed-project.com".to_string();
        let request = d.to_request(Some("/logo.png".to_string()), vec!["/a.png".to_string()]);
        assert_eq!(request.url.as_deref(), Some("https://my-failed-project.com"));
        assert_eq!(request.logo_url.as_deref(), Some("/logo.png"));
    }

    #[tokio::test]
    async fn test_no_files_never_calls_upload() {
        let upload_calls = Rc::new(Cell::new(0));
        let calls = upload_calls.clone();
        let sent = Rc::new(RefCell::new(None));
        let sent_inner = sent.clone();

        let outcome = run_submission(
            &draft(),
            Vec::<String>::new(),
            Vec::<String>::new(),
            move |_files| {
                calls.set(calls.get() + 1);
                ready(Ok(vec![]))
            },
            move |request| {
                *sent_inner.borrow_mut() = Some(request);
                ready(Ok(SubmitProjectResponse::created(ProjectSummary {
                    id: "p-1".to_string(),
                    title: "AI Recipe Bot".to_string(),
                })))
            },
        )
        .await;

        assert_eq!(upload_calls.get(), 0);
        assert_eq!(
            outcome,
            SubmitOutcome::Created {
                id: "p-1".to_string()
            }
        );
        let request = sent.borrow().clone().unwrap();
        assert_eq!(request.logo_url, None);
        assert!(request.gallery_urls.is_empty());
    }

    #[tokio::test]
    async fn test_logo_then_gallery_then_submit() {
        let upload_batches = Rc::new(RefCell::new(Vec::new()));
        let batches = upload_batches.clone();
        let sent = Rc::new(RefCell::new(None));
        let sent_inner = sent.clone();

        let outcome = run_submission(
            &draft(),
            vec!["logo.png".to_string()],
            vec!["a.png".to_string(), "b.png".to_string()],
            move |files: Vec<String>| {
                batches.borrow_mut().push(files.clone());
                ready(Ok(files.iter().map(|f| format!("/uploads/{}", f)).collect()))
            },
            move |request| {
                *sent_inner.borrow_mut() = Some(request);
                ready(Ok(SubmitProjectResponse::created(ProjectSummary {
                    id: "p-2".to_string(),
                    title: "AI Recipe Bot".to_string(),
                })))
            },
        )
        .await;

        assert_eq!(
            outcome,
            SubmitOutcome::Created {
                id: "p-2".to_string()
            }
        );
        // logo batch strictly before the gallery batch
        assert_eq!(
            *upload_batches.borrow(),
            vec![
                vec!["logo.png".to_string()],
                vec!["a.png".to_string(), "b.png".to_string()],
            ]
        );
        let request = sent.borrow().clone().unwrap();
        assert_eq!(request.logo_url.as_deref(), Some("/uploads/logo.png"));
        assert_eq!(request.gallery_urls, vec!["/uploads/a.png", "/uploads/b.png"]);
    }

    #[tokio::test]
    async fn test_only_first_logo_reference_is_used() {
        let outcome = run_submission(
            &draft(),
            vec!["one.png".to_string(), "two.png".to_string()],
            Vec::new(),
            |files: Vec<String>| {
                ready(Ok(files.iter().map(|f| format!("/uploads/{}", f)).collect()))
            },
            |request| {
                assert_eq!(request.logo_url.as_deref(), Some("/uploads/one.png"));
                ready(Ok(SubmitProjectResponse::created(ProjectSummary {
                    id: "p-3".to_string(),
                    title: "AI Recipe Bot".to_string(),
                })))
            },
        )
        .await;
        assert!(matches!(outcome, SubmitOutcome::Created { .. }));
    }

    #[tokio::test]
    async fn test_rejection_surfaces_first_error() {
        let outcome = run_submission(
            &draft(),
            Vec::<String>::new(),
            Vec::<String>::new(),
            |_files| ready(Ok(vec![])),
            |_request| {
                ready(Ok(SubmitProjectResponse::rejected(vec![
                    "Title too short".to_string(),
                    "Something else".to_string(),
                ])))
            },
        )
        .await;
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                message: "Title too short".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_rejection_without_errors_falls_back_to_generic() {
        let outcome = run_submission(
            &draft(),
            Vec::<String>::new(),
            Vec::<String>::new(),
            |_files| ready(Ok(vec![])),
            |_request| {
                ready(Ok(SubmitProjectResponse {
                    success: false,
                    project: None,
                    errors: None,
                }))
            },
        )
        .await;
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                message: GENERIC_FAILURE_MESSAGE.to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_upload_failure_skips_submit() {
        let submit_called = Rc::new(Cell::new(false));
        let called = submit_called.clone();

        let outcome = run_submission(
            &draft(),
            vec!["logo.png".to_string()],
            Vec::new(),
            |_files| ready(Err("disk full".to_string())),
            move |_request| {
                called.set(true);
                ready(Ok(SubmitProjectResponse::rejected(vec![])))
            },
        )
        .await;

        assert!(!submit_called.get());
        assert_eq!(
            outcome,
            SubmitOutcome::Failed {
                message: GENERIC_FAILURE_MESSAGE.to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_transport_failure_is_generic() {
        let outcome = run_submission(
            &draft(),
            Vec::<String>::new(),
            Vec::<String>::new(),
            |_files| ready(Ok(vec![])),
            |_request| ready(Err("connection refused".to_string())),
        )
        .await;
        assert_eq!(
            outcome,
            SubmitOutcome::Failed {
                message: GENERIC_FAILURE_MESSAGE.to_string()
            }
        );
    }
}
