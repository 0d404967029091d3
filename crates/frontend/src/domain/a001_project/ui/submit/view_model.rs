use super::model;
use crate::domain::a001_project::submission::{run_submission, ProjectDraft, SubmitOutcome};
use crate::shared::toast::ToastService;
use crate::shared::upload::upload_files;
use contracts::domain::a001_project::aggregate::{
    SubmitProjectRequest, SubmitProjectResponse, MAX_GALLERY_IMAGES,
};
use leptos::prelude::*;
use std::future::Future;
use std::rc::Rc;

/// ViewModel for the submit form
///
/// Browser file handles are kept in local-storage signals next to the
/// draft; they never enter the pure workflow module.
#[derive(Clone, Copy)]
pub struct SubmitProjectViewModel {
    pub form: RwSignal<ProjectDraft>,
    pub logo_files: RwSignal<Vec<web_sys::File>, LocalStorage>,
    pub gallery_files: RwSignal<Vec<web_sys::File>, LocalStorage>,
    pub is_loading: RwSignal<bool>,
    toasts: ToastService,
}

impl SubmitProjectViewModel {
    pub fn new(toasts: ToastService) -> Self {
        Self {
            form: RwSignal::new(ProjectDraft::default()),
            logo_files: RwSignal::new_local(vec![]),
            gallery_files: RwSignal::new_local(vec![]),
            is_loading: RwSignal::new(false),
            toasts,
        }
    }

    pub fn add_tag_command(&self) {
        self.form.update(|f| f.add_tag());
    }

    pub fn remove_tag_command(&self, tag: &str) {
        let tag = tag.to_string();
        self.form.update(|f| f.remove_tag(&tag));
    }

    /// Only one logo is meaningful; keep the first selection
    pub fn set_logo_files(&self, files: Vec<web_sys::File>) {
        let mut files = files;
        files.truncate(1);
        self.logo_files.set(files);
    }

    /// Gallery is capped at the selection boundary
    pub fn set_gallery_files(&self, files: Vec<web_sys::File>) {
        let mut files = files;
        files.truncate(MAX_GALLERY_IMAGES);
        self.gallery_files.set(files);
    }

    /// Run the submission pipeline with the real collaborators.
    pub fn submit_command(&self, on_created: Rc<dyn Fn(String)>) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            vm.perform_submit(
                |files| upload_files(files),
                |request| model::submit_project(request),
                on_created,
            )
            .await;
        });
    }

    /// The command body, with upload and submit injected.
    ///
    /// The loading flag goes up before the first upload and is cleared
    /// on every exit path, so the submit control always recovers. A
    /// second invocation while one is in flight is ignored.
    async fn perform_submit<Up, UpFut, Sub, SubFut>(
        &self,
        upload: Up,
        submit: Sub,
        on_created: Rc<dyn Fn(String)>,
    ) where
        Up: Fn(Vec<web_sys::File>) -> UpFut,
        UpFut: Future<Output = Result<Vec<String>, String>>,
        Sub: FnOnce(SubmitProjectRequest) -> SubFut,
        SubFut: Future<Output = Result<SubmitProjectResponse, String>>,
    {
        if self.is_loading.get_untracked() {
            return;
        }

        let draft = self.form.get_untracked();
        let logo = self.logo_files.get_untracked();
        let gallery = self.gallery_files.get_untracked();

        self.is_loading.set(true);
        let outcome = run_submission(&draft, logo, gallery, upload, submit).await;
        self.is_loading.set(false);

        match outcome {
            SubmitOutcome::Created { id } => {
                self.toasts
                    .show_success("Submitted!", "Your glorious failure is now public");
                (on_created)(id);
            }
            SubmitOutcome::Rejected { message } | SubmitOutcome::Failed { message } => {
                self.toasts.show_error("Submission failed", &message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_project::aggregate::ProjectSummary;
    use std::cell::RefCell;
    use std::future::ready;

    fn filled_vm() -> SubmitProjectViewModel {
        let vm = SubmitProjectViewModel::new(ToastService::new());
        vm.form.set(ProjectDraft {
            title: "AI Recipe Bot".to_string(),
            tagline: "Only makes sandwiches".to_string(),
            url: String::new(),
            confession: "It just makes PB&J".to_string(),
            tags: vec!["ai".to_string()],
            current_tag: String::new(),
            failure_type: "abandoned".to_string(),
        });
        vm
    }

    #[tokio::test]
    async fn test_success_clears_loading_and_navigates_exactly_once() {
        let vm = filled_vm();
        let navigations = Rc::new(RefCell::new(Vec::new()));
        let recorded = navigations.clone();
        let on_created: Rc<dyn Fn(String)> =
            Rc::new(move |id| recorded.borrow_mut().push(id));

        vm.perform_submit(
            |_files| ready(Ok(vec![])),
            move |_request| {
                // the flag is already up when the request goes out
                assert!(vm.is_loading.get_untracked());
                ready(Ok(SubmitProjectResponse::created(ProjectSummary {
                    id: "p-9".to_string(),
                    title: "AI Recipe Bot".to_string(),
                })))
            },
            on_created,
        )
        .await;

        assert!(!vm.is_loading.get_untracked());
        assert_eq!(*navigations.borrow(), vec!["p-9".to_string()]);
        let toasts = vm.toasts.current();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].intent, crate::shared::toast::ToastIntent::Success);
    }

    #[tokio::test]
    async fn test_rejection_toasts_error_and_never_navigates() {
        let vm = filled_vm();
        let navigations = Rc::new(RefCell::new(Vec::<String>::new()));
        let recorded = navigations.clone();
        let on_created: Rc<dyn Fn(String)> =
            Rc::new(move |id| recorded.borrow_mut().push(id));

        vm.perform_submit(
            |_files| ready(Ok(vec![])),
            |_request| {
                ready(Ok(SubmitProjectResponse::rejected(vec![
                    "Title too short".to_string(),
                ])))
            },
            on_created,
        )
        .await;

        assert!(!vm.is_loading.get_untracked());
        assert!(navigations.borrow().is_empty());
        let toasts = vm.toasts.current();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].intent, crate::shared::toast::ToastIntent::Error);
        assert_eq!(toasts[0].message, "Title too short");
    }

    #[tokio::test]
    async fn test_in_flight_submission_blocks_reentry() {
        let vm = filled_vm();
        vm.is_loading.set(true);
        let on_created: Rc<dyn Fn(String)> = Rc::new(|_| panic!("must not navigate"));

        vm.perform_submit(
            |_files| ready(Ok(vec![])),
            |_request| -> std::future::Ready<Result<SubmitProjectResponse, String>> {
                panic!("must not submit while one is in flight")
            },
            on_created,
        )
        .await;

        // the guard leaves the in-flight attempt's flag alone
        assert!(vm.is_loading.get_untracked());
        assert!(vm.toasts.current().is_empty());
    }
}
