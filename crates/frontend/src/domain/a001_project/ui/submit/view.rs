use super::view_model::SubmitProjectViewModel;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use crate::system::session::context::{use_session, SessionStatus};
use contracts::domain::a001_project::aggregate::{
    CONFESSION_MAX_CHARS, MAX_TAGS, TAGLINE_MAX_CHARS, TITLE_MAX_CHARS,
};
use contracts::enums::failure_type::FailureType;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use std::rc::Rc;
use wasm_bindgen::JsCast;

/// Pull the selected files out of a file input change event
fn files_from_event(ev: &web_sys::Event) -> Vec<web_sys::File> {
    let mut selected = Vec::new();
    if let Some(input) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
    {
        if let Some(files) = input.files() {
            for i in 0..files.length() {
                if let Some(file) = files.get(i) {
                    selected.push(file);
                }
            }
        }
    }
    selected
}

#[component]
pub fn SubmitProjectPage() -> impl IntoView {
    let session = use_session();

    view! {
        {move || match session.get().status {
            SessionStatus::Loading => view! {
                <div class="page-center">
                    <div class="page-loading">"Loading..."</div>
                </div>
            }
            .into_any(),
            SessionStatus::Unauthenticated => view! { <LockedOut /> }.into_any(),
            SessionStatus::Authenticated => view! { <SubmitProjectForm /> }.into_any(),
        }}
    }
}

#[component]
fn LockedOut() -> impl IntoView {
    view! {
        <div class="page-center">
            <div class="card card--narrow locked-out">
                {icon("lock")}
                <h1>"Sign-in required"</h1>
                <p>"You need to sign in before confessing a failed project."</p>
                <a class="btn btn-primary" href="/api/auth/signin">"Sign in with GitHub"</a>
            </div>
        </div>
    }
}

#[component]
fn SubmitProjectForm() -> impl IntoView {
    let vm = SubmitProjectViewModel::new(use_toasts());
    let navigate = use_navigate();

    let navigate_home = navigate.clone();
    let on_created: Rc<dyn Fn(String)> = Rc::new(move |id: String| {
        navigate(&format!("/projects/{}", id), Default::default());
    });

    let handle_logo_select = move |ev: web_sys::Event| {
        vm.set_logo_files(files_from_event(&ev));
    };
    let handle_gallery_select = move |ev: web_sys::Event| {
        vm.set_gallery_files(files_from_event(&ev));
    };

    view! {
        <div class="submit-page">
            <section class="submit-page__hero">
                <h2>"Share Your " <span class="accent">"Glorious Failure"</span></h2>
                <p>
                    "Turn your coding disasters into community entertainment. Every bug is "
                    "a feature, every crash is a story, and every abandoned project is a "
                    "badge of honor."
                </p>
            </section>

            <div class="card">
                <div class="card__header">
                    <div class="card__title">
                        {icon("lightbulb")}
                        <h2>"Project Details"</h2>
                    </div>
                    <p class="card__hint">"Tell us about your magnificent disaster"</p>
                </div>
                <div class="card__body">
                    <div class="form-group">
                        <label for="title">"Project name *"</label>
                        <input
                            type="text"
                            id="title"
                            maxlength=TITLE_MAX_CHARS
                            placeholder="e.g. AI recipe generator that only makes sandwiches"
                            prop:value=move || vm.form.get().title
                            on:input=move |ev| {
                                vm.form.update(|f| f.title = event_target_value(&ev));
                            }
                        />
                        <span class="form-hint">
                            {move || format!("{}/{} characters", vm.form.get().title.chars().count(), TITLE_MAX_CHARS)}
                        </span>
                    </div>

                    <div class="form-group">
                        <label for="tagline">"One-line tagline *"</label>
                        <input
                            type="text"
                            id="tagline"
                            maxlength=TAGLINE_MAX_CHARS
                            placeholder="e.g. Trained on 10000 recipes, outputs PB&J variants"
                            prop:value=move || vm.form.get().tagline
                            on:input=move |ev| {
                                vm.form.update(|f| f.tagline = event_target_value(&ev));
                            }
                        />
                        <span class="form-hint">
                            {move || format!("{}/{} characters", vm.form.get().tagline.chars().count(), TAGLINE_MAX_CHARS)}
                        </span>
                    </div>

                    <div class="form-group">
                        <label for="failure-type">"Failure type"</label>
                        <select
                            id="failure-type"
                            prop:value=move || vm.form.get().failure_type
                            on:change=move |ev| {
                                vm.form.update(|f| f.failure_type = event_target_value(&ev));
                            }
                        >
                            <option value="">"How did it die?"</option>
                            {FailureType::all()
                                .into_iter()
                                .map(|failure_type| view! {
                                    <option value=failure_type.code()>{failure_type.display_name()}</option>
                                })
                                .collect_view()}
                        </select>
                    </div>
                </div>
            </div>

            <div class="card">
                <div class="card__header">
                    <div class="card__title">
                        {icon("alert")}
                        <h2>"The Confession"</h2>
                    </div>
                    <p class="card__hint">"Tell us the full story - what went wrong and why?"</p>
                </div>
                <div class="card__body">
                    <div class="form-group">
                        <label for="confession">"Confession *"</label>
                        <textarea
                            id="confession"
                            rows="6"
                            maxlength=CONFESSION_MAX_CHARS
                            placeholder="I spent 3 months training a recipe neural network, only to discover it had learned bread + filling = food..."
                            prop:value=move || vm.form.get().confession
                            on:input=move |ev| {
                                vm.form.update(|f| f.confession = event_target_value(&ev));
                            }
                        />
                        <span class="form-hint">
                            {move || format!(
                                "Honest, funny, detailed. The community loves a good disaster story. {}/{}",
                                vm.form.get().confession.chars().count(),
                                CONFESSION_MAX_CHARS,
                            )}
                        </span>
                    </div>
                </div>
            </div>

            <div class="card">
                <div class="card__header">
                    <h2>"Tags"</h2>
                    <p class="card__hint">{format!("Pick up to {} tags that describe your failure", MAX_TAGS)}</p>
                </div>
                <div class="card__body">
                    <div class="tag-entry">
                        <input
                            type="text"
                            class="tag-entry__input"
                            placeholder="e.g. React, TypeScript, abandoned..."
                            prop:value=move || vm.form.get().current_tag
                            on:input=move |ev| {
                                vm.form.update(|f| f.current_tag = event_target_value(&ev));
                            }
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    vm.add_tag_command();
                                }
                            }
                        />
                        <button
                            type="button"
                            class="btn btn-secondary"
                            disabled=move || {
                                let f = vm.form.get();
                                f.current_tag.trim().is_empty() || f.tags.len() >= MAX_TAGS
                            }
                            on:click=move |_| vm.add_tag_command()
                        >
                            "Add"
                        </button>
                    </div>
                    <div class="chip-row">
                        {move || {
                            vm.form
                                .get()
                                .tags
                                .into_iter()
                                .map(|tag| {
                                    let tag_to_remove = tag.clone();
                                    view! {
                                        <span class="chip">
                                            {tag}
                                            <button
                                                type="button"
                                                class="chip__close"
                                                on:click=move |_| vm.remove_tag_command(&tag_to_remove)
                                            >
                                                {icon("close")}
                                            </button>
                                        </span>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                    <p class="form-hint">
                        {move || format!("Selected: {}/{}", vm.form.get().tags.len(), MAX_TAGS)}
                    </p>
                </div>
            </div>

            <div class="card">
                <div class="card__header">
                    <h2>"Links (optional)"</h2>
                    <p class="card__hint">"Share your project and code, if you dare"</p>
                </div>
                <div class="card__body">
                    <div class="form-group">
                        <label for="url">"Project URL"</label>
                        <input
                            type="url"
                            id="url"
                            placeholder="https://my-failed-project.com"
                            prop:value=move || vm.form.get().url
                            on:input=move |ev| {
                                vm.form.update(|f| f.url = event_target_value(&ev));
                            }
                        />
                    </div>
                </div>
            </div>

            <div class="card">
                <div class="card__header">
                    <h2>"Project logo (optional)"</h2>
                    <p class="card__hint">"Upload a square logo (64x64px recommended)"</p>
                </div>
                <div class="card__body">
                    <label class="btn btn-secondary file-btn" for="logo-input">
                        {icon("upload")}
                        "Choose logo"
                    </label>
                    <input
                        id="logo-input"
                        type="file"
                        accept="image/*"
                        style="display: none"
                        on:change=handle_logo_select
                    />
                    <span class="file-hint">
                        {move || {
                            vm.logo_files
                                .get()
                                .first()
                                .map(|file| file.name())
                                .unwrap_or_else(|| "No file selected".to_string())
                        }}
                    </span>
                </div>
            </div>

            <div class="card">
                <div class="card__header">
                    <h2>"Project gallery (optional)"</h2>
                    <p class="card__hint">"Upload up to 5 screenshots or images to show off your project"</p>
                </div>
                <div class="card__body">
                    <label class="btn btn-secondary file-btn" for="gallery-input">
                        {icon("upload")}
                        "Choose images"
                    </label>
                    <input
                        id="gallery-input"
                        type="file"
                        accept="image/*"
                        multiple
                        style="display: none"
                        on:change=handle_gallery_select
                    />
                    <span class="file-hint">
                        {move || {
                            let count = vm.gallery_files.get().len();
                            if count == 0 {
                                "No files selected".to_string()
                            } else {
                                format!("{} file(s) selected", count)
                            }
                        }}
                    </span>
                </div>
            </div>

            <div class="card">
                <div class="card__body submit-row">
                    <p class="form-hint">
                        "By submitting you agree to let the community (lovingly) laugh at your code."
                    </p>
                    <div class="submit-row__actions">
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| navigate_home("/", Default::default())
                        >
                            "Cancel"
                        </button>
                        <button
                            type="button"
                            class="btn btn-primary"
                            disabled=move || !vm.form.get().is_submittable() || vm.is_loading.get()
                            on:click=move |_| vm.submit_command(on_created.clone())
                        >
                            {move || if vm.is_loading.get() { "Submitting..." } else { "Submit my failure" }}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
