//! Home page: the most recently confessed projects

use crate::shared::api_utils::api_url;
use contracts::domain::a001_project::aggregate::Project;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;

async fn fetch_recent() -> Result<Vec<Project>, String> {
    let response = Request::get(&api_url("/api/projects"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Vec<Project>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[component]
pub fn ProjectListPage() -> impl IntoView {
    let projects = RwSignal::new(Vec::<Project>::new());
    let error = RwSignal::new(Option::<String>::None);

    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_recent().await {
                Ok(loaded) => projects.set(loaded),
                Err(e) => error.set(Some(e)),
            }
        });
    });

    view! {
        <div class="list-page">
            <section class="list-page__hero">
                <h1>"The Project Graveyard"</h1>
                <p>"Where failed side projects get the send-off they deserve."</p>
                <a class="btn btn-primary" href="/submit">"Confess a failure"</a>
            </section>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="project-grid">
                {move || {
                    projects
                        .get()
                        .into_iter()
                        .map(|project| {
                            let href = format!("/projects/{}", project.to_string_id());
                            view! {
                                <a class="project-card" href=href>
                                    <h3>{project.title}</h3>
                                    <p>{project.tagline}</p>
                                    <div class="chip-row">
                                        {project
                                            .tags
                                            .into_iter()
                                            .map(|tag| view! { <span class="chip">{tag}</span> })
                                            .collect_view()}
                                    </div>
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
