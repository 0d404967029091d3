use super::model;
use contracts::domain::a001_project::aggregate::Project;
use contracts::enums::failure_type::FailureType;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

#[component]
pub fn ProjectDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let project = RwSignal::new(Option::<Project>::None);
    let error = RwSignal::new(Option::<String>::None);

    Effect::new(move |_| {
        let id = params.get().get("id").unwrap_or_default();
        if id.is_empty() {
            return;
        }
        spawn_local(async move {
            match model::fetch_by_id(id).await {
                Ok(loaded) => project.set(Some(loaded)),
                Err(e) => error.set(Some(e)),
            }
        });
    });

    view! {
        <div class="details-page">
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || {
                project
                    .get()
                    .map(|p| {
                        let failure_label = FailureType::from_code(&p.failure_type)
                            .map(|t| t.display_name().to_string())
                            .unwrap_or(p.failure_type.clone());
                        let submitted = p.metadata.created_at.format("%b %e, %Y").to_string();
                        view! {
                            <article class="project-details">
                                <header class="project-details__header">
                                    {p.logo_url
                                        .clone()
                                        .map(|logo| view! { <img class="project-details__logo" src=logo alt="logo" /> })}
                                    <div>
                                        <h1>{p.title.clone()}</h1>
                                        <p class="project-details__tagline">{p.tagline.clone()}</p>
                                        <p class="project-details__meta">
                                            {format!("by {} on {} · {}", p.author, submitted, failure_label)}
                                        </p>
                                    </div>
                                </header>

                                <section class="project-details__confession">
                                    <h2>"The Confession"</h2>
                                    <p>{p.confession.clone()}</p>
                                </section>

                                <div class="chip-row">
                                    {p.tags
                                        .iter()
                                        .map(|tag| view! { <span class="chip">{tag.clone()}</span> })
                                        .collect_view()}
                                </div>

                                {p.url
                                    .clone()
                                    .map(|url| view! {
                                        <p><a href=url.clone() target="_blank" rel="noopener">{url.clone()}</a></p>
                                    })}

                                <div class="project-details__gallery">
                                    {p.gallery_urls
                                        .iter()
                                        .map(|src| view! { <img src=src.clone() alt="screenshot" /> })
                                        .collect_view()}
                                </div>
                            </article>
                        }
                    })
            }}
        </div>
    }
}
