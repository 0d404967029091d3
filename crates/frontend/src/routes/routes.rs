use crate::domain::a001_project::ui::details::ProjectDetailsPage;
use crate::domain::a001_project::ui::list::ProjectListPage;
use crate::domain::a001_project::ui::submit::SubmitProjectPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <div class="not-found">"Page not found"</div> }>
                    <Route path=path!("/") view=ProjectListPage />
                    <Route path=path!("/submit") view=SubmitProjectPage />
                    <Route path=path!("/projects/:id") view=ProjectDetailsPage />
                </Routes>
            </main>
        </Router>
    }
}
