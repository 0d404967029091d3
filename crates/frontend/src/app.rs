use crate::routes::routes::AppRoutes;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::session::context::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Notification sink for the whole app
    provide_context(ToastService::new());

    view! {
        <SessionProvider>
            <AppRoutes />
            <ToastHost />
        </SessionProvider>
    }
}
