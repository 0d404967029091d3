use leptos::prelude::*;

/// How long a toast stays on screen, in milliseconds
#[cfg(target_arch = "wasm32")]
const TOAST_LIFETIME_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastIntent {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub intent: ToastIntent,
}

/// Centralized notification service, provided via context.
///
/// Fire-and-forget: callers never read anything back from a toast.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(vec![]),
            next_id: RwSignal::new(0),
        }
    }

    pub fn show_success(&self, title: &str, message: &str) {
        self.push(ToastIntent::Success, title, message);
    }

    pub fn show_error(&self, title: &str, message: &str) {
        self.push(ToastIntent::Error, title, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    pub fn current(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    fn push(&self, intent: ToastIntent, title: &str, message: &str) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                title: title.to_string(),
                message: message.to_string(),
                intent,
            })
        });

        self.schedule_dismiss(id);
    }

    // Timers only exist in the browser; outside it a toast stays until
    // dismissed by hand.
    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let toasts = self.toasts;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

/// Hook to reach the notification service from any component or command
pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toasts();

    view! {
        <div class="toast-stack">
            {move || {
                service
                    .current()
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.intent {
                            ToastIntent::Success => "toast toast--success",
                            ToastIntent::Error => "toast toast--error",
                        };
                        let id = toast.id;
                        view! {
                            <div class=class on:click=move |_| service.dismiss(id)>
                                <div class="toast__title">{toast.title}</div>
                                <div class="toast__message">{toast.message}</div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
