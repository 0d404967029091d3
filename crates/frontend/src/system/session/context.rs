use contracts::system::session::SessionUser;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// The session check has not come back yet
    Loading,
    Authenticated,
    Unauthenticated,
}

#[derive(Debug, Clone)]
pub struct SessionState {
    pub status: SessionStatus,
    pub user: Option<SessionUser>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            status: SessionStatus::Loading,
            user: None,
        }
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let (session, set_session) = signal(SessionState::default());

    // Resolve the session once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let state = match api::fetch_session().await {
                Ok(Some(user)) => SessionState {
                    status: SessionStatus::Authenticated,
                    user: Some(user),
                },
                Ok(None) => SessionState {
                    status: SessionStatus::Unauthenticated,
                    user: None,
                },
                Err(e) => {
                    log::warn!("session check failed: {}", e);
                    SessionState {
                        status: SessionStatus::Unauthenticated,
                        user: None,
                    }
                }
            };
            set_session.set(state);
        });
    });

    provide_context(session);

    children()
}

/// Hook to access the session state
pub fn use_session() -> ReadSignal<SessionState> {
    use_context::<ReadSignal<SessionState>>().expect("SessionProvider not found in component tree")
}
