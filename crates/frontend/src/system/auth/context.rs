use std::sync::Arc;

use leptos::prelude::*;

use super::session::{LocalStorageSession, Session, SessionStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    Expired,
}

/// Session provided through context. Widgets verify it at the start of
/// every load; a failed check flips the status and the shell falls back to
/// the sign-in prompt.
#[derive(Clone)]
pub struct SessionContext {
    session: Session,
    status: RwSignal<SessionStatus>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        let session = Session::new(store);
        let status = if session.verify_at(now_secs()) {
            SessionStatus::Active
        } else {
            SessionStatus::Expired
        };
        Self {
            session,
            status: RwSignal::new(status),
        }
    }

    pub fn verify(&self) -> bool {
        let valid = self.session.verify_at(now_secs());
        if !valid && self.status.get_untracked() != SessionStatus::Expired {
            leptos::logging::log!("Session verification failed, signing out");
            self.status.set(SessionStatus::Expired);
        }
        valid
    }

    /// Re-read the store, e.g. after signing in from another tab
    pub fn refresh(&self) {
        let valid = self.session.verify_at(now_secs());
        self.status.set(if valid {
            SessionStatus::Active
        } else {
            SessionStatus::Expired
        });
    }

    pub fn access_token(&self) -> Option<String> {
        self.session.access_token()
    }

    pub fn status(&self) -> SessionStatus {
        self.status.get()
    }

    pub fn is_active(&self) -> bool {
        self.status() == SessionStatus::Active
    }
}

fn now_secs() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Session context provider component
#[component]
pub fn SessionProvider(
    /// Token store; localStorage when omitted
    #[prop(optional)]
    store: Option<Arc<dyn SessionStore>>,
    children: Children,
) -> impl IntoView {
    let store = store.unwrap_or_else(|| Arc::new(LocalStorageSession));
    provide_context(SessionContext::new(store));

    children()
}

/// Hook to access the session
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .unwrap_or_else(|| SessionContext::new(Arc::new(LocalStorageSession)))
}
