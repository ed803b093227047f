use leptos::prelude::*;
use thaw::*;

use super::context::use_session;

/// Renders `children` while the session is active, otherwise a sign-in
/// prompt with a retry action
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let is_active = {
        let session = session.clone();
        move || session.is_active()
    };

    view! {
        <Show
            when=is_active
            fallback=move || {
                let session = session.clone();
                view! {
                    <div class="session-expired">
                        <h2>"Session expired"</h2>
                        <p>"Please sign in again to continue."</p>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| session.refresh()
                        >
                            "I have signed in"
                        </Button>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
