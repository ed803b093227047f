pub mod global_context;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Application frame: navigation bar on top, active page below.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |                Content                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-main">
                {center}
            </div>
        </div>
    }
}
