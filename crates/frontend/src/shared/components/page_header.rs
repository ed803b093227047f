use crate::shared::icons::icon;
use leptos::prelude::*;

/// PageHeader component - header shared by all pages
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Icon name from `shared::icons`
    #[prop(optional)]
    icon_name: &'static str,

    /// Optional subtitle, hidden while empty
    #[prop(optional, into)]
    subtitle: Signal<String>,

    /// Header actions, e.g. a spinner or filter inputs
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                {(!icon_name.is_empty()).then(|| icon(icon_name))}
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || {
                        let s = subtitle.get();
                        (!s.is_empty()).then(|| view! {
                            <div class="page-header__subtitle">{s}</div>
                        })
                    }}
                </div>
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
