//! TopHeader component - application title and page switcher.

use crate::layout::global_context::{AppGlobalContext, AppPage};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().unwrap_or_default();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Inventory"</span>
            </div>

            <nav class="top-header__nav">
                {AppPage::all()
                    .into_iter()
                    .map(|page| {
                        let is_active = move || ctx.active.get() == page;
                        view! {
                            <button
                                class=move || {
                                    if is_active() {
                                        "top-header__nav-btn top-header__nav-btn--active"
                                    } else {
                                        "top-header__nav-btn"
                                    }
                                }
                                on:click=move |_| ctx.activate(page)
                                title=page.title()
                            >
                                {icon(page.icon_name())}
                                <span>{page.title()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </div>
    }
}
