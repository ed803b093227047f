use crate::shared::icons::icon;
use leptos::prelude::*;

/// Keeps a requested page inside `1..=total_pages` (an empty result still
/// has one page).
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// PaginationControls component - first/prev/next/last controls for
/// server-paged tables
#[component]
pub fn PaginationControls(
    /// Current page (1-based, as the API counts pages)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Callback with the requested page (1-based)
    on_page_change: Callback<usize>,

    /// Disable every control, e.g. while a page is loading
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let is_disabled = move || disabled.get();
    let at_first = move || is_disabled() || current_page.get() <= 1;
    let at_last = move || is_disabled() || current_page.get() >= total_pages.get().max(1);

    let go_to = move |page: usize| {
        let target = clamp_page(page, total_pages.get_untracked());
        if target != current_page.get_untracked() {
            on_page_change.run(target);
        }
    };

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| go_to(1)
                disabled=at_first
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go_to(current_page.get_untracked().saturating_sub(1))
                disabled=at_first
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let page = current_page.get();
                    let total = total_pages.get().max(1);
                    let count = total_count.get();
                    format!("{} / {} ({})", page, total, count)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| go_to(current_page.get_untracked() + 1)
                disabled=at_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go_to(total_pages.get_untracked())
                disabled=at_last
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(9, 3), 3);
        assert_eq!(clamp_page(4, 0), 1);
    }
}
