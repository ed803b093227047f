use contracts::domain::a001_article::PriceField;
use leptos::prelude::*;

use crate::domain::a001_article::ui::item_selection::summary::total;
use crate::domain::a001_article::ui::item_selection::{ItemSelection, SelectionSet, SelectionVariant};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::format_currency;
use crate::shared::config::use_config;

/// Provider ids are positive; anything else leaves the catalog inert
pub fn parse_provider_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

#[component]
pub fn NewPurchasePage() -> impl IntoView {
    let config = use_config();
    let (provider_id, set_provider_id) = signal(None::<i64>);
    let (selection, set_selection) = signal(SelectionSet::new());

    let currency = config.currency;
    let subtitle = move || {
        selection.with(|s| {
            format!(
                "{} selected, {}",
                s.len(),
                format_currency(total(s, PriceField::Purchase), currency)
            )
        })
    };

    view! {
        <div class="page">
            <PageHeader title="New purchase" icon_name="purchases" subtitle=subtitle>
                <label class="provider-select">
                    "Provider ID "
                    <input
                        type="number"
                        min="1"
                        class="provider-select__input"
                        on:change=move |ev| set_provider_id.set(parse_provider_id(&event_target_value(&ev)))
                    />
                </label>
            </PageHeader>
            <ItemSelection
                variant=SelectionVariant::PURCHASE
                provider_id=provider_id
                on_selection_change=Callback::new(move |s: SelectionSet| set_selection.set(s))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_provider_id() {
        assert_eq!(parse_provider_id("3"), Some(3));
        assert_eq!(parse_provider_id(" 12 "), Some(12));
        assert_eq!(parse_provider_id(""), None);
        assert_eq!(parse_provider_id("0"), None);
        assert_eq!(parse_provider_id("abc"), None);
    }
}
