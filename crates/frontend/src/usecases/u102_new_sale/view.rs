use contracts::domain::a001_article::PriceField;
use leptos::prelude::*;

use crate::domain::a001_article::ui::item_selection::summary::total;
use crate::domain::a001_article::ui::item_selection::{ItemSelection, SelectionSet, SelectionVariant};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::format_currency;
use crate::shared::config::use_config;

#[component]
pub fn NewSalePage() -> impl IntoView {
    let config = use_config();
    let (selection, set_selection) = signal(SelectionSet::new());

    let currency = config.currency;
    let subtitle = Signal::derive(move || {
        selection.with(|s| {
            format!(
                "{} selected, {}",
                s.len(),
                format_currency(total(s, PriceField::Sale), currency)
            )
        })
    });

    view! {
        <div class="page">
            <PageHeader title="New sale" icon_name="sales" subtitle=subtitle />
            <ItemSelection
                variant=SelectionVariant::SALE
                on_selection_change=Callback::new(move |s: SelectionSet| set_selection.set(s))
            />
        </div>
    }
}
