use leptos::prelude::*;

/// Checkbox cell for row selection in tables.
///
/// Clicks stay inside the cell so a row click handler never sees them.
/// A disabled cell keeps showing the current state.
#[component]
pub fn TableCheckbox(
    #[prop(into)]
    checked: Signal<bool>,
    /// New state after the user toggled the box
    on_change: Callback<bool>,
    #[prop(optional)]
    disabled: bool,
    /// Accessible label, e.g. the article name
    #[prop(optional, into)]
    label: String,
) -> impl IntoView {
    let cell_class = if disabled {
        "table__cell table__cell--checkbox table__cell--disabled"
    } else {
        "table__cell table__cell--checkbox"
    };

    view! {
        <td class=cell_class on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                aria-label=label
                prop:checked=move || checked.get()
                disabled=disabled
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </td>
    }
}
