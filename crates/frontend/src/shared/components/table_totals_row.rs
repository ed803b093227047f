use leptos::prelude::*;

/// Totals row for tables: empty leading cells, a label cell, the value
/// cell and empty trailing cells.
///
/// # BEM classes
/// - `.table__totals-row` - base class of the row
/// - `.table__totals-cell` - label and value cells
///
/// # Example
/// ```rust,ignore
/// <TableTotalsRow
///     label="TOTAL"
///     value=Signal::derive(move || format_currency(total.get(), "NPR"))
///     leading_cols=5
///     trailing_cols=1
/// />
/// ```
#[component]
pub fn TableTotalsRow(
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
    /// Number of empty cells before the label
    #[prop(optional)]
    leading_cols: usize,
    /// Number of empty cells after the value
    #[prop(optional)]
    trailing_cols: usize,
) -> impl IntoView {
    let leading = (leading_cols > 0).then(|| {
        view! { <td class="table__cell" colspan=leading_cols.to_string()></td> }
    });
    let trailing = (trailing_cols > 0).then(|| {
        view! { <td class="table__cell" colspan=trailing_cols.to_string()></td> }
    });

    view! {
        <tr class="table__totals-row">
            {leading}
            <td class="table__cell table__totals-cell">{label}</td>
            <td class="table__cell table__cell--right table__totals-cell">{move || value.get()}</td>
            {trailing}
        </tr>
    }
}
