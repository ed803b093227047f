//! Item selection widget used by both order flows.
//!
//! Left: paged catalog with a checkbox per article. Right: the order summary
//! with editable quantities and the running total. The selection lives
//! outside the catalog page, so it survives paging and new searches.

pub mod selection;
pub mod state;
pub mod summary;
pub mod variant;

pub use selection::{SelectedArticle, SelectionSet, StockCapPolicy};
pub use variant::SelectionVariant;

use contracts::domain::a001_article::{Article, ArticleId, PriceField};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::state::{CatalogFilter, CatalogState};
use crate::domain::a001_article::api::fetch_articles;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::table::{format_currency, format_price};
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::components::table_totals_row::TableTotalsRow;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::system::auth::use_session;

/// Apply `op` to the selection and hand the new snapshot to `on_change`
/// right away when `op` reports a change
pub fn apply_selection_change(
    selection: RwSignal<SelectionSet>,
    on_change: Option<Callback<SelectionSet>>,
    op: impl FnOnce(&mut SelectionSet) -> bool,
) -> bool {
    let changed = selection.try_update(op).unwrap_or(false);
    if changed {
        if let Some(callback) = on_change {
            callback.run(selection.get_untracked());
        }
    }
    changed
}

#[component]
pub fn ItemSelection(
    variant: SelectionVariant,
    /// Provider filter; required by variants with `requires_provider`
    #[prop(optional, into)]
    provider_id: Signal<Option<i64>>,
    /// Receives a snapshot after every change of the selection
    #[prop(optional)]
    on_selection_change: Option<Callback<SelectionSet>>,
) -> impl IntoView {
    let config = use_config();
    let session = use_session();

    let filter = RwSignal::new(CatalogFilter::default());
    let catalog = RwSignal::new(CatalogState::default());
    let selection = RwSignal::new(SelectionSet::new());

    let page_size = config.catalog_page_size;
    let api_base = StoredValue::new(config.api_base.clone());
    let last_provider = StoredValue::new(None::<i64>);

    Effect::new(move |_| {
        let current = filter.get();
        let provider = provider_id.get();

        // A new provider starts from the first page of its catalog
        if provider != last_provider.get_value() {
            last_provider.set_value(provider);
            if current.page != 1 {
                filter.update(|f| {
                    f.set_page(1);
                });
                return;
            }
        }

        let Some(query) = variant.catalog_query(&current.search, provider, current.page, page_size)
        else {
            catalog.update(|c| c.reset());
            return;
        };

        if !session.verify() {
            return;
        }
        let token = session.access_token();
        let Some(ticket) = catalog.try_update(|c| c.begin_load()) else {
            return;
        };

        spawn_local(async move {
            let base = api_base.get_value();
            let result = fetch_articles(&base, token.as_deref(), &query).await;
            catalog.update(|c| match result {
                Ok(page) => {
                    if !c.apply_page(ticket, page) {
                        log::debug!("Discarding stale catalog response #{}", ticket);
                    }
                }
                Err(e) => {
                    log::error!("Failed to load articles: {}", e);
                    c.apply_failure(ticket, e.to_string());
                }
            });
        });
    });

    let toggle = move |article: Article, included: bool| {
        apply_selection_change(selection, on_selection_change, |s| s.toggle(&article, included));
    };

    let set_quantity = move |id: ArticleId, raw: String| {
        apply_selection_change(selection, on_selection_change, |s| {
            s.set_quantity(id, &raw, variant.stock_cap)
        });
    };

    let remove = move |id: ArticleId| {
        apply_selection_change(selection, on_selection_change, |s| s.remove(id));
    };

    let is_loading = Signal::derive(move || catalog.with(|c| c.is_loading()));
    let waiting_for_provider =
        move || variant.requires_provider && provider_id.get().is_none();

    let current_page = Signal::derive(move || {
        let requested = filter.with(|f| f.page);
        catalog.with(|c| c.current_page(requested)) as usize
    });
    let total_pages = Signal::derive(move || catalog.with(|c| c.total_pages()) as usize);
    let total_count = Signal::derive(move || catalog.with(|c| c.total_records()) as usize);

    let currency = config.currency;
    let price_field = variant.price_field;

    let catalog_rows = move || {
        let articles = catalog.with(|c| {
            c.paginator
                .as_ref()
                .map(|p| p.articles.clone())
                .unwrap_or_default()
        });

        if articles.is_empty() {
            return view! {
                <TableRow>
                    <td class="table__cell table__cell--empty" colspan="9">
                        {variant.empty_text}
                    </td>
                </TableRow>
            }
            .into_any();
        }

        articles
            .into_iter()
            .map(|article| {
                let id = article.article_id;
                let selectable = variant.is_selectable(&article);
                let name = article.name.clone();
                let brand = article.brand_name().to_string();
                let category = article.category_name().to_string();
                let provider = article.provider_name().to_string();
                let stock = article.stock;
                let purchase_price = format_price(article.price(PriceField::Purchase), currency);
                let sale_price = format_price(article.price(PriceField::Sale), currency);

                view! {
                    <TableRow>
                        <TableCheckbox
                            checked=Signal::derive(move || selection.with(|s| s.contains(id)))
                            on_change=Callback::new(move |checked| toggle(article.clone(), checked))
                            disabled=!selectable
                            label=name.clone()
                        />
                        <TableCell>
                            <TableCellLayout>{id}</TableCellLayout>
                        </TableCell>
                        <TableCell>
                            <TableCellLayout truncate=true>{name}</TableCellLayout>
                        </TableCell>
                        <TableCell>
                            <TableCellLayout>{brand}</TableCellLayout>
                        </TableCell>
                        <TableCell>
                            <TableCellLayout>{category}</TableCellLayout>
                        </TableCell>
                        <TableCell>
                            <TableCellLayout>{provider}</TableCellLayout>
                        </TableCell>
                        <TableCell>
                            <TableCellLayout>{stock}</TableCellLayout>
                        </TableCell>
                        <TableCell>
                            <TableCellLayout>{purchase_price}</TableCellLayout>
                        </TableCell>
                        <TableCell>
                            <TableCellLayout>{sale_price}</TableCellLayout>
                        </TableCell>
                    </TableRow>
                }
            })
            .collect_view()
            .into_any()
    };

    let summary_row = move |entry: SelectedArticle| {
        let id = entry.id();
        let name = entry.article.name.clone();
        let brand = entry.article.brand_name().to_string();
        let stock = entry.article.stock;
        let unit_price = entry.unit_price(price_field);
        let quantity_max = variant.quantity_max(&entry.article).map(|m| m.to_string());
        let quantity = move || {
            selection.with(|s| s.get(id).map(|e| e.quantity).unwrap_or(1))
        };

        view! {
            <tr class="table__row">
                <td class="table__cell">{name}</td>
                <td class="table__cell">{brand}</td>
                <td class="table__cell table__cell--right">{stock}</td>
                <td class="table__cell table__cell--right">
                    {format_currency(unit_price, currency)}
                </td>
                <td class="table__cell">
                    <input
                        type="number"
                        class="item-selection__quantity"
                        min="1"
                        max=quantity_max
                        prop:value=move || quantity().to_string()
                        on:change=move |ev| set_quantity(id, event_target_value(&ev))
                    />
                </td>
                <td class="table__cell table__cell--right">
                    {move || format_currency(f64::from(quantity()) * unit_price, currency)}
                </td>
                <td class="table__cell">
                    <button
                        class="item-selection__remove"
                        title="Remove"
                        on:click=move |_| remove(id)
                    >
                        {icon("trash")}
                    </button>
                </td>
            </tr>
        }
    };

    let total_value = Signal::derive(move || {
        let total = selection.with(|s| summary::total(s, price_field));
        format_currency(total, currency)
    });

    view! {
        <div class="item-selection">
            <section class="item-selection__catalog">
                <div class="item-selection__toolbar">
                    <SearchInput
                        value=Signal::derive(move || filter.with(|f| f.search.clone()))
                        on_change=Callback::new(move |search: String| {
                            filter.update(|f| {
                                f.set_search(search);
                            });
                        })
                        placeholder="Search articles..."
                        disabled=is_loading
                        debounce_ms=config.search_debounce_ms
                    />
                    <Show when=move || is_loading.get()>
                        <Spinner />
                    </Show>
                </div>

                {move || catalog.with(|c| c.error.clone()).map(|message| view! {
                    <div class="item-selection__error">{message}</div>
                })}

                <Show
                    when=move || !waiting_for_provider()
                    fallback=|| view! {
                        <p class="item-selection__hint">"Select a provider to browse its articles."</p>
                    }
                >
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=40.0>""</TableHeaderCell>
                                <TableHeaderCell min_width=60.0>"ID"</TableHeaderCell>
                                <TableHeaderCell resizable=true min_width=180.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Brand"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Category"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Provider"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Stock"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Purchase price"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Sale price"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>{catalog_rows}</TableBody>
                    </Table>
                    <PaginationControls
                        current_page=current_page
                        total_pages=total_pages
                        total_count=total_count
                        on_page_change=Callback::new(move |page: usize| {
                            filter.update(|f| {
                                f.set_page(page as u32);
                            });
                        })
                        disabled=is_loading
                    />
                </Show>
            </section>

            <section class="item-selection__summary">
                <h3 class="item-selection__summary-title">{variant.summary_title}</h3>
                <table class="table">
                    <thead>
                        <tr>
                            <th class="table__header-cell">"Article"</th>
                            <th class="table__header-cell">"Brand"</th>
                            <th class="table__header-cell">"Stock"</th>
                            <th class="table__header-cell">"Unit price"</th>
                            <th class="table__header-cell">"Quantity"</th>
                            <th class="table__header-cell">"Subtotal"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || selection.with(|s| s.entries().to_vec())
                            key=|entry| entry.id()
                            children=summary_row
                        />
                        <Show when=move || selection.with(|s| !s.is_empty())>
                            <TableTotalsRow
                                label="TOTAL"
                                value=total_value
                                leading_cols=4
                                trailing_cols=1
                            />
                        </Show>
                    </tbody>
                </table>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use leptos::reactive::owner::Owner;

    use super::selection::tests::article;
    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<Vec<ArticleId>>>>, Callback<SelectionSet>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let callback = Callback::new(move |set: SelectionSet| {
            sink.lock().unwrap().push(set.ids());
        });
        (seen, callback)
    }

    #[test]
    fn test_every_change_reaches_callback() {
        let owner = Owner::new();
        owner.with(|| {
            let selection = RwSignal::new(SelectionSet::new());
            let (seen, callback) = recorder();
            let a = article(1, 5, Some(2.0), Some(3.0));
            let b = article(2, 5, Some(4.0), Some(6.0));

            assert!(apply_selection_change(selection, Some(callback), |s| s.toggle(&a, true)));
            assert!(apply_selection_change(selection, Some(callback), |s| s.toggle(&b, true)));
            assert!(apply_selection_change(selection, Some(callback), |s| {
                s.set_quantity(1, "4", StockCapPolicy::Advisory)
            }));
            assert!(apply_selection_change(selection, Some(callback), |s| s.remove(2)));

            assert_eq!(
                *seen.lock().unwrap(),
                vec![vec![1], vec![1, 2], vec![1, 2], vec![1]]
            );
            assert_eq!(
                selection.with_untracked(|s| s.get(1).map(|e| e.quantity)),
                Some(4)
            );
        });
    }

    #[test]
    fn test_repeated_include_is_silent() {
        let owner = Owner::new();
        owner.with(|| {
            let selection = RwSignal::new(SelectionSet::new());
            let (seen, callback) = recorder();
            let a = article(1, 5, None, None);

            apply_selection_change(selection, Some(callback), |s| s.toggle(&a, true));
            assert!(!apply_selection_change(selection, Some(callback), |s| s.toggle(&a, true)));
            assert!(!apply_selection_change(selection, Some(callback), |s| s.remove(42)));

            assert_eq!(seen.lock().unwrap().len(), 1);
        });
    }

    #[test]
    fn test_snapshot_is_taken_after_the_change() {
        let owner = Owner::new();
        owner.with(|| {
            let selection = RwSignal::new(SelectionSet::new());
            let totals = Arc::new(Mutex::new(Vec::new()));
            let sink = totals.clone();
            let callback = Callback::new(move |set: SelectionSet| {
                sink.lock().unwrap().push(summary::total(&set, PriceField::Sale));
            });
            let a = article(1, 5, Some(2.0), Some(3.0));

            apply_selection_change(selection, Some(callback), |s| s.toggle(&a, true));
            apply_selection_change(selection, Some(callback), |s| {
                s.set_quantity(1, "3", StockCapPolicy::Advisory)
            });

            assert_eq!(*totals.lock().unwrap(), vec![3.0, 9.0]);
        });
    }

    #[test]
    fn test_without_callback_still_mutates() {
        let owner = Owner::new();
        owner.with(|| {
            let selection = RwSignal::new(SelectionSet::new());
            let a = article(1, 5, None, None);

            assert!(apply_selection_change(selection, None, |s| s.toggle(&a, true)));
            assert_eq!(selection.with_untracked(|s| s.ids()), vec![1]);
        });
    }
}
