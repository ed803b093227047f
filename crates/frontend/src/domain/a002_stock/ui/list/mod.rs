use contracts::domain::a002_stock::{sort_by_entry_date, StockBatch};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_stock::api::fetch_stock;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::{format_number_int, format_price};
use crate::shared::config::use_config;
use crate::shared::date_utils::format_timestamp;
use crate::system::auth::use_session;

/// Stock batches, oldest entry first. Loaded once when mounted.
#[component]
pub fn StockList() -> impl IntoView {
    let config = use_config();
    let session = use_session();

    let (items, set_items) = signal::<Vec<StockBatch>>(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    if session.verify() {
        let token = session.access_token();
        let base = config.api_base.clone();
        set_loading.set(true);

        spawn_local(async move {
            match fetch_stock(&base, token.as_deref()).await {
                Ok(mut batches) => {
                    sort_by_entry_date(&mut batches);
                    set_items.set(batches);
                }
                Err(e) => {
                    log::error!("Failed to load stock: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    }

    let currency = config.currency;

    view! {
        <div class="page">
            <PageHeader title="Stock" icon_name="inventory">
                <Show when=move || loading.get()>
                    <Spinner />
                </Show>
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=120.0>"Batch"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=180.0>"Article"</TableHeaderCell>
                        <TableHeaderCell min_width=90.0>"Quantity"</TableHeaderCell>
                        <TableHeaderCell min_width=160.0>"Entry date"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Sale price"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || items.get().into_iter().enumerate()
                        key=|(idx, batch)| (*idx, batch.batch_id.clone())
                        children=move |(_, batch)| {
                            let batch_id = batch.batch_id;
                            let article = batch.article_name.unwrap_or_default();
                            let quantity = format_number_int(batch.quantity as f64);
                            let entry_date = batch
                                .entry_date
                                .map(|dt| format_timestamp(&dt))
                                .unwrap_or_else(|| "N/A".to_string());
                            let sale_price = format_price(batch.sale_price, currency);
                            let status = batch.status.unwrap_or_default();

                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>{batch_id}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{article}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{quantity}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{entry_date}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{sale_price}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{status}</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
        </div>
    }
}
