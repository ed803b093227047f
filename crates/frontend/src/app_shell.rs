//! Application Shell - root components of the application
//!
//! - `AppShell` - session gate (sign-in prompt or `MainLayout`)
//! - `MainLayout` - navigation bar and the active page

use crate::domain::a002_stock::ui::list::StockList;
use crate::domain::a003_notification::ui::feed::NotificationFeed;
use crate::layout::global_context::{AppGlobalContext, AppPage};
use crate::layout::Shell;
use crate::system::auth::guard::RequireSession;
use crate::usecases::u101_new_purchase::NewPurchasePage;
use crate::usecases::u102_new_sale::NewSalePage;
use leptos::prelude::*;

fn render_page(page: AppPage) -> AnyView {
    match page {
        AppPage::NewPurchase => view! { <NewPurchasePage /> }.into_any(),
        AppPage::NewSale => view! { <NewSalePage /> }.into_any(),
        AppPage::Stock => view! { <StockList /> }.into_any(),
        AppPage::Notifications => view! { <NotificationFeed /> }.into_any(),
    }
}

/// Main application layout.
///
/// Initializes router integration to keep the active page in the URL (?active=...).
#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().unwrap_or_default();

    ctx.init_router_integration();

    view! {
        <Shell center=move || render_page(ctx.active.get()) />
    }
}

/// Application shell - session gate component
#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <RequireSession>
            <MainLayout />
        </RequireSession>
    }
}
