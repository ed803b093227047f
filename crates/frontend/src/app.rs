use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::AppConfig;
use crate::system::auth::context::SessionProvider;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log::info!("Using API at {}", config.api_base);
    provide_context(config);

    provide_context(AppGlobalContext::new());

    view! {
        <ConfigProvider>
            <SessionProvider>
                <AppShell />
            </SessionProvider>
        </ConfigProvider>
    }
}
