use std::collections::HashMap;

use leptos::prelude::*;
use web_sys::window;

/// Pages reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPage {
    #[default]
    NewPurchase,
    NewSale,
    Stock,
    Notifications,
}

impl AppPage {
    pub fn all() -> [AppPage; 4] {
        [
            AppPage::NewPurchase,
            AppPage::NewSale,
            AppPage::Stock,
            AppPage::Notifications,
        ]
    }

    /// Value of the `?active=` query parameter
    pub fn key(&self) -> &'static str {
        match self {
            AppPage::NewPurchase => "u101_new_purchase",
            AppPage::NewSale => "u102_new_sale",
            AppPage::Stock => "a002_stock",
            AppPage::Notifications => "a003_notification",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppPage::NewPurchase => "New purchase",
            AppPage::NewSale => "New sale",
            AppPage::Stock => "Stock",
            AppPage::Notifications => "Notifications",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            AppPage::NewPurchase => "purchases",
            AppPage::NewSale => "sales",
            AppPage::Stock => "inventory",
            AppPage::Notifications => "bell",
        }
    }

    pub fn from_key(key: &str) -> Option<AppPage> {
        AppPage::all().into_iter().find(|p| p.key() == key)
    }
}

/// Reads the active page from a location search string (`?active=...`)
pub fn page_from_search(search: &str) -> Option<AppPage> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").and_then(|key| AppPage::from_key(key))
}

pub fn search_for_page(page: AppPage) -> String {
    let params = HashMap::from([("active".to_string(), page.key().to_string())]);
    format!("?{}", serde_qs::to_string(&params).unwrap_or_default())
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<AppPage>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(AppPage::default()),
        }
    }

    /// Restores the active page from the URL and keeps the URL in sync
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(page) = page_from_search(&search) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = search_for_page(this.active.get());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn activate(&self, page: AppPage) {
        leptos::logging::log!("activate page: '{}'", page.key());
        self.active.set(page);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
