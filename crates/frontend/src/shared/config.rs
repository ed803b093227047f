//! Runtime configuration of the UI, provided once through Leptos context.

use leptos::prelude::*;

use super::api_utils::api_base;

/// localStorage key that overrides the API base URL (e.g. a remote backend)
const API_BASE_KEY: &str = "inventory_api_base";
const DEFAULT_API_PORT: u16 = 8080;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    /// Rows per catalog page in the item selection widget
    pub catalog_page_size: u32,
    /// ISO code of the display currency
    pub currency: &'static str,
    /// Lifetime of transient success messages
    pub success_message_ms: u32,
    pub search_debounce_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: format!("http://127.0.0.1:{}", DEFAULT_API_PORT),
            catalog_page_size: 5,
            currency: "NPR",
            success_message_ms: 3000,
            search_debounce_ms: 300,
        }
    }
}

impl AppConfig {
    /// Defaults, with the API base taken from the stored override or else
    /// from the page location.
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Some(base) = stored_api_base().or_else(|| api_base(DEFAULT_API_PORT)) {
            config.api_base = base;
        }
        config
    }
}

fn stored_api_base() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let value = storage.get_item(API_BASE_KEY).ok()??;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Hook to access the configuration; falls back to defaults outside `App`
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}
