use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Search box with debounce and a clear button
///
/// `on_change` fires once typing pauses for `debounce_ms`, and immediately
/// (with an empty string) when the clear button is pressed.
#[component]
pub fn SearchInput(
    /// Current applied search term (initial input value)
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new search term
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
    /// Disable input, e.g. while results are loading
    #[prop(optional, into)]
    disabled: Signal<bool>,
    #[prop(default = 300)]
    debounce_ms: u32,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Local input state (before debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());

    let debounce_timeout = StoredValue::new(None::<i32>);

    let cancel_pending = move || {
        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(w) = web_sys::window() {
                w.clear_timeout_with_handle(timeout_id);
            }
            debounce_timeout.set_value(None);
        }
    };

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        cancel_pending();

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            debounce_ms as i32,
        ) {
            Ok(timeout_id) => debounce_timeout.set_value(Some(timeout_id)),
            Err(e) => log::warn!("setTimeout failed: {:?}", e),
        }
        closure.forget();
    };

    let is_filter_active = move || !value.get().trim().is_empty();
    let is_disabled = move || disabled.get();

    let clear_filter = move |_| {
        cancel_pending();
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class=move || {
            if is_filter_active() { "search-input search-input--active" } else { "search-input" }
        }>
            <input
                type="text"
                class="search-input__field"
                placeholder={placeholder}
                prop:value=move || input_value.get()
                prop:disabled=is_disabled
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        class="search-input__clear"
                        on:click=clear_filter
                        disabled=is_disabled
                        title="Clear"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
