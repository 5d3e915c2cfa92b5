use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands;
use crate::components::toast::{ToastView, Toasts};

/// Save or remove one API key in the OS keychain.
#[component]
pub fn ApiKeyForm(
    /// e.g. "Gemini API Key"
    #[prop(into)]
    label: String,
    /// Keychain service, e.g. "nutritrack-gemini-api"
    #[prop(into)]
    service: String,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    let (key_value, set_key_value) = signal(String::new());
    let (is_saved, set_is_saved) = signal(false);
    let (is_busy, set_is_busy) = signal(false);
    let toasts = Toasts::new();
    let service = StoredValue::new(service);

    Effect::new(move |_| {
        let sid = service.get_value();
        spawn_local(async move {
            match commands::get_api_key(&sid).await {
                Ok(key) => set_is_saved.set(key.is_some()),
                Err(e) => toasts.error(format!("Failed to check key: {}", e)),
            }
        });
    });

    let save_key = move |_| {
        let key = key_value.get();
        if key.trim().is_empty() {
            toasts.error("Please enter an API key");
            return;
        }
        set_is_busy.set(true);
        spawn_local(async move {
            match commands::set_api_key(&service.get_value(), key.trim()).await {
                Ok(()) => {
                    set_is_saved.set(true);
                    set_key_value.set(String::new());
                    toasts.success("Saved to Keychain");
                }
                Err(e) => toasts.error(format!("Failed to save: {}", e)),
            }
            set_is_busy.set(false);
        });
    };

    let delete_key = move |_| {
        set_is_busy.set(true);
        spawn_local(async move {
            match commands::delete_api_key(&service.get_value()).await {
                Ok(()) => {
                    set_is_saved.set(false);
                    toasts.success("Key removed");
                }
                Err(e) => toasts.error(format!("Failed to delete: {}", e)),
            }
            set_is_busy.set(false);
        });
    };

    view! {
        <div class="form-group api-key-form">
            <label>{label}</label>
            <div class="input-row">
                <input
                    type="password"
                    placeholder=placeholder
                    class="input input-password"
                    prop:value=move || key_value.get()
                    on:input=move |ev| set_key_value.set(event_target_value(&ev))
                    disabled=move || is_busy.get()
                />
                <button class="btn btn-save" on:click=save_key disabled=move || is_busy.get()>
                    {move || if is_busy.get() { "Saving..." } else { "Save" }}
                </button>
                <Show when=move || is_saved.get()>
                    <button class="btn btn-delete" on:click=delete_key disabled=move || is_busy.get()>
                        "Delete"
                    </button>
                </Show>
            </div>
            <span class="status-text">
                {move || if is_saved.get() { "Configured" } else { "Not configured" }}
            </span>
            <ToastView toasts=toasts />
        </div>
    }
}
