use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands;
use crate::components::api_key_form::ApiKeyForm;
use crate::components::toast::{ToastView, Toasts};
use crate::session::{LanguageContext, LANGUAGES};
use crate::theme::ThemeContext;

const MODELS: [&str; 3] = ["gemini-2.5-flash", "gemini-2.5-pro", "gemini-2.0-flash"];

#[component]
pub fn SettingsPage() -> impl IntoView {
    let theme_ctx = expect_context::<ThemeContext>();
    let lang_ctx = expect_context::<LanguageContext>();
    let (model, set_model) = signal(MODELS[0].to_string());
    let toasts = Toasts::new();

    Effect::new(move |_| {
        spawn_local(async move {
            match commands::get_preference("ai_model").await {
                Ok(Some(saved)) => set_model.set(saved),
                Ok(None) => {}
                Err(e) => toasts.error(format!("Failed to load preference: {}", e)),
            }
        });
    });

    let save = move |key: &'static str, value: String| {
        spawn_local(async move {
            match commands::set_preference(key, &value).await {
                Ok(()) => toasts.success("Preference saved"),
                Err(e) => toasts.error(format!("Failed to save: {}", e)),
            }
        });
    };

    view! {
        <div class="page settings-page">
            <h2>"Settings"</h2>
            <ToastView toasts=toasts />

            <section class="settings-section">
                <h3>"API Keys"</h3>
                <p class="section-description">"Keys are stored in your operating system's keychain."</p>
                <ApiKeyForm label="Gemini API Key" service="nutritrack-gemini-api" placeholder="AIza..." />
                <ApiKeyForm label="Firebase Web API Key" service="nutritrack-firebase-api" placeholder="AIza..." />
            </section>

            <section class="settings-section">
                <h3>"Application"</h3>

                <div class="form-group">
                    <label for="theme">"Theme"</label>
                    <select
                        id="theme"
                        class="input"
                        prop:value=move || theme_ctx.theme.get()
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            theme_ctx.set_theme.set(value.clone());
                            save("theme", value);
                        }
                    >
                        <option value="system">"System"</option>
                        <option value="light">"Light"</option>
                        <option value="dark">"Dark"</option>
                    </select>
                </div>

                <div class="form-group">
                    <label for="language">"Language"</label>
                    <select
                        id="language"
                        class="input"
                        prop:value=move || lang_ctx.language.get()
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            lang_ctx.set_language.set(value.clone());
                            save("language", value);
                        }
                    >
                        {LANGUAGES
                            .iter()
                            .map(|(code, name)| view! { <option value=*code>{*name}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="ai-model">"AI Model"</label>
                    <select
                        id="ai-model"
                        class="input"
                        prop:value=move || model.get()
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            set_model.set(value.clone());
                            save("ai_model", value);
                        }
                    >
                        {MODELS.iter().map(|m| view! { <option value=*m>{*m}</option> }).collect_view()}
                    </select>
                </div>
            </section>
        </div>
    }
}
