use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, HealthReport};
use crate::components::status_badge::{CheckStatus, StatusBadge};

#[component]
pub fn HealthPage() -> impl IntoView {
    let (checking, set_checking) = signal(false);
    let (report, set_report) = signal::<Option<HealthReport>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    let do_health_check = move || {
        set_checking.set(true);
        set_error.set(None);
        spawn_local(async move {
            match commands::run_health_check().await {
                Ok(r) => set_report.set(Some(r)),
                Err(e) => set_error.set(Some(format!("Health check failed: {}", e))),
            }
            set_checking.set(false);
        });
    };

    Effect::new(move |_| do_health_check());

    let configured = |ok: bool| if ok { "Configured" } else { "Not configured" };

    view! {
        <div class="page health-page">
            <h2>"Health Check"</h2>
            <p class="page-description">
                "Verify that NutriTrack has its API keys and a writable data directory."
            </p>

            <button class="btn btn-primary" on:click=move |_| do_health_check() disabled=move || checking.get()>
                {move || if checking.get() { "Checking..." } else { "Run Health Check" }}
            </button>

            {move || error.get().map(|e| view! {
                <div class="health-error"><span class="status-text status-error">{e}</span></div>
            })}

            {move || report.get().map(|r| {
                let checks = [r.gemini_api_key_set, r.firebase_api_key_set, r.data_dir_accessible];
                let passed = checks.iter().filter(|&&ok| ok).count();
                let summary_class = match passed {
                    3 => "summary-all-pass",
                    0 => "summary-all-fail",
                    _ => "summary-partial",
                };
                let data_detail = r.data_dir_path.clone().unwrap_or_else(|| "Not found".to_string());
                let session_detail = if r.signed_in { "Signed in" } else { "Signed out" };

                view! {
                    <div class="health-results">
                        <StatusBadge label="Gemini API Key" status=CheckStatus::from(r.gemini_api_key_set) detail=configured(r.gemini_api_key_set) />
                        <StatusBadge label="Firebase API Key" status=CheckStatus::from(r.firebase_api_key_set) detail=configured(r.firebase_api_key_set) />
                        <StatusBadge label="Data Directory" status=CheckStatus::from(r.data_dir_accessible) detail=data_detail />
                        <StatusBadge label="Session" status=CheckStatus::from(r.signed_in) detail=session_detail />
                        <div class={format!("health-summary {}", summary_class)}>
                            {format!("{} of 3 checks passed", passed)}
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
