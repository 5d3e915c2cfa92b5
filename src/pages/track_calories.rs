use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, MealAnalysis, MealInput, MealSuggestion, PhotoRequest, TrackingView};
use crate::components::toast::{ToastView, Toasts};
use crate::pages::parse_number;
use crate::session::use_session;

#[component]
pub fn TrackCaloriesPage() -> impl IntoView {
    let ctx = use_session();
    let toasts = Toasts::new();
    let (view_data, set_view_data) = signal::<Option<TrackingView>>(None);

    let (meal_name, set_meal_name) = signal(String::new());
    let (calories, set_calories) = signal(String::new());
    let (protein, set_protein) = signal(String::new());
    let (carbs, set_carbs) = signal(String::new());
    let (fat, set_fat) = signal(String::new());
    let (source, set_source) = signal(String::from("homemade"));

    let (query, set_query) = signal(String::new());
    let (suggestions, set_suggestions) = signal::<Vec<MealSuggestion>>(vec![]);
    let (analysis, set_analysis) = signal::<Option<MealAnalysis>>(None);
    let (analyzing, set_analyzing) = signal(false);

    Effect::new(move |_| {
        if !ctx.signed_in() {
            return;
        }
        spawn_local(async move {
            match commands::get_tracking_data().await {
                Ok(v) => set_view_data.set(Some(v)),
                Err(e) => toasts.error(e),
            }
        });
    });

    let submit_meal = move |meal: MealInput| {
        spawn_local(async move {
            match commands::log_meal(&meal).await {
                Ok(v) => {
                    set_view_data.set(Some(v));
                    toasts.success("Meal logged");
                }
                Err(e) => toasts.error(e),
            }
        });
    };

    let log_manual = move |_| {
        let meal = MealInput {
            name: Some(meal_name.get()),
            calories: parse_number(&calories.get()),
            protein: parse_number(&protein.get()),
            carbs: parse_number(&carbs.get()),
            fat: parse_number(&fat.get()),
            source: Some(source.get()),
        };
        submit_meal(meal);
        set_meal_name.set(String::new());
        set_calories.set(String::new());
        set_protein.set(String::new());
        set_carbs.set(String::new());
        set_fat.set(String::new());
    };

    let search = move |ev: leptos::ev::Event| {
        let q = event_target_value(&ev);
        set_query.set(q.clone());
        spawn_local(async move {
            match commands::search_meal_suggestions(&q).await {
                Ok(found) => set_suggestions.set(found),
                Err(e) => toasts.error(e),
            }
        });
    };

    let on_photo = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        set_analyzing.set(true);
        set_analysis.set(None);
        spawn_local(async move {
            let mime_type = file.type_();
            let result = match read_file_as_base64(file).await {
                Ok(image_base64) => {
                    commands::analyze_meal_photo(&PhotoRequest { image_base64, mime_type }).await
                }
                Err(e) => Err(e),
            };
            match result {
                Ok(a) => set_analysis.set(Some(a)),
                Err(e) => toasts.error(e),
            }
            set_analyzing.set(false);
        });
    };

    let share = move |_| {
        spawn_local(async move {
            match commands::share_progress_url().await {
                Ok(url) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.open_with_url_and_target(&url, "_blank");
                    }
                }
                Err(e) => toasts.error(e),
            }
        });
    };

    let text_input = move |placeholder: &'static str, kind: &'static str, value: ReadSignal<String>, set: WriteSignal<String>| {
        view! {
            <input
                type=kind
                class="input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="page track-page">
            <h2>"Track Calories"</h2>
            <ToastView toasts=toasts />

            <Show
                when=move || ctx.signed_in()
                fallback=|| view! { <p class="empty-state">"Sign in to log meals." <a href="/auth">" Sign in"</a></p> }
            >
                {move || view_data.get().map(|v| {
                    let consumed = v.data.calories_consumed;
                    let pct = if v.daily_target > 0 {
                        (consumed / v.daily_target as f64 * 100.0).min(100.0)
                    } else {
                        0.0
                    };
                    view! {
                        <section class="summary-card">
                            <div class="stat"><span class="stat-label">"Consumed"</span>
                                <span class="stat-value">{format!("{:.0} kcal", consumed)}</span></div>
                            <div class="stat"><span class="stat-label">"Remaining"</span>
                                <span class="stat-value">{format!("{:.0} kcal", v.remaining_calories)}</span></div>
                            <div class="stat"><span class="stat-label">"Points"</span>
                                <span class="stat-value">{v.data.points}</span></div>
                            <div class="progress-bar">
                                <div class="progress-fill" style:width=format!("{:.0}%", pct)></div>
                            </div>
                            <p class="health-summary-text">{v.health_summary.clone()}</p>
                            <div class="weekly-chart">
                                {v.data.weekly_data.iter().map(|d| {
                                    let height = if d.goal > 0.0 { (d.calories / d.goal * 100.0).min(100.0) } else { 0.0 };
                                    view! {
                                        <div class="weekly-bar" title=format!("{:.0} / {:.0} kcal", d.calories, d.goal)>
                                            <div class="weekly-fill" style:height=format!("{:.0}%", height)></div>
                                            <span class="weekly-label">{d.day.clone()}</span>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </section>
                    }
                })}

                <section class="form-section">
                    <h3>"Log a Meal"</h3>
                    <div class="form-row">
                        {text_input("Meal name", "text", meal_name, set_meal_name)}
                        {text_input("Calories", "number", calories, set_calories)}
                    </div>
                    <div class="form-row">
                        {text_input("Protein (g)", "number", protein, set_protein)}
                        {text_input("Carbs (g)", "number", carbs, set_carbs)}
                        {text_input("Fat (g)", "number", fat, set_fat)}
                        <select class="input" prop:value=move || source.get() on:change=move |ev| set_source.set(event_target_value(&ev))>
                            <option value="homemade">"Homemade"</option>
                            <option value="restaurant">"Restaurant"</option>
                        </select>
                    </div>
                    <button class="btn btn-primary" on:click=log_manual>"Log Meal"</button>
                </section>

                <section class="form-section">
                    <h3>"Meal Suggestions"</h3>
                    <input type="text" class="input" placeholder="Search meals..." prop:value=move || query.get() on:input=search />
                    <ul class="suggestion-list">
                        <For
                            each=move || suggestions.get()
                            key=|s| s.name.clone()
                            children=move |s| {
                                let meal = MealInput::from(&s);
                                view! {
                                    <li class="suggestion">
                                        <span>{format!("{} ({:.0} kcal)", s.name, s.calories)}</span>
                                        <button class="btn btn-secondary" on:click=move |_| submit_meal(meal.clone())>"Log"</button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </section>

                <section class="form-section">
                    <h3>"Scan a Meal Photo"</h3>
                    <input type="file" accept="image/*" on:change=on_photo disabled=move || analyzing.get() />
                    <Show when=move || analyzing.get()>
                        <div class="spinner"></div>
                        <p>"Analyzing photo..."</p>
                    </Show>
                    {move || analysis.get().map(|a| {
                        let meal = a.to_meal_input();
                        view! {
                            <div class="analysis-card">
                                <h4>{a.description.clone()}</h4>
                                <p>{format!(
                                    "{:.0} kcal \u{00b7} protein {:.0} g \u{00b7} carbs {:.0} g \u{00b7} fat {:.0} g",
                                    a.calories, a.protein, a.carbs, a.fat
                                )}</p>
                                <button class="btn btn-primary" on:click=move |_| {
                                    submit_meal(meal.clone());
                                    set_analysis.set(None);
                                }>"Log This Meal"</button>
                            </div>
                        }
                    })}
                </section>

                <section class="form-section">
                    <h3>"Today's Meals"</h3>
                    {move || view_data.get().map(|v| view! {
                        <ul class="meal-list">
                            {v.data.logged_meals.into_iter().rev().map(|m| view! {
                                <li class="meal-item">
                                    <span class="meal-name">{m.name}</span>
                                    <span class="meal-kcal">{format!("{:.0} kcal", m.calories)}</span>
                                    <span class="meal-source">{m.source}</span>
                                </li>
                            }).collect_view()}
                        </ul>
                    })}
                    <button class="btn btn-secondary" on:click=share>"Share Progress"</button>
                </section>
            </Show>
        </div>
    }
}

/// Read a picked file as base64 for the photo command.
async fn read_file_as_base64(file: web_sys::File) -> Result<String, String> {
    use js_sys::{ArrayBuffer, Uint8Array};
    use wasm_bindgen_futures::JsFuture;

    let buffer: ArrayBuffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?
        .dyn_into()
        .map_err(|_| "Failed to convert to ArrayBuffer".to_string())?;
    let bytes = Uint8Array::new(&buffer).to_vec();

    // btoa expects a binary string
    let binary: String = bytes.iter().map(|&b| b as char).collect();
    web_sys::window()
        .ok_or_else(|| "No window".to_string())?
        .btoa(&binary)
        .map_err(|e| format!("Failed to encode image: {:?}", e))
}
