use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, GoalSummary, ProfileInput};
use crate::components::toast::{ToastView, Toasts};
use crate::pages::parse_number;
use crate::session::use_session;

const ACTIVITY_LEVELS: [(&str, &str); 5] = [
    ("sedentary", "Sedentary"),
    ("light", "Lightly active"),
    ("moderate", "Moderately active"),
    ("active", "Very active"),
    ("very_active", "Super active"),
];

const GOALS: [(&str, &str); 3] = [
    ("weight_loss", "Weight loss"),
    ("maintenance", "Maintenance"),
    ("muscle_gain", "Muscle gain"),
];

fn text_of<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_session();
    let toasts = Toasts::new();

    let (height, set_height) = signal(String::new());
    let (weight, set_weight) = signal(String::new());
    let (age, set_age) = signal(String::new());
    let (gender, set_gender) = signal(String::from("male"));
    let (activity, set_activity) = signal(String::from("moderate"));
    let (goal, set_goal) = signal(String::from("maintenance"));
    let (restrictions, set_restrictions) = signal::<Vec<String>>(vec![]);
    let (new_restriction, set_new_restriction) = signal(String::new());
    let (summary, set_summary) = signal::<Option<GoalSummary>>(None);
    let (busy, set_busy) = signal(false);

    Effect::new(move |_| {
        if !ctx.signed_in() {
            return;
        }
        spawn_local(async move {
            match commands::get_profile().await {
                Ok(view) => {
                    if let Some(p) = view.profile {
                        set_height.set(text_of(p.height));
                        set_weight.set(text_of(p.weight));
                        set_age.set(text_of(p.age));
                        if let Some(g) = p.gender {
                            set_gender.set(g);
                        }
                        if let Some(a) = p.activity_level {
                            set_activity.set(a);
                        }
                        if let Some(g) = p.goal {
                            set_goal.set(g);
                        }
                        set_restrictions.set(p.dietary_restrictions);
                    }
                    set_summary.set(view.summary);
                }
                Err(e) => toasts.error(e),
            }
        });
    });

    let current_input = move || ProfileInput {
        height: parse_number(&height.get_untracked()),
        weight: parse_number(&weight.get_untracked()),
        age: parse_number(&age.get_untracked()),
        gender: Some(gender.get_untracked()),
        activity_level: Some(activity.get_untracked()),
        dietary_restrictions: restrictions.get_untracked(),
        goal: Some(goal.get_untracked()),
    };

    let calculate = move |_| {
        let input = current_input();
        spawn_local(async move {
            match commands::calculate_goals(&input).await {
                Ok(s) => set_summary.set(Some(s)),
                Err(e) => toasts.error(e),
            }
        });
    };

    let save = move |_| {
        let input = current_input();
        set_busy.set(true);
        spawn_local(async move {
            match commands::save_profile(&input).await {
                Ok(view) => {
                    set_summary.set(view.summary);
                    toasts.success("Profile saved");
                }
                Err(e) => toasts.error(e),
            }
            set_busy.set(false);
        });
    };

    let add_restriction = move |_| {
        let item = new_restriction.get().trim().to_string();
        if item.is_empty() {
            return;
        }
        set_restrictions.update(|r| {
            if !r.contains(&item) {
                r.push(item);
            }
        });
        set_new_restriction.set(String::new());
    };

    let number_field = move |label: &'static str, value: ReadSignal<String>, set: WriteSignal<String>| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <input
                    type="number"
                    class="input"
                    prop:value=move || value.get()
                    on:input=move |ev| set.set(event_target_value(&ev))
                />
            </div>
        }
    };

    let select_field = move |label: &'static str,
                             options: &'static [(&'static str, &'static str)],
                             value: ReadSignal<String>,
                             set: WriteSignal<String>| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <select
                    class="input"
                    prop:value=move || value.get()
                    on:change=move |ev| set.set(event_target_value(&ev))
                >
                    {options
                        .iter()
                        .map(|(v, name)| view! { <option value=*v>{*name}</option> })
                        .collect_view()}
                </select>
            </div>
        }
    };

    view! {
        <div class="page profile-page">
            <h2>"Profile & Goals"</h2>
            <ToastView toasts=toasts />

            <section class="form-section">
                <div class="form-row">
                    {number_field("Height (cm)", height, set_height)}
                    {number_field("Weight (kg)", weight, set_weight)}
                    {number_field("Age", age, set_age)}
                </div>
                <div class="form-row">
                    {select_field("Gender", &[("male", "Male"), ("female", "Female")], gender, set_gender)}
                    {select_field("Activity Level", &ACTIVITY_LEVELS, activity, set_activity)}
                    {select_field("Goal", &GOALS, goal, set_goal)}
                </div>

                <div class="form-group">
                    <label>"Dietary Restrictions"</label>
                    <div class="input-row">
                        <input
                            type="text"
                            class="input"
                            placeholder="e.g. vegetarian"
                            prop:value=move || new_restriction.get()
                            on:input=move |ev| set_new_restriction.set(event_target_value(&ev))
                        />
                        <button class="btn btn-secondary" on:click=add_restriction>"Add"</button>
                    </div>
                    <ul class="chip-list">
                        <For
                            each=move || restrictions.get()
                            key=|r| r.clone()
                            children=move |r| {
                                let target = r.clone();
                                view! {
                                    <li class="chip">
                                        {r}
                                        <button
                                            class="chip-remove"
                                            on:click=move |_| set_restrictions.update(|list| list.retain(|x| *x != target))
                                        >
                                            "\u{00d7}"
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </div>

                <div class="button-row">
                    <button class="btn btn-secondary" on:click=calculate>"Calculate"</button>
                    <Show when=move || ctx.signed_in()>
                        <button class="btn btn-primary" on:click=save disabled=move || busy.get()>
                            {move || if busy.get() { "Saving..." } else { "Save Profile" }}
                        </button>
                    </Show>
                </div>
            </section>

            {move || summary.get().map(|s| view! {
                <section class="results-card">
                    <div class="stat"><span class="stat-label">"BMI"</span>
                        <span class="stat-value">{format!("{:.2} ({})", s.bmi, s.bmi_category)}</span></div>
                    <div class="stat"><span class="stat-label">"BMR"</span>
                        <span class="stat-value">{format!("{:.1} kcal", s.bmr)}</span></div>
                    <div class="stat"><span class="stat-label">"Maintenance"</span>
                        <span class="stat-value">{format!("{} kcal", s.maintenance_calories)}</span></div>
                    <div class="stat"><span class="stat-label">"Daily Target"</span>
                        <span class="stat-value">{format!("{} kcal", s.daily_calorie_target)}</span></div>
                    <div class="stat"><span class="stat-label">"Ideal Range"</span>
                        <span class="stat-value">{format!("{} - {} kcal", s.ideal_range.0, s.ideal_range.1)}</span></div>
                    <ul class="warning-list">
                        {s.warnings.into_iter().map(|w| view! { <li class="status-warning">{w.message}</li> }).collect_view()}
                    </ul>
                </section>
            })}
        </div>
    }
}
