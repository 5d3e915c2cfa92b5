use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, ProgressEntry, ProgressInput, ProgressOverview};
use crate::components::badge_list::BadgeList;
use crate::components::toast::{ToastView, Toasts};
use crate::pages::parse_number;
use crate::session::use_session;

fn health_text(advice: &str) -> &'static str {
    match advice {
        "underweight" => "Underweight - Eat more balanced meals!",
        "normal" => "Normal weight - Keep it up!",
        "overweight" => "Overweight - Consider light exercise.",
        _ => "Obese - Consult a doctor for a diet plan.",
    }
}

fn calorie_text(advice: &str) -> &'static str {
    match advice {
        "under" => "Below your calorie goal.",
        "on_track" => "On track with your calorie goal.",
        "over" => "Above your calorie goal.",
        _ => "No calorie goal set.",
    }
}

fn adherence_text(adherence: &str) -> &'static str {
    match adherence {
        "under" => "Under the meal plan.",
        "followed" => "Meal plan followed.",
        "over" => "Over the meal plan.",
        _ => "No meal plan to compare.",
    }
}

/// Every recorded entry, newest first.
fn full_history(entries: &[ProgressEntry]) -> Vec<ProgressEntry> {
    entries.iter().rev().cloned().collect()
}

#[component]
fn EntryRow(entry: ProgressEntry) -> impl IntoView {
    view! {
        <tr>
            <td>{entry.date}</td>
            <td>{format!("{:.1}", entry.weight)}</td>
            <td>{format!("{:.2}", entry.bmi)}</td>
            <td>{format!("{:.0}", entry.calorie_intake)}</td>
            <td>{calorie_text(&entry.calorie_advice)}</td>
            <td>{adherence_text(&entry.meal_plan_adherence)}</td>
        </tr>
    }
}

#[component]
pub fn ProgressHubPage() -> impl IntoView {
    let ctx = use_session();
    let toasts = Toasts::new();

    let (weight, set_weight) = signal(String::new());
    let (height, set_height) = signal(String::new());
    let (intake, set_intake) = signal(String::new());
    let (overview, set_overview) = signal(ProgressOverview::default());
    let (latest, set_latest) = signal::<Option<ProgressEntry>>(None);
    let (show_full_history, set_show_full_history) = signal(false);

    Effect::new(move |_| {
        if !ctx.signed_in() {
            return;
        }
        spawn_local(async move {
            match commands::get_progress().await {
                Ok(o) => {
                    set_latest.set(o.entries.last().cloned());
                    set_overview.set(o);
                }
                Err(e) => toasts.error(e),
            }
        });
    });

    let record = move |_| {
        let input = ProgressInput {
            weight: parse_number(&weight.get()),
            height: parse_number(&height.get()),
            calorie_intake: parse_number(&intake.get()),
        };
        spawn_local(async move {
            match commands::record_progress(&input).await {
                Ok(outcome) => {
                    if outcome.newly_unlocked.is_empty() {
                        toasts.success("Progress recorded");
                    } else {
                        toasts.success(format!("Badge unlocked: {}", outcome.newly_unlocked.join(", ")));
                    }
                    set_latest.set(Some(outcome.entry.clone()));
                    set_overview.update(|o| {
                        o.entries.push(outcome.entry);
                        o.weekly = outcome.weekly;
                        for badge in outcome.newly_unlocked {
                            if !o.badges.contains(&badge) {
                                o.badges.push(badge);
                            }
                        }
                    });
                    set_intake.set(String::new());
                }
                Err(e) => toasts.error(e),
            }
        });
    };

    let badges = Signal::derive(move || overview.with(|o| o.badges.clone()));

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

    view! {
        <div class="page progress-page">
            <h2>"Progress Hub"</h2>
            <ToastView toasts=toasts />

            <Show
                when=move || ctx.signed_in()
                fallback=|| view! { <p class="empty-state">"Sign in to record progress." <a href="/auth">" Sign in"</a></p> }
            >
                <section class="form-section">
                    <div class="form-row">
                        {number_field("Weight (kg)", weight, set_weight)}
                        {number_field("Height (cm)", height, set_height)}
                        {number_field("Calories today", intake, set_intake)}
                    </div>
                    <button class="btn btn-primary" on:click=record>"Record Progress"</button>
                </section>

                {move || latest.get().map(|e| view! {
                    <section class="advice-card">
                        <p class="advice-bmi">{format!("BMI {:.2}", e.bmi)}</p>
                        <p>{health_text(&e.health_advice)}</p>
                        <p>{calorie_text(&e.calorie_advice)}</p>
                        <p>{adherence_text(&e.meal_plan_adherence)}</p>
                    </section>
                })}

                <section class="badges-section">
                    <h3>"Badges"</h3>
                    <BadgeList unlocked=badges />
                </section>

                <section class="weekly-section">
                    <h3>"This Week"</h3>
                    <Show
                        when=move || overview.with(|o| !o.weekly.is_empty())
                        fallback=|| view! { <p class="empty-state">"No entries in the last 7 days."</p> }
                    >
                        <table class="progress-table">
                            <thead>
                                <tr>
                                    <th>"Date"</th><th>"Weight"</th><th>"BMI"</th>
                                    <th>"Calories"</th><th>"Goal"</th><th>"Plan"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || overview.get().weekly.into_iter().map(|entry| view! { <EntryRow entry=entry /> }).collect_view()}
                            </tbody>
                        </table>
                    </Show>
                </section>

                <section class="history-section">
                    <button class="btn btn-secondary" on:click=move |_| set_show_full_history.update(|v| *v = !*v)>
                        {move || if show_full_history.get() { "Hide Full History" } else { "Show Full History" }}
                    </button>
                    <Show when=move || show_full_history.get()>
                        <Show
                            when=move || overview.with(|o| !o.entries.is_empty())
                            fallback=|| view! { <p class="empty-state">"No progress recorded yet."</p> }
                        >
                            <table class="progress-table">
                                <thead>
                                    <tr>
                                        <th>"Date"</th><th>"Weight"</th><th>"BMI"</th>
                                        <th>"Calories"</th><th>"Goal"</th><th>"Plan"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || overview.with(|o| full_history(&o.entries)).into_iter().map(|entry| view! { <EntryRow entry=entry /> }).collect_view()}
                                </tbody>
                            </table>
                        </Show>
                    </Show>
                </section>
            </Show>
        </div>
    }
}
