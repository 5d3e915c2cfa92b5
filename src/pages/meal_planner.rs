use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, DietPlan, PlanRequest, PlannedMeal};
use crate::components::grocery_list::GroceryList;
use crate::components::toast::{ToastView, Toasts};
use crate::pages::parse_number;
use crate::session::use_session;

const PREFERENCES: [&str; 6] = ["balanced", "vegetarian", "vegan", "keto", "high-protein", "gluten-free"];

#[component]
fn MealCard(#[prop(into)] slot: String, meal: PlannedMeal) -> impl IntoView {
    view! {
        <div class="meal-card">
            <h4>{slot}</h4>
            <p class="meal-name">{meal.name}</p>
            <p class="meal-kcal">{format!("{:.0} kcal", meal.calories)}</p>
            <ul class="ingredient-list">
                {meal.ingredients.into_iter().map(|i| view! { <li>{i}</li> }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn PlanView(plan: DietPlan) -> impl IntoView {
    let total = plan.breakfast.calories + plan.lunch.calories + plan.dinner.calories;
    view! {
        <div class="plan-view">
            <h3>{plan.plan_name}</h3>
            <div class="card-grid">
                <MealCard slot="Breakfast" meal=plan.breakfast />
                <MealCard slot="Lunch" meal=plan.lunch />
                <MealCard slot="Dinner" meal=plan.dinner />
            </div>
            <p class="plan-total">{format!("Total: {:.0} kcal", total)}</p>
        </div>
    }
}

#[component]
pub fn MealPlannerPage() -> impl IntoView {
    let ctx = use_session();
    let toasts = Toasts::new();

    let (preference, set_preference) = signal(String::from(PREFERENCES[0]));
    let (goal, set_goal) = signal(String::new());
    let (generating, set_generating) = signal(false);
    let (plans, set_plans) = signal::<Vec<DietPlan>>(vec![]);
    let (grocery, set_grocery) = signal::<Vec<String>>(vec![]);

    Effect::new(move |_| {
        if !ctx.signed_in() {
            return;
        }
        spawn_local(async move {
            match commands::list_diet_plans().await {
                Ok(p) => set_plans.set(p),
                Err(e) => toasts.error(e),
            }
            match commands::get_grocery_list().await {
                Ok(items) => set_grocery.set(items),
                Err(e) => toasts.error(e),
            }
            if let Ok(view) = commands::get_profile().await {
                if let Some(g) = view.calorie_goal {
                    set_goal.set(format!("{:.0}", g));
                }
            }
        });
    });

    let generate = move |_| {
        let request = PlanRequest {
            dietary_preferences: preference.get(),
            calorie_goal: parse_number(&goal.get()),
        };
        set_generating.set(true);
        spawn_local(async move {
            match commands::generate_diet_plan(&request).await {
                Ok(generated) => {
                    match generated.warning {
                        Some(w) => toasts.error(w),
                        None => toasts.success("Meal plan saved"),
                    }
                    set_plans.update(|p| p.push(generated.plan));
                    if let Ok(items) = commands::get_grocery_list().await {
                        set_grocery.set(items);
                    } else {
                        set_grocery.set(generated.grocery_list);
                    }
                }
                Err(e) => toasts.error(e),
            }
            set_generating.set(false);
        });
    };

    view! {
        <div class="page planner-page">
            <h2>"Meal Planner"</h2>
            <ToastView toasts=toasts />

            <Show
                when=move || ctx.signed_in()
                fallback=|| view! { <p class="empty-state">"Sign in to generate meal plans." <a href="/auth">" Sign in"</a></p> }
            >
                <section class="form-section">
                    <div class="form-row">
                        <div class="form-group">
                            <label>"Dietary Preference"</label>
                            <select class="input" prop:value=move || preference.get() on:change=move |ev| set_preference.set(event_target_value(&ev))>
                                {PREFERENCES.iter().map(|p| view! { <option value=*p>{*p}</option> }).collect_view()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label>"Calorie Goal"</label>
                            <input type="number" class="input" prop:value=move || goal.get() on:input=move |ev| set_goal.set(event_target_value(&ev)) />
                        </div>
                    </div>
                    <button class="btn btn-primary" on:click=generate disabled=move || generating.get()>
                        {move || if generating.get() { "Generating..." } else { "Generate Plan" }}
                    </button>
                </section>

                {move || plans.get().last().cloned().map(|plan| view! { <PlanView plan=plan /> })}

                <GroceryList items=grocery />

                <Show when=move || plans.with(|p| p.len() > 1)>
                    <section class="plan-history">
                        <h3>"Earlier Plans"</h3>
                        <ul>
                            {move || plans.get().into_iter().rev().skip(1).map(|p| view! {
                                <li>{format!("{} ({:.0} kcal)", p.plan_name, p.breakfast.calories + p.lunch.calories + p.dinner.calories)}</li>
                            }).collect_view()}
                        </ul>
                    </section>
                </Show>
            </Show>
        </div>
    }
}
