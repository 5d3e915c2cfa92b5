use leptos::prelude::*;

use crate::session::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_session();

    view! {
        <div class="page home-page">
            <h2>"Welcome to NutriTrack"</h2>
            <p class="page-description">
                "Track calories, plan meals with AI, and watch your progress add up."
            </p>

            <Show when=move || !ctx.signed_in()>
                <div class="card notice-card">
                    <p>"Sign in to keep your meals, plans and badges."</p>
                    <a href="/auth" class="btn btn-primary">"Sign In or Sign Up"</a>
                </div>
            </Show>

            <div class="card-grid">
                <div class="card">
                    <h3>"Set Your Goals"</h3>
                    <p>"Compute BMI, BMR and a daily calorie target from your profile"</p>
                    <a href="/profile" class="btn btn-primary">"Open Profile"</a>
                </div>
                <div class="card">
                    <h3>"Track Calories"</h3>
                    <p>"Log meals by hand, from suggestions, or from a photo"</p>
                    <a href="/track" class="btn btn-primary">"Log a Meal"</a>
                </div>
                <div class="card">
                    <h3>"Plan Meals"</h3>
                    <p>"Generate a day of meals and the grocery list to match"</p>
                    <a href="/planner" class="btn btn-primary">"Plan Now"</a>
                </div>
                <div class="card">
                    <h3>"Progress Hub"</h3>
                    <p>"Record weight and intake, earn streak badges"</p>
                    <a href="/progress" class="btn btn-primary">"View Progress"</a>
                </div>
            </div>
        </div>
    }
}
