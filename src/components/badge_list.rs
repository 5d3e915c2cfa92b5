use leptos::prelude::*;

/// Every badge the app can award, in display order.
pub const ALL_BADGES: [&str; 4] = [
    "5 Days Logging Streak",
    "10 Days Logging Streak",
    "3 Days Calorie Goal Streak",
    "3 Days Meal Plan Streak",
];

#[component]
pub fn BadgeList(#[prop(into)] unlocked: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <ul class="badge-list">
            {ALL_BADGES
                .iter()
                .map(|&label| {
                    let earned = move || unlocked.with(|u| u.iter().any(|b| b == label));
                    view! {
                        <li class="badge" class:badge-earned=earned class:badge-locked=move || !earned()>
                            {label}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
