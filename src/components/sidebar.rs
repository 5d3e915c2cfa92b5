use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands;
use crate::session::use_session;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_session();

    let sign_out = move |_| {
        spawn_local(async move {
            if commands::logout().await.is_ok() {
                ctx.set_session.set(None);
            }
        });
    };

    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"NutriTrack"</h1>
                <p class="sidebar-subtitle">"Diet & Calorie Tracker"</p>
            </div>
            <ul class="nav-list">
                <li class="nav-item"><a href="/" class="nav-link">"Home"</a></li>
                <li class="nav-item"><a href="/profile" class="nav-link">"Profile & Goals"</a></li>
                <li class="nav-item"><a href="/track" class="nav-link">"Track Calories"</a></li>
                <li class="nav-item"><a href="/planner" class="nav-link">"Meal Planner"</a></li>
                <li class="nav-item"><a href="/progress" class="nav-link">"Progress Hub"</a></li>
                <li class="nav-item"><a href="/chat" class="nav-link">"Ask NutriTrack AI"</a></li>
                <li class="nav-item"><a href="/settings" class="nav-link">"Settings"</a></li>
                <li class="nav-item"><a href="/health" class="nav-link">"Health Check"</a></li>
            </ul>
            <div class="sidebar-footer">
                {move || match ctx.session.get() {
                    Some(s) => view! {
                        <span class="sidebar-user">{s.email}</span>
                        <button class="btn btn-secondary" on:click=sign_out>"Sign Out"</button>
                    }.into_any(),
                    None => view! {
                        <a href="/auth" class="btn btn-primary">"Sign In"</a>
                    }.into_any(),
                }}
            </div>
        </nav>
    }
}
