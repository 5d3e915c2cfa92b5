use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;
use wasm_bindgen_futures::spawn_local;

use crate::commands;
use crate::components::sidebar::Sidebar;
use crate::pages::auth::AuthPage;
use crate::pages::chat::ChatPage;
use crate::pages::health::HealthPage;
use crate::pages::home::HomePage;
use crate::pages::meal_planner::MealPlannerPage;
use crate::pages::profile::ProfilePage;
use crate::pages::progress_hub::ProgressHubPage;
use crate::pages::settings::SettingsPage;
use crate::pages::track_calories::TrackCaloriesPage;
use crate::session::{LanguageContext, SessionContext};
use crate::theme::{apply_theme, ThemeContext};

#[component]
pub fn App() -> impl IntoView {
    let (theme, set_theme) = signal(String::from("system"));
    provide_context(ThemeContext { theme, set_theme });

    let (session, set_session) = signal::<Option<commands::Session>>(None);
    provide_context(SessionContext {
        session,
        set_session,
    });

    let (language, set_language) = signal(String::from("en"));
    provide_context(LanguageContext {
        language,
        set_language,
    });

    // Saved preferences and any session restored by the backend
    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(Some(saved)) = commands::get_preference("theme").await {
                set_theme.set(saved);
            }
            if let Ok(Some(saved)) = commands::get_preference("language").await {
                set_language.set(saved);
            }
            if let Ok(current) = commands::current_session().await {
                set_session.set(current);
            }
        });
    });

    Effect::new(move |_| {
        let t = theme.get();
        apply_theme(&t);
    });

    view! {
        <Router>
            <div class="app-layout">
                <Sidebar />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/auth") view=AuthPage />
                        <Route path=path!("/profile") view=ProfilePage />
                        <Route path=path!("/track") view=TrackCaloriesPage />
                        <Route path=path!("/planner") view=MealPlannerPage />
                        <Route path=path!("/progress") view=ProgressHubPage />
                        <Route path=path!("/chat") view=ChatPage />
                        <Route path=path!("/settings") view=SettingsPage />
                        <Route path=path!("/health") view=HealthPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
